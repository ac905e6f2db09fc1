/// Visual configuration for the wheel canvas. Defaults mirror the
/// production look: alternating purple/white wedges, a gold hub, and a red
/// pointer at 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelTheme {
    pub outer_border_color: String,
    pub outer_border_width: f64,
    pub radius_line_color: String,
    pub radius_line_width: f64,
    pub inner_border_color: String,
    pub inner_border_width: f64,
    /// Hub radius as a fraction of the outer radius.
    pub inner_radius_pct: f64,
    /// Label anchor radius as a fraction of the outer radius.
    pub text_distance_pct: f64,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: String,
    /// Cycled per wedge when a prize carries no style of its own.
    pub slice_colors: Vec<String>,
    pub slice_text_colors: Vec<String>,
    pub hub_color: String,
    pub pointer_color: String,
    /// Rotate labels a quarter turn past the radius so they read along the
    /// wedge instead of outward from the hub.
    pub perpendicular_text: bool,
}

impl Default for WheelTheme {
    fn default() -> Self {
        Self {
            outer_border_color: "#dddddd".to_string(),
            outer_border_width: 1.0,
            radius_line_color: "#dddddd".to_string(),
            radius_line_width: 1.0,
            inner_border_color: "#aaaaaa".to_string(),
            inner_border_width: 1.0,
            inner_radius_pct: 0.12,
            text_distance_pct: 0.65,
            font_family: "Arial".to_string(),
            font_size: 9.0,
            font_weight: "bold".to_string(),
            slice_colors: vec!["#6d28d9".to_string(), "#ffffff".to_string()],
            slice_text_colors: vec!["#ffffff".to_string(), "#2d004f".to_string()],
            hub_color: "#f3c677".to_string(),
            pointer_color: "#ff0000".to_string(),
            perpendicular_text: true,
        }
    }
}

impl WheelTheme {
    pub fn slice_color(&self, index: usize) -> &str {
        &self.slice_colors[index % self.slice_colors.len()]
    }

    pub fn slice_text_color(&self, index: usize) -> &str {
        &self.slice_text_colors[index % self.slice_text_colors.len()]
    }
}
