/// A wedge label split into at most two lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WedgeLabel {
    pub top: String,
    pub bottom: Option<String>,
}

impl WedgeLabel {
    fn single(text: &str) -> Self {
        Self { top: text.to_string(), bottom: None }
    }
}

/// Breaks a prize name on whitespace into at most two lines when its
/// rendered width exceeds `max_width`. `measure` supplies rendered widths
/// (the canvas `measure_text` in the browser, a stub in tests).
///
/// A name with no whitespace that still overflows is returned unwrapped:
/// overflowing a wedge beats silently hiding part of a prize name.
pub fn break_label(name: &str, max_width: f64, measure: impl Fn(&str) -> f64) -> WedgeLabel {
    if measure(name) <= max_width || !name.contains(char::is_whitespace) {
        return WedgeLabel::single(name);
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    let mut top = String::new();
    let mut taken = 0;
    for (index, word) in words.iter().enumerate() {
        let candidate = if top.is_empty() {
            (*word).to_string()
        } else {
            format!("{top} {word}")
        };
        // The first word always lands on the top line, even oversized.
        if index == 0 || measure(&candidate) <= max_width {
            top = candidate;
            taken = index + 1;
        } else {
            break;
        }
    }

    let bottom = words[taken..].join(" ");
    if bottom.is_empty() {
        WedgeLabel { top, bottom: None }
    } else {
        WedgeLabel { top, bottom: Some(bottom) }
    }
}
