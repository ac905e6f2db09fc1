use std::collections::HashMap;
use std::f64::consts::{PI, TAU};

use shared::layout::SegmentLayout;
use shared::prize::PrizeOption;
use shared::text::break_label;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::theme::WheelTheme;

/// Logical canvas edge in CSS pixels.
pub const WHEEL_SIZE: f64 = 300.0;

const RIM_MARGIN: f64 = 20.0;
const LINE_SPACING: f64 = 3.0;

/// Draws one full frame of the wheel at the given rotation. With an empty
/// option list only the border and hub are drawn; there is no wedge math
/// to divide by zero on.
pub fn draw_wheel(
    ctx: &CanvasRenderingContext2d,
    size: f64,
    options: &[PrizeOption],
    layout: &SegmentLayout,
    rotation: f64,
    theme: &WheelTheme,
    images: &HashMap<String, HtmlImageElement>,
) {
    let center = size / 2.0;
    let radius = size / 2.0 - RIM_MARGIN;
    let inner_radius = radius * theme.inner_radius_pct;
    let content_radius = radius * theme.text_distance_pct;

    ctx.clear_rect(0.0, 0.0, size, size);

    for segment in layout.iter() {
        let prize = match options.get(segment.index) {
            Some(prize) => prize,
            None => break,
        };
        let start = rotation + segment.start_angle;
        let end = rotation + segment.end_angle;

        // Wedge fill
        ctx.begin_path();
        ctx.move_to(center, center);
        let _ = ctx.arc(center, center, radius, start, end);
        ctx.line_to(center, center);
        ctx.close_path();
        let background = prize
            .style
            .as_ref()
            .and_then(|s| s.background_color.as_deref())
            .unwrap_or_else(|| theme.slice_color(segment.index));
        ctx.set_fill_style_str(background);
        ctx.fill();

        // Divider along the leading edge; segments tile the circle, so this
        // covers every boundary.
        if theme.radius_line_width > 0.0 {
            ctx.set_stroke_style_str(&theme.radius_line_color);
            ctx.set_line_width(theme.radius_line_width);
            draw_radial_border(ctx, center, inner_radius, radius, start);
        }

        draw_segment_content(
            ctx,
            prize,
            layout,
            rotation + segment.mid_angle(),
            center,
            content_radius,
            theme,
            theme.slice_text_color(segment.index),
            images,
        );
    }

    // Outer border
    if theme.outer_border_width > 0.0 {
        ctx.begin_path();
        ctx.set_stroke_style_str(&theme.outer_border_color);
        ctx.set_line_width(theme.outer_border_width);
        let _ = ctx.arc(center, center, radius, 0.0, TAU);
        ctx.stroke();
    }

    // Hub and inner border
    ctx.begin_path();
    let _ = ctx.arc(center, center, inner_radius, 0.0, TAU);
    ctx.set_fill_style_str(&theme.hub_color);
    ctx.fill();
    if theme.inner_border_width > 0.0 {
        ctx.set_stroke_style_str(&theme.inner_border_color);
        ctx.set_line_width(theme.inner_border_width);
        ctx.stroke();
    }

    draw_pointer(ctx, center, radius, theme);
}

fn draw_radial_border(
    ctx: &CanvasRenderingContext2d,
    center: f64,
    inside_radius: f64,
    outside_radius: f64,
    angle: f64,
) {
    ctx.begin_path();
    ctx.move_to(
        center + (inside_radius + 1.0) * angle.cos(),
        center + (inside_radius + 1.0) * angle.sin(),
    );
    ctx.line_to(
        center + (outside_radius - 1.0) * angle.cos(),
        center + (outside_radius - 1.0) * angle.sin(),
    );
    ctx.stroke();
}

#[allow(clippy::too_many_arguments)]
fn draw_segment_content(
    ctx: &CanvasRenderingContext2d,
    prize: &PrizeOption,
    layout: &SegmentLayout,
    content_angle: f64,
    center: f64,
    content_radius: f64,
    theme: &WheelTheme,
    fallback_text_color: &str,
    images: &HashMap<String, HtmlImageElement>,
) {
    ctx.save();
    let _ = ctx.translate(
        center + content_radius * content_angle.cos(),
        center + content_radius * content_angle.sin(),
    );

    if let Some(image) = prize.image.as_ref() {
        if let Some(img) = images.get(&image.url).filter(|i| i.complete() && i.natural_width() > 0) {
            let mut angle = content_angle;
            if !image.landscape {
                angle += PI / 2.0;
            }
            let _ = ctx.rotate(angle);
            let width = f64::from(img.width());
            let height = f64::from(img.height());
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                -width / 2.0 + image.offset_x,
                -height / 2.0 + image.offset_y,
                width,
                height,
            );
            ctx.restore();
            return;
        }
        // Image still loading; fall through to the text label so the wedge
        // is never blank.
    }

    let mut angle = content_angle;
    if theme.perpendicular_text {
        angle += PI / 2.0;
    }
    let _ = ctx.rotate(angle);

    let style = prize.style.as_ref();
    let font_size = style.and_then(|s| s.font_size).unwrap_or(theme.font_size);
    let font_family = style
        .and_then(|s| s.font_family.as_deref())
        .unwrap_or(&theme.font_family);
    let font_weight = style
        .and_then(|s| s.font_weight.as_deref())
        .unwrap_or(&theme.font_weight);
    ctx.set_font(&format!("{font_weight} {font_size}px {font_family}"));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let text_color = style
        .and_then(|s| s.text_color.as_deref())
        .unwrap_or(fallback_text_color);
    ctx.set_fill_style_str(text_color);

    // Available width is the arc length at the text radius, with some slack
    // for the curvature.
    let max_width = layout.angle_per_segment() * content_radius * 0.7;
    let label = break_label(&prize.name, max_width, |text| {
        ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
    });

    match label.bottom {
        Some(bottom) => {
            let y_offset = (font_size + LINE_SPACING) / 2.0;
            let _ = ctx.fill_text(&label.top, 0.0, -y_offset + font_size / 2.0);
            let _ = ctx.fill_text(&bottom, 0.0, y_offset + font_size / 2.0);
        }
        None => {
            let _ = ctx.fill_text(&label.top, 0.0, 0.0);
        }
    }

    ctx.restore();
}

/// Fixed pointer at 12 o'clock, independent of wheel rotation.
fn draw_pointer(ctx: &CanvasRenderingContext2d, center: f64, radius: f64, theme: &WheelTheme) {
    let pointer_size = radius * 0.08;
    let tip_y = center - radius + pointer_size;
    ctx.begin_path();
    ctx.move_to(center, tip_y + pointer_size * 0.5);
    ctx.line_to(center - pointer_size, tip_y - pointer_size * 1.5);
    ctx.line_to(center + pointer_size, tip_y - pointer_size * 1.5);
    ctx.close_path();
    ctx.set_fill_style_str(&theme.pointer_color);
    ctx.fill();
}
