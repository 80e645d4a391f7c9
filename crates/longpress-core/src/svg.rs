//! SVG markup for the widget.
//!
//! Element order is part of the rendered contract: base circle, progress
//! arc, label, completion circle, checkmark. The style helpers are shared
//! with hosts that build the same elements through a DOM API.

use crate::config::WidgetConfig;
use crate::geometry::{CENTER, FINISHED_STROKE_WIDTH, RADIUS, STROKE_WIDTH, ring_radius};
use crate::widget::{WidgetView, FADE_IN_CLASS};

/// SVG namespace URI.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
/// Class of the widget root.
pub const ROOT_CLASS: &str = "longpresser";
/// Checkmark shown after completion.
pub const CHECK_GLYPH: &str = "\u{2714}";
/// Fill of the completion circle.
pub const OVERLAY_FILL: &str = "#EEE";
/// Stroke of the completion circle.
pub const OVERLAY_STROKE: &str = "#CCC";
/// Checkmark color.
pub const CHECK_COLOR: &str = "#000";
pub const LABEL_FONT_SIZE: &str = "0.95em";
pub const CHECK_FONT_SIZE: &str = "1.5em";

/// `viewBox` covering the whole widget.
pub fn view_box() -> String {
    format!("0 0 {} {}", RADIUS * 2.0, RADIUS * 2.0)
}

/// Radius of the completion circle.
pub fn overlay_radius() -> f64 {
    RADIUS - FINISHED_STROKE_WIDTH / 2.0
}

pub fn root_style(view: &WidgetView) -> String {
    format!("cursor: {}", view.cursor.css())
}

pub fn base_circle_style(config: &WidgetConfig, view: &WidgetView) -> String {
    format!(
        "fill: {}; stroke: {}; stroke-width: {}",
        config.bg_fill_color, view.ring_stroke, STROKE_WIDTH
    )
}

pub fn arc_style(config: &WidgetConfig) -> String {
    format!(
        "fill: transparent; stroke: {}; stroke-width: {}",
        config.fg_stroke_color, STROKE_WIDTH
    )
}

pub fn label_style(config: &WidgetConfig) -> String {
    format!(
        "text-anchor: middle; dominant-baseline: middle; font-size: {}; fill: {}",
        LABEL_FONT_SIZE, config.text_color
    )
}

pub fn overlay_circle_style(view: &WidgetView) -> String {
    format!(
        "fill: {}; stroke: {}; stroke-width: {}; opacity: {}",
        OVERLAY_FILL, OVERLAY_STROKE, FINISHED_STROKE_WIDTH, view.overlay_opacity
    )
}

pub fn check_style(view: &WidgetView) -> String {
    format!(
        "text-anchor: middle; dominant-baseline: middle; font-size: {}; fill: {}; opacity: {}",
        CHECK_FONT_SIZE, CHECK_COLOR, view.overlay_opacity
    )
}

/// Class attribute of the overlay elements.
pub fn overlay_class(view: &WidgetView) -> &'static str {
    if view.overlay_faded_in { FADE_IN_CLASS } else { "" }
}

/// Escape text for use in element content or a quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a standalone SVG document for the given state.
pub fn render_svg(config: &WidgetConfig, view: &WidgetView) -> String {
    let (cx, cy) = (CENTER.x, CENTER.y);
    let overlay_class = overlay_class(view);

    [
        format!(
            r#"<svg class="{}" viewBox="{}" version="1.1" xmlns="{}" style="{}">"#,
            ROOT_CLASS,
            view_box(),
            SVG_NS,
            escape(&root_style(view))
        ),
        format!(
            r#"  <circle cx="{}" cy="{}" r="{}" style="{}"/>"#,
            cx,
            cy,
            ring_radius(),
            escape(&base_circle_style(config, view))
        ),
        format!(
            r#"  <path d="{}" style="{}"/>"#,
            view.arc,
            escape(&arc_style(config))
        ),
        format!(
            r#"  <text x="{}" y="{}" style="{}">{}</text>"#,
            cx,
            cy,
            escape(&label_style(config)),
            escape(&config.text)
        ),
        format!(
            r#"  <circle class="{}" cx="{}" cy="{}" r="{}" style="{}"/>"#,
            overlay_class,
            cx,
            cy,
            overlay_radius(),
            escape(&overlay_circle_style(view))
        ),
        format!(
            r#"  <text class="{}" x="{}" y="{}" style="{}">{}</text>"#,
            overlay_class,
            cx,
            cy,
            escape(&check_style(view)),
            CHECK_GLYPH
        ),
        "</svg>".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Device;
    use crate::widget::PressController;

    fn render(controller: &PressController, config: &WidgetConfig) -> String {
        render_svg(config, &WidgetView::new(config, controller))
    }

    #[test]
    fn test_elements_in_order() {
        let config = WidgetConfig::default();
        let svg = render(&PressController::new(config.duration_ms()), &config);

        let order = ["<svg", "<circle", "<path", "<text", "<circle class", "<text class"];
        let mut pos = 0;
        for tag in order {
            let found = svg[pos..].find(tag).map(|i| i + pos);
            assert!(found.is_some(), "missing {tag} after byte {pos}");
            pos = found.unwrap_or(pos) + 1;
        }
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 100 100""#));
        assert!(svg.contains(r#"r="46""#));
        assert!(svg.contains(r#"r="49.5""#));
    }

    #[test]
    fn test_one_element_per_line() {
        let config = WidgetConfig::new("a < b").with_colors("#333", "#666", "#888", "#EEE");
        let svg = render(&PressController::new(config.duration_ms()), &config);
        let lines: Vec<&str> = svg.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("<svg class=\"longpresser\""));
        assert!(lines[1].contains("fill: #EEE"));
        assert!(lines[2].contains("stroke: #666"));
        assert_eq!(lines[3].matches("&lt;").count(), 1);
        assert!(lines[3].contains("fill: #333"));
        assert_eq!(lines[6], "</svg>");
        assert!(!svg.ends_with('\n'));
    }

    #[test]
    fn test_idle_markup() {
        let config = WidgetConfig::default();
        let svg = render(&PressController::new(config.duration_ms()), &config);

        assert!(svg.contains("cursor: pointer"));
        assert!(svg.contains("stroke: #A00; stroke-width: 8"));
        assert!(svg.contains("opacity: 0\""));
        assert!(!svg.contains(FADE_IN_CLASS));
        assert!(svg.contains(">Press Me</text>"));
    }

    #[test]
    fn test_finished_markup() {
        let config = WidgetConfig::default().with_duration(0.1);
        let mut controller = PressController::new(config.duration_ms());
        controller.on_device_down(Device::Mouse, 0.0);
        controller.tick(200.0);
        let svg = render(&controller, &config);

        assert!(svg.contains("cursor: default"));
        assert!(svg.contains("fill: #800; stroke: #F00"));
        assert!(svg.contains("opacity: 1\""));
        assert!(svg.contains(FADE_IN_CLASS));
        assert!(svg.contains(CHECK_GLYPH));
    }

    #[test]
    fn test_label_is_escaped() {
        let config = WidgetConfig::new("<b>Hold & \"go\"</b>");
        let svg = render(&PressController::new(config.duration_ms()), &config);
        assert!(svg.contains("&lt;b&gt;Hold &amp; &quot;go&quot;&lt;/b&gt;"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a'b"), "a&#39;b");
        assert_eq!(escape("plain"), "plain");
    }
}
