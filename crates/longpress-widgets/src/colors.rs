//! CSS color parsing for configured widget colors.

use egui::Color32;

/// Fallback for colors that can't be parsed.
const FALLBACK: Color32 = Color32::from_rgb(128, 128, 128);

/// Parse a CSS hex color (`#RGB`, `#RRGGBB` or `#RRGGBBAA`).
pub fn try_parse_css_color(color: &str) -> Option<Color32> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(Color32::from_rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Some(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => None,
    }
}

/// Parse a CSS color string (e.g., "#6366f1") to Color32, gray if unparseable.
pub fn parse_css_color(color: &str) -> Color32 {
    try_parse_css_color(color).unwrap_or_else(|| {
        log::warn!("Unsupported color {color:?}, using gray");
        FALLBACK
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hex() {
        assert_eq!(parse_css_color("#F00"), Color32::from_rgb(255, 0, 0));
        assert_eq!(parse_css_color("#800"), Color32::from_rgb(136, 0, 0));
        assert_eq!(parse_css_color("#EEE"), Color32::from_rgb(238, 238, 238));
    }

    #[test]
    fn test_long_hex() {
        assert_eq!(parse_css_color("#6366f1"), Color32::from_rgb(0x63, 0x66, 0xf1));
        assert_eq!(parse_css_color("  #000000 "), Color32::BLACK);
    }

    #[test]
    fn test_alpha_hex() {
        assert_eq!(
            try_parse_css_color("#ff000080"),
            Some(Color32::from_rgba_unmultiplied(255, 0, 0, 128))
        );
    }

    #[test]
    fn test_invalid_falls_back_to_gray() {
        assert_eq!(try_parse_css_color("red"), None);
        assert_eq!(try_parse_css_color("#12"), None);
        assert_eq!(try_parse_css_color("#GGG"), None);
        assert_eq!(parse_css_color("tomato"), FALLBACK);
    }
}
