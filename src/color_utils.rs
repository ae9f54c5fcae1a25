//! Color utility functions for overlay styling.

/// Two-digit uppercase hex alpha for an opacity in `0.0..=1.0`.
///
/// 0.2 maps to `33` and 0.1 to `1A`.
pub fn alpha_hex(opacity: f64) -> String {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("{:02X}", alpha)
}

/// Append an alpha channel to a `#rrggbb` color.
pub fn with_opacity(color: &str, opacity: f64) -> String {
    format!("{}{}", color, alpha_hex(opacity))
}

/// CSS border shorthand, e.g. `2px solid #ff0000`.
pub fn border(width: f64, color: &str) -> String {
    format!("{}px solid {}", width, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_hex_known_values() {
        assert_eq!(alpha_hex(0.2), "33");
        assert_eq!(alpha_hex(0.1), "1A");
        assert_eq!(alpha_hex(1.0), "FF");
        assert_eq!(alpha_hex(0.0), "00");
    }

    #[test]
    fn test_alpha_hex_clamps() {
        assert_eq!(alpha_hex(3.0), "FF");
        assert_eq!(alpha_hex(-1.0), "00");
    }

    #[test]
    fn test_with_opacity() {
        assert_eq!(with_opacity("#e6194b", 0.2), "#e6194b33");
    }

    #[test]
    fn test_border_formats_fractional_width() {
        assert_eq!(border(0.5, "#000000"), "0.5px solid #000000");
        assert_eq!(border(2.0, "#000000"), "2px solid #000000");
    }
}
