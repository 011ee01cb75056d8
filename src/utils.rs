//! Utility functions

use iced::Color;

// ============================================================================
// Hex Colors
// ============================================================================

/// Parse a `#RRGGBB` or `#RRGGBBAA` string into a color
///
/// The leading `#` is optional. Returns `None` for anything else.
pub fn parse_hex_color(input: &str) -> Option<Color> {
    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if hex.len() == 8 { channel(6)? } else { 255 };

    Some(Color::from_rgba8(r, g, b, a as f32 / 255.0))
}

/// Format a color as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    if a == 255 {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

// ============================================================================
// Color Mixing
// ============================================================================

/// Linear interpolation between two colors, `t` clamped to [0, 1]
pub fn mix_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}

/// Mix two color sets stop by stop
///
/// Both sets come from the same palette, so they have equal length.
pub fn mix_colors(from: &[Color], to: &[Color], t: f32) -> Vec<Color> {
    from.iter()
        .zip(to)
        .map(|(a, b)| mix_color(*a, *b, t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        let color = parse_hex_color("#8E2DE2").unwrap();
        assert_eq!(color.into_rgba8(), [0x8E, 0x2D, 0xE2, 0xFF]);
    }

    #[test]
    fn test_parse_rgba_without_hash() {
        let color = parse_hex_color("00000033").unwrap();
        assert_eq!(color.into_rgba8(), [0, 0, 0, 0x33]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_hex_color("").is_none());
        assert!(parse_hex_color("#123").is_none());
        assert!(parse_hex_color("#GG0000").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(to_hex(Color::from_rgb8(0x4A, 0x00, 0xE0)), "#4A00E0");
        assert_eq!(to_hex(Color::TRANSPARENT), "#00000000");
    }

    #[test]
    fn test_mix_endpoints_and_midpoint() {
        let black = Color::BLACK;
        let white = Color::WHITE;

        assert_eq!(mix_color(black, white, 0.0), black);
        assert_eq!(mix_color(black, white, 1.0), white);
        assert_eq!(mix_color(black, white, 2.0), white);

        let mid = mix_color(black, white, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.a - 1.0).abs() < 1e-6);
    }
}
