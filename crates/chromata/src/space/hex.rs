use super::{group, ColorModel, Grammar, Rgb};
use crate::core::round;
use crate::Float;

pub(super) static HEX_GRAMMAR: Grammar = Grammar::new(r"^#([0-9a-f]{3,8})$");

/// Parse a hexadecimal color with 3, 4, 6, or 8 digits.
///
/// The optional fourth or eighth digit pair is alpha, which is rounded to two
/// fractional digits. Hexadecimal colors with 5 or 7 digits do not parse.
pub fn parse_hex(text: &str) -> Option<Rgb> {
    let captures = HEX_GRAMMAR.captures(text)?;
    let digits = group(&captures, 1)?;

    let byte = |text: &str| u8::from_str_radix(text, 16).ok().map(Float::from);
    let doubled = |index: usize| {
        let digit = digits.get(index..=index)?;
        byte(&digit.repeat(2))
    };
    let paired = |index: usize| byte(digits.get(2 * index..2 * index + 2)?);

    let [r, g, b, a] = match digits.len() {
        3 => [doubled(0)?, doubled(1)?, doubled(2)?, 255.0],
        4 => [doubled(0)?, doubled(1)?, doubled(2)?, doubled(3)?],
        6 => [paired(0)?, paired(1)?, paired(2)?, 255.0],
        8 => [paired(0)?, paired(1)?, paired(2)?, paired(3)?],
        _ => return None,
    };

    Some(Rgb::new(r, g, b, round(a / 255.0, 2)))
}

/// Format the color as a lower-case hexadecimal string.
///
/// The result includes an alpha digit pair only if the color is translucent.
pub fn to_hex(rgb: &Rgb) -> String {
    let Rgb { r, g, b, alpha } = rgb.clamped().rounded();

    #[inline]
    fn byte(value: Float) -> u8 {
        value.round().clamp(0.0, 255.0) as u8
    }

    if alpha < 1.0 {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            byte(r),
            byte(g),
            byte(b),
            byte(alpha * 255.0)
        )
    } else {
        format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
    }
}
