use super::{parse_base, Level, Palette};
use crate::core::{find_closest, round};
use crate::error::PaletteError;
use crate::registry::Input;
use crate::space::Hsv;
use crate::{Color, Float};

/// How far each level moves away from the base color.
const INTENSITY: [Float; 11] = [0.95, 0.9, 0.75, 0.6, 0.3, 1.0, 0.9, 0.75, 0.6, 0.45, 0.29];

/// Lighter levels drift toward cyan, magenta, or yellow.
const CMY_HUES: [Float; 3] = [180.0, 300.0, 60.0];

/// Darker levels drift toward red, green, or blue.
const RGB_HUES: [Float; 4] = [360.0, 240.0, 120.0, 0.0];

/// Compute the shift toward the closest reference hue. The first of equally
/// close hues wins.
fn hue_shift(hues: &[Float], hue: Float, intensity: Float) -> Float {
    let closest = find_closest(hues.iter(), |reference| (reference - hue).abs())
        .and_then(|(index, _)| hues.get(index).copied())
        .unwrap_or(hue);

    round(intensity * (closest - hue) * 0.5, 0)
}

fn lighten(hsv: &[Float; 3], intensity: Float) -> Hsv {
    let [h, s, v] = *hsv;
    Hsv::new(
        h + hue_shift(&CMY_HUES, h, intensity),
        s - round(s * intensity, 0),
        v + round((100.0 - v) * intensity, 0),
        1.0,
    )
}

fn darken(hsv: &[Float; 3], intensity: Float) -> Hsv {
    let [h, s, v] = *hsv;
    let intensity = 1.0 - intensity;
    Hsv::new(
        h + hue_shift(&RGB_HUES, h, intensity),
        s + round((100.0 - s) * intensity, 0),
        v - round(v * intensity, 0),
        1.0,
    )
}

/// Generate an 11-level palette of hexadecimal strings by shifting the base
/// color in HSV.
///
/// Lighter levels lose saturation and gain value, darker levels gain
/// saturation and lose value, each in proportion to a fixed per-level
/// intensity. Hue drifts toward the closest secondary color for lighter
/// levels and toward the closest primary color for darker levels. The
/// computation uses whole-number HSV coordinates.
pub fn generate_shift_palette<I: Into<Input>>(input: I) -> Result<Palette<String>, PaletteError> {
    let color = parse_base(input.into())?;
    let Hsv { h, s, v, .. } = color.to_hsv();
    let hsv = [round(h, 0), round(s, 0), round(v, 0)];

    Ok(Palette::from_fn(|level| {
        let intensity = INTENSITY[level.index()];
        if level.is_light() {
            Color::from_model(&lighten(&hsv, intensity)).to_hex()
        } else if level.is_dark() {
            Color::from_model(&darken(&hsv, intensity)).to_hex()
        } else {
            color.to_hex()
        }
    }))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hue_shift() {
        assert_eq!(hue_shift(&CMY_HUES, 0.0, 0.95), 29.0, "toward yellow");
        assert_eq!(hue_shift(&CMY_HUES, 120.0, 1.0), 30.0, "first of two");
        assert_eq!(hue_shift(&RGB_HUES, 350.0, 0.5), 3.0, "toward red");
        assert_eq!(hue_shift(&RGB_HUES, 0.0, 0.5), 0.0, "already red");
    }

    #[test]
    fn test_generate_shift_palette() -> Result<(), PaletteError> {
        let palette = generate_shift_palette("#808080")?;
        assert_eq!(palette[Level::L100], "#f2f2f2", "light gray");
        assert_eq!(palette[Level::L500], "#808080", "base gray");
        assert_eq!(palette[Level::L800], "#4d2e2e", "dark gray");

        let palette = generate_shift_palette("rgb(255 0 0)")?;
        assert_eq!(palette[Level::L50], "#fff8f2", "lightest red");
        assert_eq!(palette[Level::L500], "#ff0000", "base red");
        Ok(())
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            generate_shift_palette("#ff00f"),
            Err(PaletteError::InvalidColor {
                input: "#ff00f".to_owned()
            }),
            "five digits"
        );
    }
}
