use super::{format_output, parse_base, FormattedColor, Level, OutputFormat, Palette};
use crate::error::PaletteError;
use crate::registry::Input;
use crate::space::Oklch;
use crate::{Color, Float};

/// Per-level factors for lightness and chroma. For lighter levels, the
/// lightness factor scales the distance to white.
#[rustfmt::skip]
const SCALES: [(Float, Float); 11] = [
    (0.08, 0.065),
    (0.18, 0.15),
    (0.313, 0.276),
    (0.507, 0.491),
    (0.777, 0.771),
    (1.0, 1.0),
    (0.876, 1.145),
    (0.783, 1.136),
    (0.681, 0.93),
    (0.608, 0.682),
    (0.453, 0.425),
];

/// Fixed lightness for grayish colors, indexed by level. The dark values are
/// fractions of the 500 gray's lightness.
#[rustfmt::skip]
const GRAY_LIGHTNESS: [Float; 11] = [
    0.985,
    0.968,
    0.924,
    0.87,
    0.707,
    Float::NAN,
    0.802 * 0.556,
    0.672 * 0.556,
    0.495 * 0.556,
    0.379 * 0.556,
    0.25 * 0.556,
];

/// Colors with less chroma are grayish.
const GRAYISH_CHROMA: Float = 0.05;

/// Determine the sextant-dependent shift factor for the hue.
fn sextant(hue: Float) -> usize {
    match hue {
        h if h < 60.0 || 330.0 <= h => 0,
        h if h < 150.0 => 1,
        h if h < 210.0 => 2,
        h if h < 270.0 => 3,
        _ => 4,
    }
}

/// Shift the hue of lighter colors, mostly toward cooler tones.
fn light_hue_shift(hue: Float, lightness_scale: Float) -> Float {
    let base = (1.0 - lightness_scale) * 8.0;
    base * [-1.0, 1.0, 0.7, -1.0, 0.5][sextant(hue)]
}

/// Shift the hue of darker colors, mostly toward warmer tones.
fn dark_hue_shift(hue: Float, lightness_scale: Float) -> Float {
    let base = (1.0 - lightness_scale) * 10.0;
    base * [0.3, -1.0, 0.3, 0.6, -0.2][sextant(hue)]
}

/// Compute the Oklch color for the level.
fn scale(base: &Oklch, level: Level) -> Oklch {
    let Oklch { l, c, h, alpha } = *base;
    let index = level.index();
    let (lightness_scale, chroma_scale) = SCALES[index];
    let is_grayish = c < GRAYISH_CHROMA;

    if level.is_light() {
        let (lightness, hue) = if is_grayish {
            (GRAY_LIGHTNESS[index], h)
        } else {
            (
                1.0 - (1.0 - l) * lightness_scale,
                (h + light_hue_shift(h, lightness_scale) + 360.0) % 360.0,
            )
        };
        Oklch::new(lightness, (c * chroma_scale).max(0.0), hue, alpha)
    } else if level.is_dark() {
        let (lightness, hue) = if is_grayish {
            // Reddish grays drift a little toward warmer tones.
            let hue = if 330.0 < h {
                (h + (1.0 - lightness_scale) * 10.0) % 360.0
            } else {
                h
            };
            (GRAY_LIGHTNESS[index], hue)
        } else {
            (
                l * lightness_scale,
                (h + dark_hue_shift(h, lightness_scale) + 360.0) % 360.0,
            )
        };
        Oklch::new(lightness, (c * chroma_scale).max(0.0), hue, alpha)
    } else {
        *base
    }
}

/// Generate an 11-level palette by scaling the base color in Oklch.
///
/// Lighter levels move lightness toward white and reduce chroma. Darker
/// levels scale lightness down and mostly boost chroma. Hue shifts slightly,
/// depending on which part of the hue circle the base color falls into. For
/// grayish base colors, with chroma below 0.05, lightness is fixed per level,
/// so that light and dark grays remain distinct.
///
/// ```
/// # use chromata::{generate_palette, FormattedColor, Level, OutputFormat, PaletteError};
/// let palette = generate_palette("#3b82f6", OutputFormat::Hex)?;
/// let FormattedColor::Text(ref hex) = palette[Level::L50] else {
///     panic!("hex format produces strings");
/// };
/// assert!(hex.starts_with('#') && hex.len() == 7);
/// # Ok::<(), PaletteError>(())
/// ```
pub fn generate_palette<I: Into<Input>>(
    input: I,
    format: OutputFormat,
) -> Result<Palette<FormattedColor>, PaletteError> {
    let base = parse_base(input.into())?.to_oklch();

    Ok(Palette::from_fn(|level| {
        let color = Color::from_model(&scale(&base, level));
        format_output(&color, format)
    }))
}

#[cfg(test)]
mod test {
    use super::*;

    fn oklch(color: &FormattedColor) -> Oklch {
        match *color {
            FormattedColor::Oklch(ref oklch) => *oklch,
            _ => Oklch::new(Float::NAN, Float::NAN, Float::NAN, Float::NAN),
        }
    }

    #[test]
    fn test_sextant() {
        assert_eq!(sextant(0.0), 0, "red");
        assert_eq!(sextant(345.0), 0, "red again");
        assert_eq!(sextant(100.0), 1, "yellow-green");
        assert_eq!(sextant(180.0), 2, "cyan");
        assert_eq!(sextant(240.0), 3, "blue");
        assert_eq!(sextant(300.0), 4, "purple");
        assert_eq!(light_hue_shift(240.0, 0.5), -4.0, "cooler blue");
        assert_eq!(dark_hue_shift(100.0, 0.5), -5.0, "cooler yellow");
    }

    #[test]
    fn test_generate_palette() -> Result<(), PaletteError> {
        let base = Color::new("#3b82f6").to_oklch();
        let palette = generate_palette("#3b82f6", OutputFormat::Oklch)?;
        assert_eq!(oklch(&palette[Level::L500]), base, "base color");

        let mut previous = Float::INFINITY;
        for (level, color) in palette.iter() {
            let lightness = oklch(color).l;
            assert!(lightness < previous, "{} has lightness {}", level, lightness);
            previous = lightness;
        }

        let lightest = oklch(&palette[Level::L50]);
        assert!((lightest.l - (1.0 - (1.0 - base.l) * 0.08)).abs() < 0.001, "{:?}", lightest);
        assert!((lightest.h - (base.h - 7.36)).abs() < 0.002, "{:?}", lightest);
        Ok(())
    }

    #[test]
    fn test_grayish() -> Result<(), PaletteError> {
        let palette = generate_palette("#808080", OutputFormat::Oklch)?;
        assert_eq!(oklch(&palette[Level::L50]).l, 0.985, "lightest gray");
        assert_eq!(oklch(&palette[Level::L400]).l, 0.707, "light gray");
        assert_eq!(oklch(&palette[Level::L950]).l, 0.139, "darkest gray");
        Ok(())
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            generate_palette("oklch(1 2)", OutputFormat::Hex),
            Err(PaletteError::InvalidColor {
                input: "oklch(1 2)".to_owned()
            }),
            "invalid base color"
        );
    }
}
