use super::{format_output, parse_base, FormattedColor, Level, OutputFormat, Palette, PaletteFamily};
use crate::core::find_closest;
use crate::error::PaletteError;
use crate::registry::Input;
use crate::{Color, Float};

/// The Tailwind CSS color closest to some color.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct NearestPalette {
    /// The color itself, after a round trip through Oklch.
    pub current: FormattedColor,
    /// The closest color's family.
    pub family: PaletteFamily,
    /// The closest color's level.
    pub level: Level,
    /// The closest color.
    pub color: FormattedColor,
    /// The perceptual difference between the color and the closest color.
    pub delta: Float,
    /// The closest color's entire family.
    pub palette: Palette<FormattedColor>,
}

/// Find the perceptually closest color amongst the Tailwind CSS palettes.
///
/// This function scans the 22 families with 11 levels each in order and
/// stops early on an exact match. The first of equally close colors wins.
///
/// ```
/// # use chromata::{find_nearest_palette, Level, OutputFormat, PaletteError, PaletteFamily};
/// let nearest = find_nearest_palette("#ef4444", OutputFormat::Hex)?;
/// assert_eq!(nearest.family, PaletteFamily::Red);
/// assert_eq!(nearest.level, Level::L500);
/// assert_eq!(nearest.delta, 0.0);
/// # Ok::<(), PaletteError>(())
/// ```
pub fn find_nearest_palette<I: Into<Input>>(
    input: I,
    format: OutputFormat,
) -> Result<NearestPalette, PaletteError> {
    let color = parse_base(input.into())?;
    let current = format_output(&Color::from_model(&color.to_oklch()), format);

    let candidates = PaletteFamily::ALL
        .into_iter()
        .flat_map(|family| Level::ALL.into_iter().map(move |level| (family, level)));
    let (index, delta) = find_closest(candidates, |(family, level)| {
        color.delta(&family.color(level))
    })
    .unwrap_or((0, Float::INFINITY));

    let family = PaletteFamily::ALL[index / Level::ALL.len()];
    let level = Level::ALL[index % Level::ALL.len()];

    Ok(NearestPalette {
        current,
        family,
        level,
        color: format_output(&family.color(level), format),
        delta,
        palette: Palette::from_fn(|level| format_output(&family.color(level), format)),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_exact_match() -> Result<(), PaletteError> {
        let nearest = find_nearest_palette("#ef4444", OutputFormat::Hex)?;
        assert_eq!(nearest.family, PaletteFamily::Red, "family");
        assert_eq!(nearest.level, Level::L500, "level");
        assert_eq!(nearest.delta, 0.0, "delta");
        assert_eq!(nearest.color, FormattedColor::Text("#ef4444".to_owned()), "color");
        assert_eq!(
            nearest.palette[Level::L50],
            FormattedColor::Text("#fef2f2".to_owned()),
            "palette"
        );
        Ok(())
    }

    #[test]
    fn test_close_match() -> Result<(), PaletteError> {
        let nearest = find_nearest_palette("rgb(59 130 245)", OutputFormat::Oklch)?;
        assert_eq!(nearest.family, PaletteFamily::Blue, "family");
        assert_eq!(nearest.level, Level::L500, "level");
        assert!(nearest.delta < 0.01, "delta {}", nearest.delta);
        assert!(
            matches!(nearest.current, FormattedColor::Oklch(_)),
            "{:?} in oklch",
            nearest.current
        );
        Ok(())
    }

    #[test]
    fn test_invalid() {
        assert!(
            find_nearest_palette("#ef44", OutputFormat::Hex).is_ok(),
            "four digits are fine"
        );
        assert_eq!(
            find_nearest_palette("#ef444", OutputFormat::Hex),
            Err(PaletteError::InvalidColor {
                input: "#ef444".to_owned()
            }),
            "five digits are not"
        );
    }
}
