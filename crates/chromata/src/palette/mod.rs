//! Palette generation and matching.
//!
//! All palettes have eleven levels, from the lightest [`Level::L50`] to the
//! darkest [`Level::L950`], with the base color at [`Level::L500`]. This
//! module provides three procedural generators and one search:
//!
//!   * [`generate_palette`] scales lightness and chroma in Oklch. It is the
//!     only generator that supports different [`OutputFormat`]s.
//!   * [`generate_shift_palette`] shifts hue, saturation, and value in HSV.
//!   * [`generate_antd_palette`] follows the Ant Design algorithm for light
//!     and dark themes.
//!   * [`find_nearest_palette`] finds the perceptually closest color amongst
//!     the Tailwind CSS palettes.
//!
//! All four fail with [`PaletteError::InvalidColor`] if the base color does
//! not parse.

mod antd;
mod nearest;
mod scale;
mod shift;
mod tailwind;

use log::debug;

use crate::error::PaletteError;
use crate::registry::Input;
use crate::space::{Hsl, Oklch, Rgb};
use crate::Color;

pub use antd::{generate_antd_palette, Theme};
pub use nearest::{find_nearest_palette, NearestPalette};
pub use scale::generate_palette;
pub use shift::generate_shift_palette;
pub use tailwind::PaletteFamily;

/// A palette level.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    #[cfg_attr(feature = "serde", serde(rename = "50"))]
    L50,
    #[cfg_attr(feature = "serde", serde(rename = "100"))]
    L100,
    #[cfg_attr(feature = "serde", serde(rename = "200"))]
    L200,
    #[cfg_attr(feature = "serde", serde(rename = "300"))]
    L300,
    #[cfg_attr(feature = "serde", serde(rename = "400"))]
    L400,
    #[cfg_attr(feature = "serde", serde(rename = "500"))]
    L500,
    #[cfg_attr(feature = "serde", serde(rename = "600"))]
    L600,
    #[cfg_attr(feature = "serde", serde(rename = "700"))]
    L700,
    #[cfg_attr(feature = "serde", serde(rename = "800"))]
    L800,
    #[cfg_attr(feature = "serde", serde(rename = "900"))]
    L900,
    #[cfg_attr(feature = "serde", serde(rename = "950"))]
    L950,
}

impl Level {
    /// All levels, from lightest to darkest.
    pub const ALL: [Self; 11] = [
        Self::L50,
        Self::L100,
        Self::L200,
        Self::L300,
        Self::L400,
        Self::L500,
        Self::L600,
        Self::L700,
        Self::L800,
        Self::L900,
        Self::L950,
    ];

    /// Get the level's numeric value.
    pub const fn value(&self) -> u16 {
        match *self {
            Self::L50 => 50,
            Self::L100 => 100,
            Self::L200 => 200,
            Self::L300 => 300,
            Self::L400 => 400,
            Self::L500 => 500,
            Self::L600 => 600,
            Self::L700 => 700,
            Self::L800 => 800,
            Self::L900 => 900,
            Self::L950 => 950,
        }
    }

    /// Get the level's zero-based index.
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Look up the level with the numeric value.
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == value)
    }

    /// Determine whether this level is lighter than the base color.
    pub fn is_light(&self) -> bool {
        *self < Self::L500
    }

    /// Determine whether this level is darker than the base color.
    pub fn is_dark(&self) -> bool {
        Self::L500 < *self
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A palette, i.e., one value per level.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, PartialEq)]
pub struct Palette<T> {
    colors: [T; 11],
}

impl<T> Palette<T> {
    /// Create a new palette by computing each level's value.
    pub fn from_fn<F: FnMut(Level) -> T>(f: F) -> Self {
        Self {
            colors: Level::ALL.map(f),
        }
    }

    /// Get the value for the level.
    pub fn get(&self, level: Level) -> &T {
        &self.colors[level.index()]
    }

    /// Iterate over levels and values, from lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = (Level, &T)> {
        Level::ALL.into_iter().zip(self.colors.iter())
    }

    /// Convert the values with the function.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Palette<U> {
        Palette {
            colors: self.colors.map(f),
        }
    }
}

impl<T> std::ops::Index<Level> for Palette<T> {
    type Output = T;

    fn index(&self, index: Level) -> &Self::Output {
        self.get(index)
    }
}

impl<T> From<Palette<T>> for [T; 11] {
    fn from(value: Palette<T>) -> Self {
        value.colors
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The format of palette colors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Hex,
    Rgb,
    RgbString,
    #[default]
    Oklch,
    OklchString,
    Hsl,
    HslString,
}

/// A palette color in some [`OutputFormat`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Clone, Debug, PartialEq)]
pub enum FormattedColor {
    /// A hexadecimal or CSS-like string.
    Text(String),
    Rgb(Rgb),
    Oklch(Oklch),
    Hsl(Hsl),
}

impl std::fmt::Display for FormattedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Text(ref text) => f.write_str(text),
            Self::Rgb(ref rgb) => std::fmt::Display::fmt(rgb, f),
            Self::Oklch(ref oklch) => std::fmt::Display::fmt(oklch, f),
            Self::Hsl(ref hsl) => std::fmt::Display::fmt(hsl, f),
        }
    }
}

/// Format the color.
pub fn format_output(color: &Color, format: OutputFormat) -> FormattedColor {
    match format {
        OutputFormat::Hex => FormattedColor::Text(color.to_hex()),
        OutputFormat::Rgb => FormattedColor::Rgb(color.to_rgb()),
        OutputFormat::RgbString => FormattedColor::Text(color.to_rgb_string()),
        OutputFormat::Oklch => FormattedColor::Oklch(color.to_oklch()),
        OutputFormat::OklchString => FormattedColor::Text(color.to_oklch_string()),
        OutputFormat::Hsl => FormattedColor::Hsl(color.to_hsl()),
        OutputFormat::HslString => FormattedColor::Text(color.to_hsl_string()),
    }
}

/// Parse the base color of a palette.
pub(crate) fn parse_base(input: Input) -> Result<Color, PaletteError> {
    let color = Color::new(input.clone());
    if color.is_valid() {
        Ok(color)
    } else {
        debug!("rejecting invalid base color {}", input);
        Err(PaletteError::InvalidColor {
            input: input.to_string(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_level() {
        assert_eq!(Level::ALL.len(), 11, "eleven levels");
        for (index, level) in Level::ALL.into_iter().enumerate() {
            assert_eq!(level.index(), index, "index of {}", level);
            assert_eq!(Level::from_value(level.value()), Some(level), "value of {}", level);
        }

        assert_eq!(Level::from_value(550), None, "no such level");
        assert!(Level::L400.is_light(), "400 is light");
        assert!(!Level::L500.is_light(), "500 is not light");
        assert!(!Level::L500.is_dark(), "500 is not dark");
        assert!(Level::L600.is_dark(), "600 is dark");
        assert_eq!(Level::L950.to_string(), "950", "display");
    }

    #[test]
    fn test_palette() {
        let palette = Palette::from_fn(|level| level.value());
        assert_eq!(palette[Level::L50], 50, "first");
        assert_eq!(palette[Level::L950], 950, "last");
        assert_eq!(palette.iter().count(), 11, "all levels");

        let palette = palette.map(|value| value / 50);
        assert_eq!(
            <[u16; 11]>::from(palette),
            [1, 2, 4, 6, 8, 10, 12, 14, 16, 18, 19],
            "mapped"
        );
    }

    #[test]
    fn test_format_output() {
        let color = Color::new("#ff0000");
        assert_eq!(
            format_output(&color, OutputFormat::Hex),
            FormattedColor::Text("#ff0000".to_owned()),
            "hex"
        );
        assert_eq!(
            format_output(&color, OutputFormat::Rgb),
            FormattedColor::Rgb(Rgb::new(255.0, 0.0, 0.0, 1.0)),
            "rgb"
        );
        assert_eq!(
            format_output(&color, OutputFormat::HslString).to_string(),
            "hsl(0 100% 50%)",
            "hsl string"
        );
        assert_eq!(
            format_output(&color, OutputFormat::default()).to_string(),
            "oklch(62.8% 0.258 29.234)",
            "oklch"
        );
    }

    #[test]
    fn test_parse_base() {
        assert!(parse_base("#123".into()).is_ok(), "valid base");
        assert_eq!(
            parse_base("#12".into()).map(|color| color.to_hex()),
            Err(PaletteError::InvalidColor {
                input: "#12".to_owned()
            }),
            "invalid base"
        );
    }
}
