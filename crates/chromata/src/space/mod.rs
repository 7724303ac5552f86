//! Per-space color records and their codecs.
//!
//! Every color space has its own record type with named coordinates plus
//! alpha. The records implement [`ColorModel`], which converts to and from the
//! canonical [`Rgb`] representation, clamps and rounds coordinates, and parses
//! structured objects as well as CSS-like strings. The record's [`Display`]
//! implementation writes the CSS-like string.
//!
//! [`Display`]: std::fmt::Display

mod cmyk;
mod hex;
mod hsl;
mod hsv;
mod hwb;
mod lab;
mod lch;
mod oklab;
mod oklch;
mod rgb;
mod xyz;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use log::error;
use regex::{Captures, Regex, RegexBuilder};

use crate::Float;

pub use cmyk::Cmyk;
pub use hex::{parse_hex, to_hex};
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use hwb::Hwb;
pub use lab::Lab;
pub use lch::Lch;
pub use oklab::Oklab;
pub use oklch::Oklch;
pub use rgb::Rgb;
pub use xyz::Xyz;

/// The number of fractional digits for alpha.
pub const ALPHA_PRECISION: i32 = 3;

// --------------------------------------------------------------------------------------------------------------------

/// A color format.
///
/// Each format tags the parser that recognized an input. Lab, Lch, Oklab,
/// Oklch, and Xyz are *tracked* formats: colors parsed from them remember
/// their input, so that converting back to the same space is lossless.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Format {
    Hex,
    Rgb,
    Hsl,
    Hsv,
    Hwb,
    Xyz,
    Lab,
    Lch,
    Oklab,
    Oklch,
    Cmyk,
}

impl Format {
    /// Get this format's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Hwb => "hwb",
            Self::Xyz => "xyz",
            Self::Lab => "lab",
            Self::Lch => "lch",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
            Self::Cmyk => "cmyk",
        }
    }

    /// Determine whether colors in this format remember their input.
    pub const fn is_tracked(&self) -> bool {
        matches!(
            *self,
            Self::Xyz | Self::Lab | Self::Lch | Self::Oklab | Self::Oklch
        )
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A structured color, i.e., a map from field names to numbers.
///
/// Object parsers look for their fields by name, e.g., `r`, `g`, and `b` for
/// RGB colors. A missing `alpha` defaults to 1. Since parsers are tried in
/// order, fields with the same names across color spaces, notably `l`, `a`,
/// and `b` for CIELAB and Oklab, are claimed by whichever parser comes first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorObject {
    fields: BTreeMap<String, Float>,
}

impl ColorObject {
    /// Create a new, empty color object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the field to this color object.
    #[must_use = "method returns updated color object and does not mutate original value"]
    pub fn with<S: Into<String>>(mut self, name: S, value: Float) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Set the field.
    pub fn insert<S: Into<String>>(&mut self, name: S, value: Float) {
        self.fields.insert(name.into(), value);
    }

    /// Get the field's value.
    pub fn get(&self, name: &str) -> Option<Float> {
        self.fields.get(name).copied()
    }

    /// Get the three required fields and the optional alpha.
    ///
    /// This method returns `None` if any of the required fields is missing.
    pub(crate) fn fields3(&self, names: [&str; 3]) -> Option<[Float; 4]> {
        Some([
            self.get(names[0])?,
            self.get(names[1])?,
            self.get(names[2])?,
            self.get("alpha").unwrap_or(1.0),
        ])
    }

    /// Determine whether this color object has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over field names and values, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Float)> + '_ {
        self.fields.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl std::fmt::Display for ColorObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (index, (name, value)) in self.iter().enumerate() {
            if 0 < index {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        f.write_str("}")
    }
}

impl<S: Into<String>, const N: usize> From<[(S, Float); N]> for ColorObject {
    fn from(value: [(S, Float); N]) -> Self {
        let mut object = Self::new();
        for (name, number) in value {
            object.insert(name, number);
        }
        object
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color model, i.e., a color space's record type and codec.
///
/// All conversions go through the canonical [`Rgb`] representation. Records
/// returned by `from_rgb`, `from_object`, and `from_css` have been clamped but
/// not rounded.
pub trait ColorModel: Copy + Sized + std::fmt::Display {
    /// The format tag for inputs in this color model.
    const FORMAT: Format;

    /// Convert the canonical color to this color model.
    fn from_rgb(rgb: &Rgb) -> Self;

    /// Convert this color to the canonical color, clamping the result.
    fn to_rgb(&self) -> Rgb;

    /// Clamp the coordinates to their valid ranges.
    #[must_use = "method returns new color and does not mutate original value"]
    fn clamped(&self) -> Self;

    /// Round the coordinates for display.
    #[must_use = "method returns new color and does not mutate original value"]
    fn rounded(&self) -> Self;

    /// Parse a structured color.
    fn from_object(object: &ColorObject) -> Option<Self>;

    /// Convert this color to a structured color.
    fn to_object(&self) -> ColorObject;

    /// Parse a CSS-like string.
    fn from_css(text: &str) -> Option<Self>;
}

/// Parse a structured color with the color model, producing the canonical
/// color.
pub(crate) fn parse_object<M: ColorModel>(object: &ColorObject) -> Option<Rgb> {
    M::from_object(object).map(|color| color.to_rgb())
}

/// Parse a CSS-like string with the color model, producing the canonical
/// color.
pub(crate) fn parse_css<M: ColorModel>(text: &str) -> Option<Rgb> {
    M::from_css(text).map(|color| color.to_rgb())
}

macro_rules! impl_color_object_from {
    ($($model:ty),*) => {
        $(
            impl From<$model> for ColorObject {
                fn from(value: $model) -> Self {
                    value.to_object()
                }
            }
        )*
    };
}

impl_color_object_from!(Rgb, Hsl, Hsv, Hwb, Xyz, Lab, Lch, Oklab, Oklch, Cmyk);

// --------------------------------------------------------------------------------------------------------------------

/// A lazily compiled, case-insensitive regular expression for a CSS-like color
/// syntax.
pub(crate) struct Grammar {
    pattern: &'static str,
    regex: OnceLock<Option<Regex>>,
}

impl Grammar {
    /// Create a new grammar for the given pattern.
    pub const fn new(pattern: &'static str) -> Self {
        Self {
            pattern,
            regex: OnceLock::new(),
        }
    }

    /// Get the compiled regular expression. A pattern that fails to compile
    /// is logged once and never matches.
    fn regex(&self) -> Option<&Regex> {
        self.regex
            .get_or_init(|| {
                RegexBuilder::new(self.pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|err| error!("invalid color grammar {:?}: {}", self.pattern, err))
                    .ok()
            })
            .as_ref()
    }

    /// Match the text against this grammar.
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex()?.captures(text)
    }
}

/// Get the text of the capture group, if it participated in the match.
#[inline]
pub(crate) fn group<'t>(captures: &Captures<'t>, index: usize) -> Option<&'t str> {
    captures.get(index).map(|m| m.as_str())
}

/// Write the alpha suffix of a space-separated CSS color function, but only
/// if the color is translucent.
pub(crate) fn write_alpha(f: &mut std::fmt::Formatter<'_>, alpha: Float) -> std::fmt::Result {
    if alpha < 1.0 {
        write!(f, " / {}", alpha)
    } else {
        Ok(())
    }
}

/// Round-trip seeded random 8-bit sRGB colors through a color model.
///
/// For each color, this function returns the color, its rounded conversion
/// into the model, and the rounded conversion of the latter after going back
/// to sRGB.
#[cfg(test)]
pub(crate) fn round_trips<M: ColorModel>(seed: u64, count: usize) -> Vec<(Rgb, M, M)> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let rgb = Rgb::new(
                Float::from(rng.random::<u8>()),
                Float::from(rng.random::<u8>()),
                Float::from(rng.random::<u8>()),
                1.0,
            );
            let first = M::from_rgb(&rgb).rounded();
            let second = M::from_rgb(&first.to_rgb()).rounded();
            (rgb, first, second)
        })
        .collect()
}

/// Determine whether the coordinates differ by at most one unit in the last
/// rounded digit.
#[cfg(test)]
pub(crate) fn within_precision<const N: usize>(
    first: [Float; N],
    second: [Float; N],
    digits: i32,
) -> bool {
    let unit = Float::powi(10.0, -digits);
    first
        .iter()
        .zip(second.iter())
        .all(|(c1, c2)| (c1 - c2).abs() <= unit * 1.01)
}

/// Compute the distance between two hues in degrees.
#[cfg(test)]
pub(crate) fn hue_distance(h1: Float, h2: Float) -> Float {
    let distance = (h1 - h2).abs() % 360.0;
    distance.min(360.0 - distance)
}
