use super::{group, write_alpha, ColorModel, ColorObject, Format, Grammar, Rgb, ALPHA_PRECISION};
use crate::core::{
    clamp, clamp_unit, oklab_to_linear_srgb, parse_alpha, parse_maybe_percent, parse_number,
    round, srgb_to_oklab,
};
use crate::Float;

/// An Oklab color.
///
/// Lightness ranges over `0..=1`, a and b over `-0.4..=0.4`. The CSS-like
/// string writes lightness as a percentage.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Oklab {
    pub l: Float,
    pub a: Float,
    pub b: Float,
    pub alpha: Float,
}

impl Oklab {
    /// Create a new Oklab color. The coordinates are not clamped.
    pub const fn new(l: Float, a: Float, b: Float, alpha: Float) -> Self {
        Self { l, a, b, alpha }
    }

    /// Get the coordinates without alpha.
    #[inline]
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.l, self.a, self.b]
    }
}

/// Parse Oklab/Oklch lightness, which is either a number in `0..=1` or a
/// percentage.
pub(crate) fn parse_ok_lightness(text: &str) -> Option<Float> {
    let (number, is_percent) = parse_maybe_percent(text)?;
    Some(if is_percent { number / 100.0 } else { number })
}

/// Format Oklab/Oklch lightness as a percentage with one fractional digit.
#[inline]
pub(crate) fn ok_lightness_percent(lightness: Float) -> Float {
    round(lightness * 100.0, 1)
}

pub(super) static OKLAB_GRAMMAR: Grammar = Grammar::new(
    r"^oklab\(\s*([+-]?[\d.]+%?)\s+([+-]?[\d.]+)\s+([+-]?[\d.]+)(?:\s*\/\s*([+-]?[\d.]+%?))?\s*\)$",
);

impl ColorModel for Oklab {
    const FORMAT: Format = Format::Oklab;

    fn from_rgb(rgb: &Rgb) -> Self {
        let [l, a, b] = srgb_to_oklab(&rgb.coordinates());
        Self::new(l, a, b, rgb.alpha).clamped()
    }

    /// Convert to sRGB by clamping in linear sRGB.
    fn to_rgb(&self) -> Rgb {
        Rgb::from_linear_rgb(
            &oklab_to_linear_srgb(&self.coordinates()),
            clamp_unit(self.alpha),
        )
    }

    fn clamped(&self) -> Self {
        Self::new(
            clamp_unit(self.l),
            clamp(self.a, -0.4, 0.4),
            clamp(self.b, -0.4, 0.4),
            clamp_unit(self.alpha),
        )
    }

    fn rounded(&self) -> Self {
        Self::new(
            round(self.l, 3),
            round(self.a, 3),
            round(self.b, 3),
            round(self.alpha, ALPHA_PRECISION),
        )
    }

    fn from_object(object: &ColorObject) -> Option<Self> {
        let [l, a, b, alpha] = object.fields3(["l", "a", "b"])?;
        Some(Self::new(l, a, b, alpha).clamped())
    }

    fn to_object(&self) -> ColorObject {
        ColorObject::new()
            .with("l", self.l)
            .with("a", self.a)
            .with("b", self.b)
            .with("alpha", self.alpha)
    }

    fn from_css(text: &str) -> Option<Self> {
        let captures = OKLAB_GRAMMAR.captures(text)?;

        Some(
            Self::new(
                parse_ok_lightness(group(&captures, 1)?)?,
                parse_number(group(&captures, 2)?)?,
                parse_number(group(&captures, 3)?)?,
                parse_alpha(group(&captures, 4))?,
            )
            .clamped(),
        )
    }
}

impl std::fmt::Display for Oklab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { l, a, b, alpha } = self.clamped().rounded();
        write!(f, "oklab({}% {} {}", ok_lightness_percent(l), a, b)?;
        write_alpha(f, alpha)?;
        f.write_str(")")
    }
}
