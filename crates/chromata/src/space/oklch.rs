use super::lch::ACHROMATIC_THRESHOLD;
use super::oklab::{ok_lightness_percent, parse_ok_lightness};
use super::{group, write_alpha, ColorModel, ColorObject, Format, Grammar, Rgb, ALPHA_PRECISION};
use crate::core::{
    clamp, clamp_hue, clamp_unit, map_oklch_to_srgb, parse_alpha, parse_hue, parse_number, round,
    srgb_to_oklab, to_polar,
};
use crate::Float;

/// An Oklch color, i.e., Oklab in polar coordinates.
///
/// Lightness ranges over `0..=1`, chroma over `0..=0.37`, and hue over
/// `0..360`. Conversion to sRGB reduces chroma until the color fits into the
/// sRGB gamut.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Oklch {
    pub l: Float,
    pub c: Float,
    pub h: Float,
    pub alpha: Float,
}

impl Oklch {
    /// Create a new Oklch color. The coordinates are not clamped.
    pub const fn new(l: Float, c: Float, h: Float, alpha: Float) -> Self {
        Self { l, c, h, alpha }
    }
}

pub(super) static OKLCH_GRAMMAR: Grammar = Grammar::new(
    r"^oklch\(\s*([+-]?[\d.]+%?)\s+([+-]?[\d.]+)\s+([+-]?[\d.]+)(deg|grad|rad|turn)?(?:\s*\/\s*([+-]?[\d.]+%?))?\s*\)$",
);

impl ColorModel for Oklch {
    const FORMAT: Format = Format::Oklch;

    fn from_rgb(rgb: &Rgb) -> Self {
        let [l, c, h] = to_polar(&srgb_to_oklab(&rgb.coordinates()), ACHROMATIC_THRESHOLD);
        Self::new(l, c, h, rgb.alpha).clamped()
    }

    fn to_rgb(&self) -> Rgb {
        let rgb = map_oklch_to_srgb(&[self.l, self.c, self.h]);
        Rgb::from_coordinates(rgb, clamp_unit(self.alpha))
    }

    fn clamped(&self) -> Self {
        Self::new(
            clamp_unit(self.l),
            clamp(self.c, 0.0, 0.37),
            clamp_hue(self.h),
            clamp_unit(self.alpha),
        )
    }

    fn rounded(&self) -> Self {
        Self::new(
            round(self.l, 3),
            round(self.c, 3),
            round(self.h, 3),
            round(self.alpha, ALPHA_PRECISION),
        )
    }

    fn from_object(object: &ColorObject) -> Option<Self> {
        let [l, c, h, alpha] = object.fields3(["l", "c", "h"])?;
        Some(Self::new(l, c, h, alpha).clamped())
    }

    fn to_object(&self) -> ColorObject {
        ColorObject::new()
            .with("l", self.l)
            .with("c", self.c)
            .with("h", self.h)
            .with("alpha", self.alpha)
    }

    fn from_css(text: &str) -> Option<Self> {
        let captures = OKLCH_GRAMMAR.captures(text)?;

        Some(
            Self::new(
                parse_ok_lightness(group(&captures, 1)?)?,
                parse_number(group(&captures, 2)?)?,
                parse_hue(group(&captures, 3)?, group(&captures, 4).unwrap_or_default())?,
                parse_alpha(group(&captures, 5))?,
            )
            .clamped(),
        )
    }
}

impl std::fmt::Display for Oklch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { l, c, h, alpha } = self.clamped().rounded();
        write!(f, "oklch({}% {} {}", ok_lightness_percent(l), c, h)?;
        write_alpha(f, alpha)?;
        f.write_str(")")
    }
}
