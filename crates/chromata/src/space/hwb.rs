use super::{group, write_alpha, ColorModel, ColorObject, Format, Grammar, Hsv, Rgb, ALPHA_PRECISION};
use crate::core::{clamp, clamp_hue, clamp_unit, parse_alpha, parse_hue, parse_number, round};
use crate::Float;

/// An HWB color with hue in `0..360` and whiteness and blackness in
/// `0..=100`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hwb {
    pub h: Float,
    pub w: Float,
    pub b: Float,
    pub alpha: Float,
}

impl Hwb {
    /// Create a new HWB color. The coordinates are not clamped.
    pub const fn new(h: Float, w: Float, b: Float, alpha: Float) -> Self {
        Self { h, w, b, alpha }
    }
}

pub(super) static HWB_GRAMMAR: Grammar = Grammar::new(
    r"^hwb\(\s*([+-]?[\d.]+)(deg|grad|rad|turn)?\s*[, ]\s*([+-]?[\d.]+)%\s*[, ]\s*([+-]?[\d.]+)%(?:\s*\/\s*([+-]?[\d.]+%?))?\s*\)$",
);

impl ColorModel for Hwb {
    const FORMAT: Format = Format::Hwb;

    fn from_rgb(rgb: &Rgb) -> Self {
        let Rgb { r, g, b, alpha } = *rgb;
        let Hsv { h, .. } = Hsv::from_rgb(rgb);

        Self::new(
            h,
            r.min(g).min(b) / 255.0 * 100.0,
            100.0 - r.max(g).max(b) / 255.0 * 100.0,
            alpha,
        )
        .clamped()
    }

    fn to_rgb(&self) -> Rgb {
        let Self { h, w, b, alpha } = *self;
        let s = if b == 100.0 {
            0.0
        } else {
            100.0 - w / (100.0 - b) * 100.0
        };

        Hsv::new(h, s, 100.0 - b, alpha).to_rgb()
    }

    fn clamped(&self) -> Self {
        Self::new(
            clamp_hue(self.h),
            clamp(self.w, 0.0, 100.0),
            clamp(self.b, 0.0, 100.0),
            clamp_unit(self.alpha),
        )
    }

    fn rounded(&self) -> Self {
        Self::new(
            round(self.h, 3),
            round(self.w, 3),
            round(self.b, 3),
            round(self.alpha, ALPHA_PRECISION),
        )
    }

    fn from_object(object: &ColorObject) -> Option<Self> {
        let [h, w, b, alpha] = object.fields3(["h", "w", "b"])?;
        Some(Self::new(h, w, b, alpha).clamped())
    }

    fn to_object(&self) -> ColorObject {
        ColorObject::new()
            .with("h", self.h)
            .with("w", self.w)
            .with("b", self.b)
            .with("alpha", self.alpha)
    }

    fn from_css(text: &str) -> Option<Self> {
        let captures = HWB_GRAMMAR.captures(text)?;

        Some(
            Self::new(
                parse_hue(group(&captures, 1)?, group(&captures, 2).unwrap_or_default())?,
                parse_number(group(&captures, 3)?)?,
                parse_number(group(&captures, 4)?)?,
                parse_alpha(group(&captures, 5))?,
            )
            .clamped(),
        )
    }
}

impl std::fmt::Display for Hwb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { h, w, b, alpha } = self.clamped().rounded();
        write!(f, "hwb({} {}% {}%", h, w, b)?;
        write_alpha(f, alpha)?;
        f.write_str(")")
    }
}
