use super::{group, write_alpha, ColorModel, ColorObject, Format, Grammar, Hsv, Rgb, ALPHA_PRECISION};
use crate::core::{clamp, clamp_hue, clamp_unit, parse_alpha, parse_hue, parse_number, round};
use crate::Float;

/// An HSL color with hue in `0..360` and saturation and lightness in
/// `0..=100`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
    pub alpha: Float,
}

impl Hsl {
    /// Create a new HSL color. The coordinates are not clamped.
    pub const fn new(h: Float, s: Float, l: Float, alpha: Float) -> Self {
        Self { h, s, l, alpha }
    }

    /// Convert to HSV, which shares the hue.
    pub fn to_hsv(&self) -> Hsv {
        let Self { h, s, l, alpha } = *self;
        let chroma = s * l.min(100.0 - l) / 100.0;

        Hsv::new(
            h,
            if chroma > 0.0 {
                2.0 * chroma / (l + chroma) * 100.0
            } else {
                0.0
            },
            l + chroma,
            alpha,
        )
    }

    /// Convert from HSV, which shares the hue.
    pub fn from_hsv(hsv: &Hsv) -> Self {
        let Hsv { h, s, v, alpha } = *hsv;
        let doubled = (200.0 - s) * v / 100.0;

        let saturation = if 0.0 < doubled && doubled < 200.0 {
            let divisor = if doubled <= 100.0 {
                doubled
            } else {
                200.0 - doubled
            };
            s * v / 100.0 / divisor * 100.0
        } else {
            0.0
        };

        Self::new(h, saturation, doubled / 2.0, alpha)
    }
}

// The legacy syntax separates alpha by comma, the modern syntax by slash.
pub(super) static HSL_GRAMMAR: Grammar = Grammar::new(
    r"^hsla?\(\s*([+-]?[\d.]+)(deg|grad|rad|turn)?\s*[, ]\s*([+-]?[\d.]+)%\s*[, ]\s*([+-]?[\d.]+)%(?:\s*[,/]\s*([+-]?[\d.]+%?))?\s*\)$",
);

impl ColorModel for Hsl {
    const FORMAT: Format = Format::Hsl;

    fn from_rgb(rgb: &Rgb) -> Self {
        Self::from_hsv(&Hsv::from_rgb(rgb)).clamped()
    }

    fn to_rgb(&self) -> Rgb {
        self.to_hsv().to_rgb()
    }

    fn clamped(&self) -> Self {
        Self::new(
            clamp_hue(self.h),
            clamp(self.s, 0.0, 100.0),
            clamp(self.l, 0.0, 100.0),
            clamp_unit(self.alpha),
        )
    }

    fn rounded(&self) -> Self {
        Self::new(
            round(self.h, 3),
            round(self.s, 3),
            round(self.l, 3),
            round(self.alpha, ALPHA_PRECISION),
        )
    }

    fn from_object(object: &ColorObject) -> Option<Self> {
        let [h, s, l, alpha] = object.fields3(["h", "s", "l"])?;
        Some(Self::new(h, s, l, alpha).clamped())
    }

    fn to_object(&self) -> ColorObject {
        ColorObject::new()
            .with("h", self.h)
            .with("s", self.s)
            .with("l", self.l)
            .with("alpha", self.alpha)
    }

    fn from_css(text: &str) -> Option<Self> {
        let captures = HSL_GRAMMAR.captures(text)?;

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

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { h, s, l, alpha } = self.clamped().rounded();
        write!(f, "hsl({} {}% {}%", h, s, l)?;
        write_alpha(f, alpha)?;
        f.write_str(")")
    }
}
