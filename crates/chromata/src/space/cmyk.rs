use super::{group, write_alpha, ColorModel, ColorObject, Format, Grammar, Rgb, ALPHA_PRECISION};
use crate::core::{clamp, clamp_unit, parse_alpha, parse_maybe_percent, round};
use crate::Float;

/// A naive, device-dependent CMYK color with all four coordinates in
/// `0..=100`.
///
/// Conversion does not involve color profiles and produces whole
/// percentages and whole sRGB coordinates.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cmyk {
    pub c: Float,
    pub m: Float,
    pub y: Float,
    pub k: Float,
    pub alpha: Float,
}

impl Cmyk {
    /// Create a new CMYK color. The coordinates are not clamped.
    pub const fn new(c: Float, m: Float, y: Float, k: Float, alpha: Float) -> Self {
        Self { c, m, y, k, alpha }
    }
}

pub(super) static CMYK_GRAMMAR: Grammar = Grammar::new(
    r"^device-cmyk\(\s*([\d.]+%?)\s*[, ]\s*([\d.]+%?)\s*[, ]\s*([\d.]+%?)\s*[, ]\s*([\d.]+%?)(?:\s*\/\s*([\d.]+%?))?\s*\)$",
);

/// Parse a CMYK coordinate. Plain numbers are fractions of one.
fn parse_coordinate(text: &str) -> Option<Float> {
    let (number, is_percent) = parse_maybe_percent(text)?;
    Some(if is_percent { number } else { number * 100.0 })
}

impl ColorModel for Cmyk {
    const FORMAT: Format = Format::Cmyk;

    fn from_rgb(rgb: &Rgb) -> Self {
        let Rgb { r, g, b, alpha } = *rgb;
        let k = 1.0 - (r / 255.0).max(g / 255.0).max(b / 255.0);

        // Black has no ink other than black.
        let ink = |value: Float| {
            let ink = (1.0 - value / 255.0 - k) / (1.0 - k);
            if ink.is_nan() {
                0.0
            } else {
                round(ink * 100.0, 0)
            }
        };

        Self::new(ink(r), ink(g), ink(b), round(k * 100.0, 0), alpha).clamped()
    }

    fn to_rgb(&self) -> Rgb {
        let Self { c, m, y, k, alpha } = *self;
        let channel = |ink: Float| round(255.0 * (1.0 - ink / 100.0) * (1.0 - k / 100.0), 0);
        Rgb::new(channel(c), channel(m), channel(y), alpha).clamped()
    }

    fn clamped(&self) -> Self {
        Self::new(
            clamp(self.c, 0.0, 100.0),
            clamp(self.m, 0.0, 100.0),
            clamp(self.y, 0.0, 100.0),
            clamp(self.k, 0.0, 100.0),
            clamp_unit(self.alpha),
        )
    }

    fn rounded(&self) -> Self {
        Self::new(
            round(self.c, 2),
            round(self.m, 2),
            round(self.y, 2),
            round(self.k, 2),
            round(self.alpha, ALPHA_PRECISION),
        )
    }

    fn from_object(object: &ColorObject) -> Option<Self> {
        let [c, m, y, alpha] = object.fields3(["c", "m", "y"])?;
        let k = object.get("k")?;
        Some(Self::new(c, m, y, k, alpha).clamped())
    }

    fn to_object(&self) -> ColorObject {
        ColorObject::new()
            .with("c", self.c)
            .with("m", self.m)
            .with("y", self.y)
            .with("k", self.k)
            .with("alpha", self.alpha)
    }

    fn from_css(text: &str) -> Option<Self> {
        let captures = CMYK_GRAMMAR.captures(text)?;

        Some(
            Self::new(
                parse_coordinate(group(&captures, 1)?)?,
                parse_coordinate(group(&captures, 2)?)?,
                parse_coordinate(group(&captures, 3)?)?,
                parse_coordinate(group(&captures, 4)?)?,
                parse_alpha(group(&captures, 5))?,
            )
            .clamped(),
        )
    }
}

impl std::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { c, m, y, k, alpha } = self.clamped().rounded();
        write!(f, "device-cmyk({}% {}% {}% {}%", c, m, y, k)?;
        write_alpha(f, alpha)?;
        f.write_str(")")
    }
}
