use super::{group, write_alpha, ColorModel, ColorObject, Format, Grammar, Rgb, ALPHA_PRECISION};
use crate::core::{
    clamp, clamp_unit, map_lch_to_srgb, parse_alpha, parse_number, round, srgb_to_lab, to_polar,
};
use crate::Float;

/// A CIELAB color relative to the D50 white point.
///
/// Lightness ranges over `0..=100`. Since round-trips through wider gamuts
/// may exceed the nominal range of ±125, a and b are clamped to ±160 instead.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lab {
    pub l: Float,
    pub a: Float,
    pub b: Float,
    pub alpha: Float,
}

impl Lab {
    /// Create a new CIELAB color. The coordinates are not clamped.
    pub const fn new(l: Float, a: Float, b: Float, alpha: Float) -> Self {
        Self { l, a, b, alpha }
    }

    /// Get the coordinates without alpha.
    #[inline]
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.l, self.a, self.b]
    }
}

pub(super) static LAB_GRAMMAR: Grammar = Grammar::new(
    r"^lab\(\s*([+-]?[\d.]+)%?\s+([+-]?[\d.]+)\s+([+-]?[\d.]+)(?:\s*\/\s*([+-]?[\d.]+%?))?\s*\)$",
);

impl ColorModel for Lab {
    const FORMAT: Format = Format::Lab;

    fn from_rgb(rgb: &Rgb) -> Self {
        let [l, a, b] = srgb_to_lab(&rgb.coordinates());
        Self::new(l, a, b, rgb.alpha).clamped()
    }

    /// Convert to sRGB. Out-of-gamut colors have their chroma reduced while
    /// lightness and hue stay the same.
    fn to_rgb(&self) -> Rgb {
        let rgb = map_lch_to_srgb(&to_polar(&self.coordinates(), 0.0));
        Rgb::from_coordinates(rgb, clamp_unit(self.alpha))
    }

    fn clamped(&self) -> Self {
        Self::new(
            clamp(self.l, 0.0, 100.0),
            clamp(self.a, -160.0, 160.0),
            clamp(self.b, -160.0, 160.0),
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
        let captures = LAB_GRAMMAR.captures(text)?;

        Some(
            Self::new(
                parse_number(group(&captures, 1)?)?,
                parse_number(group(&captures, 2)?)?,
                parse_number(group(&captures, 3)?)?,
                parse_alpha(group(&captures, 4))?,
            )
            .clamped(),
        )
    }
}

impl std::fmt::Display for Lab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { l, a, b, alpha } = self.clamped().rounded();
        write!(f, "lab({}% {} {}", l, a, b)?;
        write_alpha(f, alpha)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::in_gamut;
    use crate::space::{round_trips, within_precision};

    #[test]
    fn test_lab() {
        let white = Lab::from_rgb(&Rgb::new(255.0, 255.0, 255.0, 1.0)).rounded();
        assert_eq!(white, Lab::new(100.0, 0.0, 0.0, 1.0), "white");

        let black = Lab::from_rgb(&Rgb::default());
        assert_eq!(black.l, 0.0, "black");

        let red = Lab::from_rgb(&Rgb::new(255.0, 0.0, 0.0, 1.0));
        assert!((red.l - 54.29).abs() < 0.1, "red lightness {}", red.l);
        assert!((red.a - 80.8).abs() < 0.2, "red a {}", red.a);
        assert!((red.b - 69.9).abs() < 0.2, "red b {}", red.b);

        let back = red.to_rgb();
        assert!((back.r - 255.0).abs() < 0.01, "red again {:?}", back);
        assert!(back.g.abs() < 0.01, "red again {:?}", back);
        assert!(back.b.abs() < 0.01, "red again {:?}", back);
    }

    #[test]
    fn test_gamut_mapping() {
        let rgb = Lab::new(50.0, -160.0, -160.0, 0.5).to_rgb();
        assert!(in_gamut(&rgb.coordinates(), 255.0, 0.0), "{:?} in gamut", rgb);
        assert_eq!(rgb.alpha, 0.5, "alpha");

        // Mapping only reduces chroma, so the hue remains bluish.
        assert!(rgb.b > rgb.r, "{:?} still bluish", rgb);
    }

    #[test]
    fn test_parse_css() {
        assert_eq!(
            Lab::from_css("lab(54.29% 80.82 69.91)"),
            Some(Lab::new(54.29, 80.82, 69.91, 1.0)),
            "percent lightness"
        );
        assert_eq!(
            Lab::from_css("LAB(120 -200 5 / 0.5)"),
            Some(Lab::new(100.0, -160.0, 5.0, 0.5)),
            "clamped"
        );
        assert_eq!(Lab::from_css("lab(50, 10, 10)"), None, "commas");
        assert_eq!(
            Lab::new(54.291234, 80.8, -0.00001, 0.75).to_string(),
            "lab(54.291% 80.8 0 / 0.75)",
            "display"
        );
    }

    #[test]
    fn test_round_trip() {
        // Clipping coordinates that rounding pushed just outside sRGB shifts
        // CIELAB by up to a hundredth.
        for (rgb, first, second) in round_trips::<Lab>(0x1ab, 1_000) {
            assert!(
                within_precision(first.coordinates(), second.coordinates(), 2),
                "{:?} round-trips from {} to {}",
                rgb,
                first,
                second
            );
        }
    }
}
