use super::{group, ColorModel, ColorObject, Format, Grammar, ALPHA_PRECISION};
use crate::core::{
    clamp, clamp_unit, from_8bit_range, linear_rgb_to_rgb, parse_alpha, parse_maybe_percent,
    rgb_to_linear_rgb, round, to_8bit_range,
};
use crate::Float;

/// An sRGB color with coordinates in `0..=255` and alpha in `0..=1`.
///
/// This is the canonical color representation, which all other color models
/// convert to and from. Its coordinates are not rounded, so that conversions
/// do not accumulate rounding errors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgb {
    pub r: Float,
    pub g: Float,
    pub b: Float,
    pub alpha: Float,
}

impl Rgb {
    /// Create a new sRGB color. The coordinates are not clamped.
    pub const fn new(r: Float, g: Float, b: Float, alpha: Float) -> Self {
        Self { r, g, b, alpha }
    }

    /// Create a new sRGB color from the coordinates and alpha.
    #[inline]
    pub(crate) const fn from_coordinates(coordinates: [Float; 3], alpha: Float) -> Self {
        let [r, g, b] = coordinates;
        Self { r, g, b, alpha }
    }

    /// Get the coordinates without alpha.
    #[inline]
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to linear sRGB with coordinates in `0..=1`.
    pub fn to_linear_rgb(&self) -> [Float; 3] {
        rgb_to_linear_rgb(&from_8bit_range(&self.coordinates()))
    }

    /// Convert from linear sRGB with coordinates in `0..=1`.
    ///
    /// This function clamps the linear coordinates before applying the sRGB
    /// transfer function and clamps again afterwards.
    pub fn from_linear_rgb(linear: &[Float; 3], alpha: Float) -> Self {
        let [r, g, b] = *linear;
        let linear = [clamp_unit(r), clamp_unit(g), clamp_unit(b)];
        Self::from_coordinates(to_8bit_range(&linear_rgb_to_rgb(&linear)), alpha).clamped()
    }

    /// Invert the coordinates, leaving alpha as is.
    #[must_use = "method returns new color and does not mutate original value"]
    pub fn inverted(&self) -> Self {
        Self::new(255.0 - self.r, 255.0 - self.g, 255.0 - self.b, self.alpha)
    }

    /// Compute this color's perceived brightness in `0..=1`.
    ///
    /// This method uses the weights of the [W3C accessibility
    /// guidelines](https://www.w3.org/TR/AERT/#color-contrast), which predate
    /// sRGB's luminance.
    pub fn brightness(&self) -> Float {
        (self.r * 299.0 + self.g * 587.0 + self.b * 114.0) / 1000.0 / 255.0
    }
}

impl Default for Rgb {
    /// Opaque black.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

// rgb() and rgba() accept commas or spaces between coordinates and a comma or
// slash before alpha.
pub(super) static RGB_GRAMMAR: Grammar = Grammar::new(
    r"^rgba?\(\s*([\d.]+%?)\s*[, ]\s*([\d.]+%?)\s*[, ]\s*([\d.]+%?)(?:\s*[,/]\s*([\d.]+%?))?\s*\)$",
);

/// Parse an RGB coordinate, scaling percentages to `0..=255`.
fn parse_coordinate(text: &str) -> Option<Float> {
    let (number, is_percent) = parse_maybe_percent(text)?;
    Some(if is_percent {
        (number / 100.0 * 255.0).round()
    } else {
        number
    })
}

impl ColorModel for Rgb {
    const FORMAT: Format = Format::Rgb;

    fn from_rgb(rgb: &Rgb) -> Self {
        rgb.clamped()
    }

    fn to_rgb(&self) -> Rgb {
        self.clamped()
    }

    fn clamped(&self) -> Self {
        Self::new(
            clamp(self.r, 0.0, 255.0),
            clamp(self.g, 0.0, 255.0),
            clamp(self.b, 0.0, 255.0),
            clamp_unit(self.alpha),
        )
    }

    fn rounded(&self) -> Self {
        Self::new(
            round(self.r, 2),
            round(self.g, 2),
            round(self.b, 2),
            round(self.alpha, ALPHA_PRECISION),
        )
    }

    fn from_object(object: &ColorObject) -> Option<Self> {
        let [r, g, b, alpha] = object.fields3(["r", "g", "b"])?;
        Some(Self::new(r, g, b, alpha).clamped())
    }

    fn to_object(&self) -> ColorObject {
        ColorObject::new()
            .with("r", self.r)
            .with("g", self.g)
            .with("b", self.b)
            .with("alpha", self.alpha)
    }

    fn from_css(text: &str) -> Option<Self> {
        let captures = RGB_GRAMMAR.captures(text)?;

        Some(
            Self::new(
                parse_coordinate(group(&captures, 1)?)?,
                parse_coordinate(group(&captures, 2)?)?,
                parse_coordinate(group(&captures, 3)?)?,
                parse_alpha(group(&captures, 4))?,
            )
            .clamped(),
        )
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { r, g, b, alpha } = self.clamped().rounded();
        if alpha < 1.0 {
            write!(f, "rgb({}, {}, {}, {})", r, g, b, alpha)
        } else {
            write!(f, "rgb({}, {}, {})", r, g, b)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::space::round_trips;

    #[test]
    fn test_parse_css() {
        assert_eq!(
            Rgb::from_css("rgb(255, 128, 0)"),
            Some(Rgb::new(255.0, 128.0, 0.0, 1.0)),
            "comma-separated"
        );
        assert_eq!(
            Rgb::from_css("RGBA(10 20 30 / 50%)"),
            Some(Rgb::new(10.0, 20.0, 30.0, 0.5)),
            "space-separated with percentage alpha"
        );
        assert_eq!(
            Rgb::from_css("rgb(100%, 50%, 0%, 0.25)"),
            Some(Rgb::new(255.0, 128.0, 0.0, 0.25)),
            "percentages"
        );
        assert_eq!(
            Rgb::from_css("rgb(300, 0, 0, 2)"),
            Some(Rgb::new(255.0, 0.0, 0.0, 1.0)),
            "clamped"
        );
        assert_eq!(Rgb::from_css("rgb(1, 2)"), None, "missing coordinate");
        assert_eq!(Rgb::from_css("rgb(1.2.3, 2, 3)"), None, "malformed number");
    }

    #[test]
    fn test_parse_object() {
        let object = ColorObject::from([("r", 300.0), ("g", -5.0), ("b", Float::NAN)]);
        assert_eq!(
            Rgb::from_object(&object),
            Some(Rgb::new(255.0, 0.0, 0.0, 1.0)),
            "clamped with default alpha"
        );

        let object = ColorObject::from([("r", 1.0), ("g", 2.0)]);
        assert_eq!(Rgb::from_object(&object), None, "missing coordinate");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Rgb::new(255.0, 127.504, 0.0, 1.0).to_string(),
            "rgb(255, 127.5, 0)",
            "opaque"
        );
        assert_eq!(
            Rgb::new(1.0, 2.0, 3.0, 0.4567).to_string(),
            "rgb(1, 2, 3, 0.457)",
            "translucent"
        );
        assert_eq!(
            Rgb::from_css(&Rgb::new(1.0, 2.0, 3.0, 0.5).to_string()),
            Some(Rgb::new(1.0, 2.0, 3.0, 0.5)),
            "translucent parses again"
        );
    }

    #[test]
    fn test_linear_rgb() {
        let rgb = Rgb::new(255.0, 128.0, 0.0, 1.0);
        let linear = rgb.to_linear_rgb();
        assert_eq!(linear[0], 1.0, "full red");
        assert_eq!(linear[2], 0.0, "no blue");

        let back = Rgb::from_linear_rgb(&linear, 1.0);
        assert!((back.g - 128.0).abs() < 1e-9, "round trip {:?}", back);
        let clamped = Rgb::from_linear_rgb(&[2.0, -1.0, 0.0], 0.5);
        assert!((clamped.r - 255.0).abs() < 1e-9, "clamped red {:?}", clamped);
        assert_eq!(clamped.g, 0.0, "clamped green");
        assert_eq!(clamped.alpha, 0.5, "alpha");
    }

    #[test]
    fn test_brightness() {
        assert_eq!(Rgb::new(255.0, 255.0, 255.0, 1.0).brightness(), 1.0, "white");
        assert_eq!(Rgb::default().brightness(), 0.0, "black");
    }

    #[test]
    fn test_round_trip() {
        for (rgb, first, second) in round_trips::<Rgb>(0x0db, 1_000) {
            assert_eq!(first, rgb, "whole coordinates need no rounding");
            assert_eq!(second, first, "{:?} round-trips", rgb);
        }
    }
}
