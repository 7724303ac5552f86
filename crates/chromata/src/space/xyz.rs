use super::{group, write_alpha, ColorModel, ColorObject, Format, Grammar, Rgb, ALPHA_PRECISION};
use crate::core::{
    clamp, clamp_unit, parse_alpha, parse_number, round, srgb_to_xyz, xyz_to_srgb, D65_WHITE,
};
use crate::Float;

/// A CIE XYZ color relative to the D65 white point.
///
/// Since sRGB also uses D65, conversion needs no chromatic adaptation. Each
/// coordinate is clamped to `0..=white`, where white is the D65 reference
/// white's coordinate on the same axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Xyz {
    pub x: Float,
    pub y: Float,
    pub z: Float,
    pub alpha: Float,
}

impl Xyz {
    /// Create a new XYZ color. The coordinates are not clamped.
    pub const fn new(x: Float, y: Float, z: Float, alpha: Float) -> Self {
        Self { x, y, z, alpha }
    }
}

pub(super) static XYZ_GRAMMAR: Grammar = Grammar::new(
    r"^color\(\s*xyz(?:-d65)?\s+([+-]?[\d.]+)\s+([+-]?[\d.]+)\s+([+-]?[\d.]+)(?:\s*\/\s*([+-]?[\d.]+%?))?\s*\)$",
);

impl ColorModel for Xyz {
    const FORMAT: Format = Format::Xyz;

    fn from_rgb(rgb: &Rgb) -> Self {
        let [x, y, z] = srgb_to_xyz(&rgb.coordinates());
        Self::new(x, y, z, rgb.alpha).clamped()
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from_coordinates(xyz_to_srgb(&[self.x, self.y, self.z]), self.alpha).clamped()
    }

    fn clamped(&self) -> Self {
        let [xw, yw, zw] = D65_WHITE;
        Self::new(
            clamp(self.x, 0.0, xw),
            clamp(self.y, 0.0, yw),
            clamp(self.z, 0.0, zw),
            clamp_unit(self.alpha),
        )
    }

    fn rounded(&self) -> Self {
        Self::new(
            round(self.x, 4),
            round(self.y, 4),
            round(self.z, 4),
            round(self.alpha, ALPHA_PRECISION),
        )
    }

    fn from_object(object: &ColorObject) -> Option<Self> {
        let [x, y, z, alpha] = object.fields3(["x", "y", "z"])?;
        Some(Self::new(x, y, z, alpha).clamped())
    }

    fn to_object(&self) -> ColorObject {
        ColorObject::new()
            .with("x", self.x)
            .with("y", self.y)
            .with("z", self.z)
            .with("alpha", self.alpha)
    }

    fn from_css(text: &str) -> Option<Self> {
        let captures = XYZ_GRAMMAR.captures(text)?;

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

impl std::fmt::Display for Xyz {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { x, y, z, alpha } = self.clamped().rounded();
        write!(f, "color(xyz-d65 {} {} {}", x, y, z)?;
        write_alpha(f, alpha)?;
        f.write_str(")")
    }
}
