use crate::core::{clamp_unit, delta_e_2000, interpolate, round};
use crate::error::ColorFormatError;
use crate::registry::{parse, Input, Registry};
use crate::space::{
    to_hex, Cmyk, ColorModel, ColorObject, Format, Hsl, Hsv, Hwb, Lab, Lch, Oklab, Oklch, Rgb, Xyz,
    ALPHA_PRECISION,
};
use crate::Float;

/// The input a color was parsed from, if that input is in a tracked format.
#[derive(Clone, Debug, PartialEq)]
pub struct Source {
    format: Format,
    input: Input,
}

impl Source {
    /// Get the input's format.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Get the input.
    pub const fn input(&self) -> &Input {
        &self.input
    }
}

// ====================================================================================================================

/// A color.
///
/// # The Canonical Color
///
/// Every color is represented by an unrounded sRGB color with coordinates in
/// `0..=255` and alpha in `0..=1`. All conversions, manipulations, and
/// measurements go through that canonical color. As a result, converting to
/// another color space and back generally incurs some rounding error. To
/// avoid that error for the common case of converting back to the original
/// color space, a color parsed from an input in one of the *tracked* formats
/// XYZ, CIELAB, CIELCh, Oklab, and Oklch also remembers the input, its
/// [`Source`]. Converting to the source's color space re-parses the input
/// instead of converting the canonical color.
///
/// # Parsing
///
/// [`Color::new`] parses strings and [`ColorObject`]s with the process-wide
/// registry. It never fails. If no parser accepts the input, the color is
/// opaque black and [`Color::is_valid`] returns `false`. [`Color::parse`]
/// as well as the [`FromStr`](std::str::FromStr) and [`TryFrom`]
/// implementations instead return an error for such input.
///
/// ```
/// # use chromata::{Color, ColorFormatError};
/// let color: Color = "hsl(120, 100%, 25%)".parse()?;
/// assert_eq!(color.to_hex(), "#008000");
/// assert_eq!(color.to_hsl_string(), "hsl(120 100% 25%)");
///
/// let black = Color::new("chartreuse");
/// assert!(!black.is_valid());
/// assert_eq!(black.to_hex(), "#000000");
/// # Ok::<(), ColorFormatError>(())
/// ```
///
/// # Manipulation
///
/// Colors are immutable. Methods that lighten, darken, saturate, rotate,
/// mix, or otherwise change a color all return a new color. Two colors are
/// equal if their hexadecimal strings are equal.
#[derive(Clone, Debug)]
pub struct Color {
    rgb: Rgb,
    is_valid: bool,
    source: Option<Source>,
}

impl Color {
    /// Parse the input with the process-wide registry.
    ///
    /// If no registered parser accepts the input, this method returns opaque
    /// black marked as invalid.
    pub fn new<I: Into<Input>>(input: I) -> Self {
        let input = input.into();
        let result = parse(&input);
        Self::from_parsed(input, result)
    }

    /// Parse the input with the given registry.
    pub fn with_registry<I: Into<Input>>(registry: &Registry, input: I) -> Self {
        let input = input.into();
        let result = registry.parse(&input);
        Self::from_parsed(input, result)
    }

    fn from_parsed(input: Input, result: Option<(Rgb, Format)>) -> Self {
        match result {
            Some((rgb, format)) => Self {
                rgb,
                is_valid: true,
                source: format.is_tracked().then_some(Source { format, input }),
            },
            None => Self {
                rgb: Rgb::default(),
                is_valid: false,
                source: None,
            },
        }
    }

    /// Parse the color string with the process-wide registry.
    pub fn parse(text: &str) -> Result<Self, ColorFormatError> {
        let color = Self::new(text);
        if color.is_valid {
            Ok(color)
        } else {
            Err(ColorFormatError::UnknownFormat)
        }
    }

    /// Parse the structured color with the process-wide registry.
    pub fn from_object(object: &ColorObject) -> Result<Self, ColorFormatError> {
        let color = Self::new(object);
        if color.is_valid {
            Ok(color)
        } else {
            Err(ColorFormatError::UnknownObject)
        }
    }

    /// Create a new color from the record of some color model.
    ///
    /// The record's coordinates are clamped and, for out-of-gamut colors in
    /// CIELAB, CIELCh, and Oklch, gamut-mapped. Records in tracked formats
    /// become the color's source.
    pub fn from_model<M: ColorModel>(model: &M) -> Self {
        let model = model.clamped();
        Self {
            rgb: model.to_rgb(),
            is_valid: true,
            source: M::FORMAT.is_tracked().then(|| Source {
                format: M::FORMAT,
                input: Input::Object(model.to_object()),
            }),
        }
    }

    /// Determine whether this color's input was parsed successfully.
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Get this color's source, if it was parsed from a tracked format.
    pub const fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    /// Access the unrounded canonical color.
    pub const fn as_rgb(&self) -> &Rgb {
        &self.rgb
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Re-parse the source, if it is in the color model's format.
    fn from_source<M: ColorModel>(&self) -> Option<M> {
        let source = self.source.as_ref()?;
        if source.format != M::FORMAT {
            return None;
        }

        match source.input {
            Input::Text(ref text) => M::from_css(text.trim()),
            Input::Object(ref object) => M::from_object(object),
        }
    }

    /// Convert to the color model without rounding.
    fn convert<M: ColorModel>(&self) -> M {
        self.from_source::<M>()
            .unwrap_or_else(|| M::from_rgb(&self.rgb))
    }

    /// Convert to the color model.
    ///
    /// The coordinates of the result are clamped and rounded. When converting
    /// to the color model of this color's source, the result is derived from
    /// the source instead of the canonical color.
    pub fn to_model<M: ColorModel>(&self) -> M {
        self.convert::<M>().rounded()
    }

    /// Format this color as a hexadecimal string.
    pub fn to_hex(&self) -> String {
        to_hex(&self.rgb)
    }

    /// Convert to sRGB with coordinates rounded to two fractional digits.
    pub fn to_rgb(&self) -> Rgb {
        self.to_model()
    }

    /// Format as an `rgb()` string. Translucent colors have a fourth,
    /// comma-separated alpha coordinate.
    pub fn to_rgb_string(&self) -> String {
        self.rgb.to_string()
    }

    pub fn to_hsl(&self) -> Hsl {
        self.to_model()
    }

    pub fn to_hsl_string(&self) -> String {
        self.convert::<Hsl>().to_string()
    }

    pub fn to_hsv(&self) -> Hsv {
        self.to_model()
    }

    /// Format as an `hsv()` string, which is not part of CSS.
    pub fn to_hsv_string(&self) -> String {
        self.convert::<Hsv>().to_string()
    }

    pub fn to_hwb(&self) -> Hwb {
        self.to_model()
    }

    pub fn to_hwb_string(&self) -> String {
        self.convert::<Hwb>().to_string()
    }

    pub fn to_xyz(&self) -> Xyz {
        self.to_model()
    }

    /// Format as a `color(xyz-d65 ...)` string.
    pub fn to_xyz_string(&self) -> String {
        self.convert::<Xyz>().to_string()
    }

    pub fn to_lab(&self) -> Lab {
        self.to_model()
    }

    pub fn to_lab_string(&self) -> String {
        self.convert::<Lab>().to_string()
    }

    pub fn to_lch(&self) -> Lch {
        self.to_model()
    }

    pub fn to_lch_string(&self) -> String {
        self.convert::<Lch>().to_string()
    }

    pub fn to_oklab(&self) -> Oklab {
        self.to_model()
    }

    pub fn to_oklab_string(&self) -> String {
        self.convert::<Oklab>().to_string()
    }

    pub fn to_oklch(&self) -> Oklch {
        self.to_model()
    }

    pub fn to_oklch_string(&self) -> String {
        self.convert::<Oklch>().to_string()
    }

    /// Convert to naive CMYK with whole percentages.
    pub fn to_cmyk(&self) -> Cmyk {
        self.to_model()
    }

    /// Format as a `device-cmyk()` string.
    pub fn to_cmyk_string(&self) -> String {
        self.convert::<Cmyk>().to_string()
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute this color's perceived brightness in `0..=1`, rounded to two
    /// fractional digits.
    pub fn brightness(&self) -> Float {
        round(self.rgb.brightness(), 2)
    }

    /// Determine whether this color's brightness is below one half.
    pub fn is_dark(&self) -> bool {
        self.rgb.brightness() < 0.5
    }

    /// Determine whether this color's brightness is at least one half.
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// Get this color's alpha, rounded to three fractional digits.
    pub fn alpha(&self) -> Float {
        round(self.rgb.alpha, ALPHA_PRECISION)
    }

    /// Get this color's HSL hue, rounded to a whole degree.
    pub fn hue(&self) -> Float {
        round(self.convert::<Hsl>().h, 0)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Invert this color's sRGB coordinates.
    #[must_use = "method returns new color and does not mutate original value"]
    pub fn invert(&self) -> Self {
        Self::from_model(&self.rgb.inverted())
    }

    /// Update this color's alpha, which is clamped to `0..=1`.
    #[must_use = "method returns new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: Float) -> Self {
        Self::from_model(&Rgb { alpha, ..self.rgb })
    }

    /// Update this color's HSL hue.
    #[must_use = "method returns new color and does not mutate original value"]
    pub fn with_hue(&self, hue: Float) -> Self {
        let hsl = self.convert::<Hsl>();
        Self::from_model(&Hsl { h: hue, ..hsl }.clamped())
    }

    /// Rotate this color's HSL hue by the given degrees.
    #[must_use = "method returns new color and does not mutate original value"]
    pub fn rotate(&self, degrees: Float) -> Self {
        self.with_hue(self.hue() + degrees)
    }

    /// Adjust HSL saturation and lightness by the given amounts, which are
    /// fractions of the full range.
    fn adjust_hsl(&self, saturation: Float, lightness: Float) -> Self {
        let hsl = self.convert::<Hsl>();
        Self::from_model(
            &Hsl {
                s: hsl.s + saturation * 100.0,
                l: hsl.l + lightness * 100.0,
                ..hsl
            }
            .clamped(),
        )
    }

    /// Increase HSL saturation by the amount in `0..=1`.
    #[must_use = "method returns new color and does not mutate original value"]
    pub fn saturate(&self, amount: Float) -> Self {
        self.adjust_hsl(amount, 0.0)
    }

    /// Decrease HSL saturation by the amount in `0..=1`.
    #[must_use = "method returns new color and does not mutate original value"]
    pub fn desaturate(&self, amount: Float) -> Self {
        self.adjust_hsl(-amount, 0.0)
    }

    /// Remove all HSL saturation.
    #[must_use = "method returns new color and does not mutate original value"]
    pub fn grayscale(&self) -> Self {
        self.desaturate(1.0)
    }

    /// Increase HSL lightness by the amount in `0..=1`.
    #[must_use = "method returns new color and does not mutate original value"]
    pub fn lighten(&self, amount: Float) -> Self {
        self.adjust_hsl(0.0, amount)
    }

    /// Decrease HSL lightness by the amount in `0..=1`.
    #[must_use = "method returns new color and does not mutate original value"]
    pub fn darken(&self, amount: Float) -> Self {
        self.adjust_hsl(0.0, -amount)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether this color and the input have the same hexadecimal
    /// string.
    pub fn is_equal<I: Into<Input>>(&self, other: I) -> bool {
        self.to_hex() == Self::new(other).to_hex()
    }

    /// Compute the perceptual difference between the two colors.
    ///
    /// This method computes ΔE2000 between the colors' rounded CIELAB
    /// coordinates, scaled to `0..=1` and rounded to three fractional digits.
    /// It is symmetric and zero for identical colors.
    pub fn delta(&self, other: &Self) -> Float {
        let lab1 = self.to_lab();
        let lab2 = other.to_lab();
        let delta = delta_e_2000(&lab1.coordinates(), &lab2.coordinates()) / 100.0;
        clamp_unit(round(delta, 3))
    }

    /// Compute the perceptual difference to white.
    pub fn delta_to_white(&self) -> Float {
        self.delta(&Self::from_model(&WHITE))
    }

    /// Mix this color with the other color in CIELAB.
    ///
    /// A ratio of 0 yields this color and a ratio of 1 the other color, both
    /// up to rounding.
    #[must_use = "method returns new color and does not mutate original value"]
    pub fn mix(&self, other: &Self, ratio: Float) -> Self {
        let lab1 = Lab::from_rgb(&self.to_rgb());
        let lab2 = Lab::from_rgb(&other.to_rgb());
        let [l, a, b, alpha] = interpolate(
            ratio,
            &[lab1.l, lab1.a, lab1.b, lab1.alpha],
            &[lab2.l, lab2.a, lab2.b, lab2.alpha],
        );

        let rgb = Lab::new(l, a, b, alpha).clamped().to_rgb();
        Self::from_model(&rgb)
    }

    fn mix_toward(&self, target: &Rgb, count: usize) -> Vec<Self> {
        match count {
            0 => Vec::new(),
            1 => vec![self.clone()],
            _ => {
                let target = Self::from_model(target);
                let step = 1.0 / (count - 1) as Float;
                (0..count)
                    .map(|index| self.mix(&target, step * index as Float))
                    .collect()
            }
        }
    }

    /// Mix this color toward white in `count` evenly spaced steps.
    ///
    /// The first color is this color and the last color is white.
    pub fn tints(&self, count: usize) -> Vec<Self> {
        self.mix_toward(&WHITE, count)
    }

    /// Mix this color toward black in `count` evenly spaced steps.
    pub fn shades(&self, count: usize) -> Vec<Self> {
        self.mix_toward(&BLACK, count)
    }

    /// Mix this color toward `#808080` in `count` evenly spaced steps.
    pub fn tones(&self, count: usize) -> Vec<Self> {
        self.mix_toward(&GRAY, count)
    }
}

const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0, 1.0);
const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0, 1.0);
const GRAY: Rgb = Rgb::new(128.0, 128.0, 128.0, 1.0);

macro_rules! impl_color_from {
    ($($model:ty),*) => {
        $(
            impl From<$model> for Color {
                fn from(value: $model) -> Self {
                    Self::from_model(&value)
                }
            }
        )*
    };
}

impl_color_from!(Rgb, Hsl, Hsv, Hwb, Xyz, Lab, Lch, Oklab, Oklch, Cmyk);

impl std::str::FromStr for Color {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&ColorObject> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &ColorObject) -> Result<Self, Self::Error> {
        Self::from_object(value)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_hex() == other.to_hex()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::in_gamut;
    use crate::registry::{LabPlugin, XyzPlugin};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(Color::to_hex).collect()
    }

    #[test]
    fn test_conversions() -> Result<(), ColorFormatError> {
        let red = Color::parse("#ff0000")?;
        assert_eq!(red.to_hsl_string(), "hsl(0 100% 50%)", "red as hsl");
        assert_eq!(red.to_rgb_string(), "rgb(255, 0, 0)", "red as rgb");
        assert_eq!(red.to_hsv(), Hsv::new(0.0, 100.0, 100.0, 1.0), "red as hsv");
        assert_eq!(red.to_hwb_string(), "hwb(0 0% 0%)", "red as hwb");
        assert_eq!(red.to_cmyk_string(), "device-cmyk(0% 100% 100% 0%)", "red as cmyk");
        assert_eq!(red.to_oklch_string(), "oklch(62.8% 0.258 29.234)", "red as oklch");

        let green: Color = "hsl(120, 100%, 25%)".parse()?;
        assert_eq!(green.to_hex(), "#008000", "green");
        assert_eq!(green.to_rgb(), Rgb::new(0.0, 127.5, 0.0, 1.0), "unquantized green");

        let black = Color::try_from("#000")?;
        assert_eq!(black.to_cmyk(), Cmyk::new(0.0, 0.0, 0.0, 100.0, 1.0), "black");
        Ok(())
    }

    #[test]
    fn test_invalid() {
        let color = Color::new("chartreuse");
        assert!(!color.is_valid(), "invalid input");
        assert_eq!(color.to_hex(), "#000000", "fallback");
        assert!(color.source().is_none(), "no source");

        assert_eq!(
            "#12345".parse::<Color>(),
            Err(ColorFormatError::UnknownFormat),
            "five digits"
        );
        assert_eq!(
            Color::from_object(&ColorObject::from([("q", 1.0)])),
            Err(ColorFormatError::UnknownObject),
            "unknown fields"
        );
    }

    #[test]
    fn test_gamut_mapped_object() {
        let object = ColorObject::from([("l", 0.7), ("c", 0.37), ("h", 29.23), ("alpha", 1.0)]);
        let color = Color::new(&object);
        assert!(color.is_valid(), "oklch object");
        assert!(
            in_gamut(&color.as_rgb().coordinates(), 255.0, 0.0),
            "{:?} in gamut",
            color.as_rgb()
        );
    }

    #[test]
    fn test_source() -> Result<(), ColorFormatError> {
        let object = ColorObject::from([("l", 0.7), ("c", 0.1), ("h", 200.0)]);
        let color = Color::from_object(&object)?;
        assert_eq!(
            color.source().map(Source::format),
            Some(Format::Oklch),
            "oklch source"
        );
        assert_eq!(color.to_oklch(), Oklch::new(0.7, 0.1, 200.0, 1.0), "lossless");

        let mut registry = Registry::new();
        registry.extend(&[&LabPlugin, &XyzPlugin]);
        let color = Color::with_registry(&registry, " lab(50% 20.25 -30.5) ");
        assert!(color.is_valid(), "lab string");
        assert_eq!(color.to_lab(), Lab::new(50.0, 20.25, -30.5, 1.0), "lossless");
        assert_eq!(color.to_lab_string(), "lab(50% 20.25 -30.5)", "lossless string");

        let hex = Color::with_registry(&registry, "#808080");
        assert!(hex.source().is_none(), "hex is not tracked");

        let xyz = Color::with_registry(&registry, "color(xyz 0.2 0.3 0.4)");
        assert_eq!(xyz.to_xyz(), Xyz::new(0.2, 0.3, 0.4, 1.0), "lossless xyz");
        Ok(())
    }

    #[test]
    fn test_measures() -> Result<(), ColorFormatError> {
        let white = Color::parse("#fff")?;
        assert_eq!(white.brightness(), 1.0, "white brightness");
        assert!(white.is_light(), "white is light");

        let black = Color::parse("rgb(0 0 0 / 0.25)")?;
        assert_eq!(black.brightness(), 0.0, "black brightness");
        assert!(black.is_dark(), "black is dark");
        assert_eq!(black.alpha(), 0.25, "alpha");
        Ok(())
    }

    #[test]
    fn test_manipulation() -> Result<(), ColorFormatError> {
        let black = Color::parse("#000")?;
        assert_eq!(black.lighten(0.5).to_hex(), "#808080", "lighter black");
        assert_eq!(black.lighten(2.0).to_hex(), "#ffffff", "clamped lightness");
        assert_eq!(black.invert().to_hex(), "#ffffff", "inverted");

        let pink = Color::parse("hsl(0 50% 50%)")?;
        assert_eq!(pink.saturate(0.5).to_hex(), "#ff0000", "saturated");
        assert_eq!(pink.grayscale().to_hex(), "#808080", "grayscale");
        assert_eq!(pink.desaturate(0.25), pink.desaturate(0.1).desaturate(0.15), "two steps");
        assert_eq!(pink.darken(0.5).to_hex(), "#000000", "darkened");

        let green = Color::parse("hsl(120 100% 50%)")?;
        assert_eq!(green.hue(), 120.0, "hue");
        assert_eq!(green.rotate(90.0).hue(), 210.0, "rotated hue");
        assert_eq!(green.rotate(-240.0).to_hex(), "#0000ff", "rotated backwards");
        assert_eq!(green.with_hue(0.0).to_hex(), "#ff0000", "new hue");

        let translucent = green.with_alpha(0.5);
        assert_eq!(translucent.to_hex(), "#00ff0080", "translucent");
        assert_eq!(green.with_alpha(2.0).alpha(), 1.0, "clamped alpha");
        assert!(green.is_equal("rgb(0, 255, 0)"), "equal colors");
        assert!(!green.is_equal(&translucent.to_hex()), "unequal colors");
        Ok(())
    }

    #[test]
    fn test_delta() -> Result<(), ColorFormatError> {
        let red = Color::parse("#f00")?;
        let blue = Color::parse("#3296fa")?;
        let other = Color::parse("#197dde")?;

        assert_eq!(red.delta(&red), 0.0, "identity");
        assert_eq!(blue.delta(&other), other.delta(&blue), "symmetry");
        assert!((blue.delta(&other) - 0.099).abs() < 0.003, "{}", blue.delta(&other));

        let black = Color::parse("#000")?;
        assert_eq!(black.delta_to_white(), 1.0, "maximal difference");
        assert_eq!(Color::parse("#fff")?.delta_to_white(), 0.0, "no difference");
        Ok(())
    }

    #[test]
    fn test_mix() -> Result<(), ColorFormatError> {
        let white = Color::parse("#ffffff")?;
        let black = Color::parse("#000000")?;
        assert_eq!(white.mix(&black, 0.5).to_hex(), "#777777", "gray");

        let red = Color::parse("#ff0000")?;
        let lime = Color::parse("#00ff00")?;
        assert_eq!(red.mix(&lime, 0.0), red, "ratio zero");
        assert_eq!(red.mix(&lime, 1.0), lime, "ratio one");
        assert_eq!(red.mix(&red, 0.3), red, "self");
        Ok(())
    }

    #[test]
    fn test_random_pairs() {
        fn random_color(rng: &mut StdRng) -> Color {
            Color::from_model(&Rgb::new(
                Float::from(rng.random::<u8>()),
                Float::from(rng.random::<u8>()),
                Float::from(rng.random::<u8>()),
                1.0,
            ))
        }

        let mut rng = StdRng::seed_from_u64(0xde17a);
        for _ in 0..500 {
            let color1 = random_color(&mut rng);
            let color2 = random_color(&mut rng);

            let delta = color1.delta(&color2);
            assert_eq!(delta, color2.delta(&color1), "{} and {} are symmetric", color1, color2);
            assert!((0.0..=1.0).contains(&delta), "{} and {} differ by {}", color1, color2, delta);
            assert_eq!(color1.delta(&color1), 0.0, "{} is identical to itself", color1);

            assert_eq!(color1.mix(&color2, 0.0), color1, "{} mixed with nothing", color1);
            assert_eq!(color1.mix(&color2, 1.0), color2, "{} mixed into {}", color1, color2);
            let ratio = rng.random_range(0.0..=1.0);
            assert_eq!(color1.mix(&color1, ratio), color1, "{} mixed with itself", color1);
        }
    }

    #[test]
    fn test_tints_and_shades() -> Result<(), ColorFormatError> {
        let black = Color::parse("#000")?;
        assert_eq!(
            hexes(&black.tints(3)),
            vec!["#000000", "#777777", "#ffffff"],
            "tints"
        );
        assert_eq!(hexes(&black.tints(1)), vec!["#000000"], "single tint");
        assert!(black.tints(0).is_empty(), "no tints");

        let white = Color::parse("#fff")?;
        let shades = white.shades(5);
        assert_eq!(shades.len(), 5, "five shades");
        assert_eq!(shades[4].to_hex(), "#000000", "last shade");

        let tones = white.tones(2);
        assert_eq!(hexes(&tones), vec!["#ffffff", "#808080"], "tones");
        Ok(())
    }
}
