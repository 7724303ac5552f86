use super::{group, write_alpha, ColorModel, ColorObject, Format, Grammar, Rgb, ALPHA_PRECISION};
use crate::core::{clamp, clamp_hue, clamp_unit, parse_alpha, parse_hue, parse_number, round};
use crate::Float;

/// An HSV color with hue in `0..360` and saturation and value in `0..=100`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsv {
    pub h: Float,
    pub s: Float,
    pub v: Float,
    pub alpha: Float,
}

impl Hsv {
    /// Create a new HSV color. The coordinates are not clamped.
    pub const fn new(h: Float, s: Float, v: Float, alpha: Float) -> Self {
        Self { h, s, v, alpha }
    }
}

// hsv() is not part of CSS, but it follows the same conventions as hsl().
pub(super) static HSV_GRAMMAR: Grammar = Grammar::new(
    r"^hsva?\(\s*([+-]?[\d.]+)(deg|grad|rad|turn)?\s*[, ]\s*([+-]?[\d.]+)%\s*[, ]\s*([+-]?[\d.]+)%(?:\s*[,/]\s*([+-]?[\d.]+%?))?\s*\)$",
);

impl ColorModel for Hsv {
    const FORMAT: Format = Format::Hsv;

    fn from_rgb(rgb: &Rgb) -> Self {
        let Rgb { r, g, b, alpha } = *rgb;
        let max = r.max(g).max(b);
        let delta = max - r.min(g).min(b);

        let sector = if delta == 0.0 {
            0.0
        } else if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };

        Self::new(
            60.0 * if sector < 0.0 { sector + 6.0 } else { sector },
            if max == 0.0 { 0.0 } else { delta / max * 100.0 },
            max / 255.0 * 100.0,
            alpha,
        )
        .clamped()
    }

    fn to_rgb(&self) -> Rgb {
        let h = self.h / 360.0 * 6.0;
        let s = self.s / 100.0;
        let v = self.v / 100.0;

        let sector = h.floor();
        let fraction = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - fraction * s);
        let t = v * (1.0 - (1.0 - fraction) * s);

        let [r, g, b] = match (sector as i64).rem_euclid(6) {
            0 => [v, t, p],
            1 => [q, v, p],
            2 => [p, v, t],
            3 => [p, q, v],
            4 => [t, p, v],
            _ => [v, p, q],
        };

        Rgb::new(r * 255.0, g * 255.0, b * 255.0, self.alpha).clamped()
    }

    fn clamped(&self) -> Self {
        Self::new(
            clamp_hue(self.h),
            clamp(self.s, 0.0, 100.0),
            clamp(self.v, 0.0, 100.0),
            clamp_unit(self.alpha),
        )
    }

    fn rounded(&self) -> Self {
        Self::new(
            round(self.h, 3),
            round(self.s, 3),
            round(self.v, 3),
            round(self.alpha, ALPHA_PRECISION),
        )
    }

    fn from_object(object: &ColorObject) -> Option<Self> {
        let [h, s, v, alpha] = object.fields3(["h", "s", "v"])?;
        Some(Self::new(h, s, v, alpha).clamped())
    }

    fn to_object(&self) -> ColorObject {
        ColorObject::new()
            .with("h", self.h)
            .with("s", self.s)
            .with("v", self.v)
            .with("alpha", self.alpha)
    }

    fn from_css(text: &str) -> Option<Self> {
        let captures = HSV_GRAMMAR.captures(text)?;

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

impl std::str::FromStr for Hsv {
    type Err = crate::ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_css(s.trim()).ok_or(crate::ColorFormatError::UnknownFormat)
    }
}

impl std::fmt::Display for Hsv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { h, s, v, alpha } = self.clamped().rounded();
        write!(f, "hsv({} {}% {}%", h, s, v)?;
        write_alpha(f, alpha)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ColorFormatError;
    use crate::space::{hue_distance, round_trips, within_precision};

    #[test]
    fn test_hsv() {
        let red = Hsv::from_rgb(&Rgb::new(255.0, 0.0, 0.0, 1.0));
        assert_eq!(red, Hsv::new(0.0, 100.0, 100.0, 1.0), "red");
        assert_eq!(red.to_rgb(), Rgb::new(255.0, 0.0, 0.0, 1.0), "red again");

        let blue = Hsv::from_rgb(&Rgb::new(0.0, 0.0, 255.0, 0.5));
        assert_eq!(blue, Hsv::new(240.0, 100.0, 100.0, 0.5), "blue");

        let magenta = Hsv::from_rgb(&Rgb::new(255.0, 0.0, 127.5, 1.0));
        assert_eq!(magenta.rounded(), Hsv::new(330.0, 100.0, 100.0, 1.0), "magenta");

        let gray = Hsv::from_rgb(&Rgb::new(128.0, 128.0, 128.0, 1.0));
        assert_eq!(gray.h, 0.0, "gray has no hue");
        assert_eq!(gray.s, 0.0, "gray has no saturation");

        let black = Hsv::from_rgb(&Rgb::default());
        assert_eq!(black, Hsv::new(0.0, 0.0, 0.0, 1.0), "black");
    }

    #[test]
    fn test_sectors() {
        for (hue, expected) in [
            (60.0, [255.0, 255.0, 0.0]),
            (120.0, [0.0, 255.0, 0.0]),
            (180.0, [0.0, 255.0, 255.0]),
            (240.0, [0.0, 0.0, 255.0]),
            (300.0, [255.0, 0.0, 255.0]),
        ] {
            let rgb = Hsv::new(hue, 100.0, 100.0, 1.0).to_rgb();
            assert_eq!(rgb.coordinates(), expected, "hue {}", hue);
        }
    }

    #[test]
    fn test_string() -> Result<(), ColorFormatError> {
        let hsv: Hsv = "hsv(0.5turn 50% 100% / 0.5)".parse()?;
        assert_eq!(hsv, Hsv::new(180.0, 50.0, 100.0, 0.5), "parsed");
        assert_eq!(hsv.to_string(), "hsv(180 50% 100% / 0.5)", "formatted");
        assert!("hsv(1, 2, 3)".parse::<Hsv>().is_err(), "missing percent signs");
        Ok(())
    }

    #[test]
    fn test_round_trip() {
        for (rgb, first, second) in round_trips::<Hsv>(0x45f, 1_000) {
            assert!(
                within_precision([first.s, first.v], [second.s, second.v], 3)
                    && within_precision([hue_distance(first.h, second.h)], [0.0], 3),
                "{:?} round-trips from {} to {}",
                rgb,
                first,
                second
            );
        }
    }
}
