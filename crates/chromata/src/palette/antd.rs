use super::{parse_base, Level, Palette};
use crate::core::{clamp_hue, round};
use crate::error::PaletteError;
use crate::registry::Input;
use crate::space::{Hsv, Rgb};
use crate::{Color, Float};

const HUE_STEP: Float = 2.0;
const SATURATION_STEP_LIGHT: Float = 16.0;
const SATURATION_STEP_DARK: Float = 5.0;
const VALUE_STEP_LIGHT: Float = 5.0;
const VALUE_STEP_DARK: Float = 15.0;
const LIGHT_STEPS: Float = 5.0;
const DARK_STEPS: Float = 4.0;

/// For each level of a dark palette, the level of the light palette to mix
/// with and the ratio.
#[rustfmt::skip]
const DARK_MIX: [(Level, Float); 11] = [
    (Level::L700, 0.15),
    (Level::L600, 0.25),
    (Level::L500, 0.3),
    (Level::L500, 0.45),
    (Level::L500, 0.65),
    (Level::L500, 0.85),
    (Level::L500, 0.9),
    (Level::L400, 0.93),
    (Level::L300, 0.95),
    (Level::L200, 0.97),
    (Level::L100, 0.98),
];

/// The theme of an Ant Design palette.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Theme {
    #[default]
    Light,
    /// A dark theme, whose colors mix a dark background color with colors of
    /// the light palette.
    Dark { mix_with: Color },
}

impl Theme {
    /// Create a dark theme with the default background `#141414`.
    pub fn dark() -> Self {
        Self::Dark {
            mix_with: Color::from_model(&Rgb::new(20.0, 20.0, 20.0, 1.0)),
        }
    }
}

fn hue(hsv: &Hsv, step: Float, is_light: bool) -> Float {
    let h = hsv.h.round();
    let delta = HUE_STEP * step;

    // Greens and blues get cooler when lighter, all others warmer.
    let is_cool = (60.0..=240.0).contains(&h);
    clamp_hue(if is_cool == is_light { h - delta } else { h + delta })
}

fn saturation(hsv: &Hsv, step: Float, is_light: bool) -> Float {
    if hsv.h == 0.0 && hsv.s == 0.0 {
        return hsv.s;
    }

    let s = if is_light {
        hsv.s - SATURATION_STEP_LIGHT * step
    } else if step == DARK_STEPS {
        hsv.s + SATURATION_STEP_LIGHT
    } else {
        hsv.s + SATURATION_STEP_DARK * step
    };

    let s = s.min(100.0);
    let s = if is_light && step == LIGHT_STEPS { s.min(10.0) } else { s };
    s.max(6.0)
}

fn value(hsv: &Hsv, step: Float, is_light: bool) -> Float {
    let v = if is_light {
        hsv.v + VALUE_STEP_LIGHT * step
    } else {
        hsv.v - VALUE_STEP_DARK * step
    };

    v.min(100.0)
}

/// Derive the color for the level from the base color.
fn derive(base: &Color, hsv: &Hsv, level: Level) -> String {
    if level == Level::L500 {
        return base.to_hex();
    }

    let step = level.index().abs_diff(Level::L500.index()) as Float;
    let is_light = level.is_light();
    let hsv = Hsv::new(
        hue(hsv, step, is_light),
        saturation(hsv, step, is_light),
        value(hsv, step, is_light),
        1.0,
    );

    Color::from_model(&hsv).to_hex()
}

/// Generate an 11-level palette of hexadecimal strings with the Ant Design
/// algorithm.
///
/// Light palettes step hue, saturation, and value in HSV, starting from the
/// base color's whole HSV coordinates. Dark palettes mix
/// the theme's background color with colors of the light palette, using more
/// of the light palette for lighter levels.
pub fn generate_antd_palette<I: Into<Input>>(
    input: I,
    theme: &Theme,
) -> Result<Palette<String>, PaletteError> {
    let color = parse_base(input.into())?;
    // The steps apply to whole HSV coordinates.
    let Hsv { h, s, v, alpha } = color.to_hsv();
    let hsv = Hsv::new(round(h, 0), round(s, 0), round(v, 0), alpha);
    let light = Palette::from_fn(|level| derive(&color, &hsv, level));

    match *theme {
        Theme::Light => Ok(light),
        Theme::Dark { ref mix_with } => Ok(Palette::from_fn(|level| {
            let (source, ratio) = DARK_MIX[level.index()];
            mix_with.mix(&Color::new(&light[source]), ratio).to_hex()
        })),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_light() -> Result<(), PaletteError> {
        let palette = generate_antd_palette("#1890ff", &Theme::Light)?;
        assert_eq!(palette[Level::L50], "#e6f7ff", "lightest blue");
        assert_eq!(palette[Level::L500], "#1890ff", "base blue");

        let palette = generate_antd_palette("#808080", &Theme::default())?;
        assert_eq!(palette[Level::L50], "#bfbfbf", "light gray");
        assert_eq!(palette[Level::L400], "#8c8c8c", "lighter gray");
        assert_eq!(palette[Level::L950], "#000000", "black");
        Ok(())
    }

    #[test]
    fn test_preset_palettes() -> Result<(), PaletteError> {
        #[rustfmt::skip]
        let presets = [
            ("#1890ff", [
                "#e6f7ff", "#bae7ff", "#91d5ff", "#69c0ff", "#40a9ff",
                "#1890ff", "#096dd9", "#0050b3", "#003a8c", "#002766",
            ]),
            ("#f5222d", [
                "#fff1f0", "#ffccc7", "#ffa39e", "#ff7875", "#ff4d4f",
                "#f5222d", "#cf1322", "#a8071a", "#820014", "#5c0011",
            ]),
            ("#52c41a", [
                "#f6ffed", "#d9f7be", "#b7eb8f", "#95de64", "#73d13d",
                "#52c41a", "#389e0d", "#237804", "#135200", "#092b00",
            ]),
        ];

        for (base, expected) in presets {
            let palette = generate_antd_palette(base, &Theme::Light)?;
            for (level, hex) in Level::ALL.into_iter().zip(expected) {
                assert_eq!(palette[level], hex, "level {} of {}", level, base);
            }
        }
        Ok(())
    }

    #[test]
    fn test_steps() {
        let hsv = Hsv::new(209.0, 90.0, 100.0, 1.0);
        assert_eq!(hue(&hsv, 5.0, true), 199.0, "cooler");
        assert_eq!(hue(&hsv, 5.0, false), 219.0, "warmer");
        assert_eq!(saturation(&hsv, 1.0, true), 74.0, "less saturated");
        assert_eq!(saturation(&hsv, 5.0, true), 10.0, "capped saturation");
        assert_eq!(saturation(&hsv, 4.0, false), 100.0, "fully saturated");
        assert_eq!(value(&hsv, 2.0, false), 70.0, "darker");

        let red = Hsv::new(350.0, 100.0, 100.0, 1.0);
        assert_eq!(hue(&red, 5.0, true), 0.0, "wrapped");
    }

    #[test]
    fn test_dark() -> Result<(), PaletteError> {
        let theme = Theme::dark();
        let Theme::Dark { ref mix_with } = theme else {
            panic!("dark theme is dark");
        };
        assert_eq!(mix_with.to_hex(), "#141414", "background");

        let light = generate_antd_palette("#1890ff", &Theme::Light)?;
        let dark = generate_antd_palette("#1890ff", &theme)?;
        assert_eq!(
            dark[Level::L50],
            mix_with.mix(&Color::new(&light[Level::L700]), 0.15).to_hex(),
            "darkest mixture"
        );
        assert_eq!(
            dark[Level::L950],
            mix_with.mix(&Color::new(&light[Level::L100]), 0.98).to_hex(),
            "lightest mixture"
        );
        Ok(())
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            generate_antd_palette("#1890f", &Theme::Light),
            Err(PaletteError::InvalidColor {
                input: "#1890f".to_owned()
            }),
            "five digits"
        );
    }
}
