use log::trace;

use super::conversion::{lab_to_srgb, linear_rgb_to_rgb, oklab_to_linear_srgb, to_cartesian, to_8bit_range};
use super::math::clamp;
use crate::Float;

/// Tolerance for CIELAB/CIELCh colors, with coordinates in `0..=255`.
pub(crate) const LAB_GAMUT_EPSILON: Float = 0.01;
/// Chroma ceiling for CIELAB/CIELCh gamut mapping.
pub(crate) const LAB_MAX_CHROMA: Float = 150.0;
/// Search precision for CIELAB/CIELCh gamut mapping.
pub(crate) const LAB_CHROMA_EPSILON: Float = 0.01;

/// Tolerance for Oklch colors, with linear coordinates in `0..=1`.
pub(crate) const OKLCH_GAMUT_EPSILON: Float = 0.000_001;
/// Chroma ceiling for Oklch gamut mapping.
pub(crate) const OKLCH_MAX_CHROMA: Float = 0.37;
/// Search precision for Oklch gamut mapping.
pub(crate) const OKLCH_CHROMA_EPSILON: Float = 0.000_01;

/// Determine whether the coordinates fall into `0..=max`, allowing for the
/// given tolerance at either end.
pub(crate) fn in_gamut(coordinates: &[Float; 3], max: Float, epsilon: Float) -> bool {
    coordinates
        .iter()
        .all(|c| -epsilon <= *c && *c <= max + epsilon)
}

/// Clip the coordinates to `min..=max`. Not-a-number becomes `min`.
pub(crate) fn clip(coordinates: &[Float; 3], min: Float, max: Float) -> [Float; 3] {
    let [c1, c2, c3] = *coordinates;
    [clamp(c1, min, max), clamp(c2, min, max), clamp(c3, min, max)]
}

/// Find the largest chroma that still fits.
///
/// This function bisects `0..=ceiling` until the search interval is no larger
/// than `epsilon` and returns the lower bound, i.e., the largest chroma known
/// to fit. If the ceiling fits, it is returned right away. The number of
/// iterations is `log2(ceiling / epsilon)` rounded up.
pub(crate) fn find_max_chroma<F>(ceiling: Float, epsilon: Float, mut fits: F) -> Float
where
    F: FnMut(Float) -> bool,
{
    if fits(ceiling) {
        return ceiling;
    }

    let mut min = 0.0;
    let mut max = ceiling;
    while max - min > epsilon {
        let chroma = (min + max) / 2.0;
        if fits(chroma) {
            min = chroma;
        } else {
            max = chroma;
        }
    }

    min
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert CIELCh to 8-bit range sRGB, without gamut mapping or clamping.
#[inline]
fn lch_to_srgb(lightness: Float, chroma: Float, hue: Float) -> [Float; 3] {
    lab_to_srgb(&to_cartesian(&[lightness, chroma, hue]))
}

/// Map CIELCh coordinates into the sRGB gamut.
///
/// If the color is out of gamut, this function preserves lightness and hue
/// while reducing chroma. It returns clamped sRGB coordinates in `0..=255`.
pub(crate) fn map_lch_to_srgb(lch: &[Float; 3]) -> [Float; 3] {
    let [lightness, chroma, hue] = *lch;
    let rgb = lch_to_srgb(lightness, chroma, hue);
    if in_gamut(&rgb, 255.0, LAB_GAMUT_EPSILON) {
        return clip(&rgb, 0.0, 255.0);
    }

    trace!("reducing chroma of lch({} {} {})", lightness, chroma, hue);
    let chroma = find_max_chroma(LAB_MAX_CHROMA.min(chroma), LAB_CHROMA_EPSILON, |c| {
        in_gamut(&lch_to_srgb(lightness, c, hue), 255.0, LAB_GAMUT_EPSILON)
    });

    clip(&lch_to_srgb(lightness, chroma, hue), 0.0, 255.0)
}

/// Convert Oklch to linear sRGB, without gamut mapping or clamping.
#[inline]
fn oklch_to_linear_srgb(lightness: Float, chroma: Float, hue: Float) -> [Float; 3] {
    oklab_to_linear_srgb(&to_cartesian(&[lightness, chroma, hue]))
}

/// Map Oklch coordinates into the sRGB gamut.
///
/// If the color is out of gamut, this function preserves lightness and hue
/// while reducing chroma. It returns clamped sRGB coordinates in `0..=255`.
pub(crate) fn map_oklch_to_srgb(oklch: &[Float; 3]) -> [Float; 3] {
    let [lightness, chroma, hue] = *oklch;
    let mut linear = oklch_to_linear_srgb(lightness, chroma, hue);

    if !in_gamut(&linear, 1.0, OKLCH_GAMUT_EPSILON) {
        trace!("reducing chroma of oklch({} {} {})", lightness, chroma, hue);
        let chroma = find_max_chroma(
            OKLCH_MAX_CHROMA.min(chroma),
            OKLCH_CHROMA_EPSILON,
            |c| in_gamut(&oklch_to_linear_srgb(lightness, c, hue), 1.0, OKLCH_GAMUT_EPSILON),
        );
        linear = oklch_to_linear_srgb(lightness, chroma, hue);
    }

    let rgb = to_8bit_range(&linear_rgb_to_rgb(&clip(&linear, 0.0, 1.0)));
    clip(&rgb, 0.0, 255.0)
}
