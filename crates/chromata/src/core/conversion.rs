use super::math::{clamp_hue, multiply};
use crate::Float;

/// The D50 reference white, normalized to Y = 1 and derived from the
/// chromaticity (0.3457, 0.3585).
#[allow(clippy::excessive_precision)]
pub(crate) const D50_WHITE: [Float; 3] = [0.9642956764295677, 1.0, 0.8251046025104602];

/// The D65 reference white, normalized to Y = 1 and derived from the
/// chromaticity (0.3127, 0.3290).
#[allow(clippy::excessive_precision)]
pub(crate) const D65_WHITE: [Float; 3] = [0.9504559270516716, 1.0, 1.0890577507598784];

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. Both use the
/// unit range. This is a one-hop, direct conversion.
pub(crate) fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. Both use the
/// unit range. This is a one-hop, direct conversion.
pub(crate) fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.0031308 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Scale 8-bit range coordinates `0..=255` down to the unit range.
#[inline]
pub(crate) fn from_8bit_range(value: &[Float; 3]) -> [Float; 3] {
    [value[0] / 255.0, value[1] / 255.0, value[2] / 255.0]
}

/// Scale unit range coordinates up to the 8-bit range `0..=255`.
#[inline]
pub(crate) fn to_8bit_range(value: &[Float; 3]) -> [Float; 3] {
    [value[0] * 255.0, value[1] * 255.0, value[2] * 255.0]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

/// Convert coordinates for linear sRGB to XYZ (D65). This is a one-hop, direct
/// conversion.
#[inline]
pub(crate) fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// Convert coordinates for XYZ (D65) to linear sRGB. This is a one-hop, direct
/// conversion.
#[inline]
pub(crate) fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/adapt.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D65_TO_D50: [[Float; 3]; 3] = [
    [  1.0479297925449969,    0.022946870601609652, -0.05019226628920524  ],
    [  0.02962780877005599,   0.9904344267538799,   -0.017073799063418826 ],
    [ -0.009243040646204504,  0.015055191490298152,  0.7518742814281371   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D50_TO_D65: [[Float; 3]; 3] = [
    [  0.955473421488075,    -0.02309845494876471,   0.06325924320057072  ],
    [ -0.0283697093338637,    1.0099953980813041,    0.021041441191917323 ],
    [  0.012314014864481998, -0.020507649298898964,  1.330365926242124    ],
];

/// Adapt XYZ coordinates from the D65 to the D50 white point.
#[inline]
pub(crate) fn d65_to_d50(value: &[Float; 3]) -> [Float; 3] {
    multiply(&D65_TO_D50, value)
}

/// Adapt XYZ coordinates from the D50 to the D65 white point.
#[inline]
pub(crate) fn d50_to_d65(value: &[Float; 3]) -> [Float; 3] {
    multiply(&D50_TO_D65, value)
}

// --------------------------------------------------------------------------------------------------------------------

const EPSILON: Float = 216.0 / 24389.0;
const KAPPA: Float = 24389.0 / 27.0;

/// Convert coordinates for XYZ (D50) to CIELAB. This is a one-hop, direct
/// conversion.
pub(crate) fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn compress(t: Float) -> Float {
        if t > EPSILON {
            t.cbrt()
        } else {
            KAPPA.mul_add(t, 16.0) / 116.0
        }
    }

    let fx = compress(value[0] / D50_WHITE[0]);
    let fy = compress(value[1] / D50_WHITE[1]);
    let fz = compress(value[2] / D50_WHITE[2]);

    [fy.mul_add(116.0, -16.0), 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert coordinates for CIELAB to XYZ (D50). This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
pub(crate) fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;

    let fy = (L + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    #[inline]
    fn expand(t: Float) -> Float {
        let cube = t * t * t;
        if cube > EPSILON {
            cube
        } else {
            t.mul_add(116.0, -16.0) / KAPPA
        }
    }

    let yr = if L > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        L / KAPPA
    };

    [
        expand(fx) * D50_WHITE[0],
        yr * D50_WHITE[1],
        expand(fz) * D50_WHITE[2],
    ]
}

// --------------------------------------------------------------------------------------------------------------------
// https://bottosson.github.io/posts/oklab/

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.4122214708, 0.5363325363, 0.0514459929 ],
    [ 0.2119034982, 0.6806995451, 0.1073969566 ],
    [ 0.0883024619, 0.2817188376, 0.6299787005 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [  0.2104542553,  0.7936177850, -0.0040720468 ],
    [  1.9779984951, -2.4285922050,  0.4505937099 ],
    [  0.0259040371,  0.7827717662, -0.8086757660 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 1.0,  0.3963377774,  0.2158037573 ],
    [ 1.0, -0.1055613458, -0.0638541728 ],
    [ 1.0, -0.0894841775, -1.2914855480 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  4.0767416621, -3.3077115913,  0.2309699292 ],
    [ -1.2684380046,  2.6097574011, -0.3413193965 ],
    [ -0.0041960863, -0.7034186147,  1.7076147010 ],
];

/// Convert coordinates for linear sRGB to Oklab. This is a one-hop, direct
/// conversion.
pub(crate) fn linear_srgb_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&LINEAR_SRGB_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

/// Convert coordinates for Oklab to linear sRGB. This is a one-hop, direct
/// conversion.
pub(crate) fn oklab_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_LINEAR_SRGB, &[l * l * l, m * m * m, s * s * s])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert Cartesian coordinates, i.e., lightness, a, and b, to polar
/// coordinates, i.e., lightness, chroma, and hue.
///
/// If chroma falls below the threshold, hue is zero.
pub(crate) fn to_polar(value: &[Float; 3], threshold: Float) -> [Float; 3] {
    let [lightness, a, b] = *value;
    let chroma = a.hypot(b);
    let hue = if chroma < threshold {
        0.0
    } else {
        clamp_hue(b.atan2(a).to_degrees())
    };

    [lightness, chroma, hue]
}

/// Convert polar coordinates, i.e., lightness, chroma, and hue, to Cartesian
/// coordinates, i.e., lightness, a, and b.
pub(crate) fn to_cartesian(value: &[Float; 3]) -> [Float; 3] {
    let [lightness, chroma, hue] = *value;
    let (sin, cos) = hue.to_radians().sin_cos();
    [lightness, chroma * cos, chroma * sin]
}

// ====================================================================================================================

/// Convert 8-bit range sRGB to XYZ (D65).
pub(crate) fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    linear_srgb_to_xyz(&rgb_to_linear_rgb(&from_8bit_range(value)))
}

/// Convert XYZ (D65) to 8-bit range sRGB, without clamping.
pub(crate) fn xyz_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    to_8bit_range(&linear_rgb_to_rgb(&xyz_to_linear_srgb(value)))
}

/// Convert 8-bit range sRGB to CIELAB.
pub(crate) fn srgb_to_lab(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_lab(&d65_to_d50(&srgb_to_xyz(value)))
}

/// Convert CIELAB to 8-bit range sRGB, without clamping.
pub(crate) fn lab_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_srgb(&d50_to_d65(&lab_to_xyz(value)))
}

/// Convert 8-bit range sRGB to Oklab.
pub(crate) fn srgb_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    linear_srgb_to_oklab(&rgb_to_linear_rgb(&from_8bit_range(value)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    fn assert_near(actual: &[Float; 3], expected: &[Float; 3], tolerance: Float) {
        for index in 0..3 {
            assert!(
                (actual[index] - expected[index]).abs() <= tolerance,
                "coordinates differ:\n{:?}\n{:?}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_transfer_functions() {
        let rgb = [0.0, 0.5, 1.0];
        let linear = rgb_to_linear_rgb(&rgb);
        assert_close_enough!([linear[0], linear[2]], [0.0, 1.0]);
        assert_near(&linear, &[0.0, 0.21404114048223255, 1.0], 1e-12);
        assert_near(&linear_rgb_to_rgb(&linear), &rgb, 1e-12);
    }

    #[test]
    fn test_white_point() {
        let white = srgb_to_xyz(&[255.0, 255.0, 255.0]);
        assert_near(&white, &D65_WHITE, 1e-4);

        let lab = srgb_to_lab(&[255.0, 255.0, 255.0]);
        assert_near(&lab, &[100.0, 0.0, 0.0], 1e-3);

        let oklab = srgb_to_oklab(&[255.0, 255.0, 255.0]);
        assert_near(&oklab, &[1.0, 0.0, 0.0], 1e-4);
    }

    #[test]
    fn test_lab() {
        // Red in CIELAB (D50), as computed by color.js
        let lab = srgb_to_lab(&[255.0, 0.0, 0.0]);
        assert_near(&lab, &[54.29, 80.82, 69.91], 0.1);
        assert_near(&lab_to_srgb(&lab), &[255.0, 0.0, 0.0], 1e-6);

        let dark = [5.0, 3.0, -2.0];
        assert_near(&xyz_to_lab(&lab_to_xyz(&dark)), &dark, 1e-9);
    }

    #[test]
    fn test_oklab() {
        // Red in Oklab, as published by Björn Ottosson
        let oklab = srgb_to_oklab(&[255.0, 0.0, 0.0]);
        assert_near(&oklab, &[0.62796, 0.22486, 0.12585], 1e-4);

        let linear = oklab_to_linear_srgb(&oklab);
        assert_near(&linear, &[1.0, 0.0, 0.0], 1e-6);
    }

    #[test]
    fn test_polar() {
        let polar = to_polar(&[50.0, 0.0, 10.0], 0.0001);
        assert_near(&polar, &[50.0, 10.0, 90.0], 1e-9);
        assert_near(&to_cartesian(&polar), &[50.0, 0.0, 10.0], 1e-9);

        let gray = to_polar(&[50.0, 0.00001, -0.00001], 0.0001);
        assert_eq!(gray[2], 0.0, "achromatic hue");

        let negative = to_polar(&[50.0, 1.0, -1.0], 0.0001);
        assert_near(&negative, &[50.0, (2.0 as Float).sqrt(), 315.0], 1e-9);
    }
}
