use super::math::lerp;
use crate::Float;

/// Compute the CIEDE2000 color difference between two CIELAB colors.
///
/// This function implements the formulae from Sharma, Wu, and Dalal's [*The
/// CIEDE2000 Color-Difference Formula: Implementation Notes, Supplementary Test
/// Data, and Mathematical
/// Observations*](https://hajim.rochester.edu/ece/sites/gsharma/ciede2000/ciede2000noteCRNA.pdf)
/// with unit weighting factors. The result is symmetric in its arguments.
#[allow(non_snake_case)]
pub(crate) fn delta_e_2000(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    let pow25_7 = (25.0 as Float).powi(7);

    // Adjust a to account for the blue region
    let C1 = a1.hypot(b1);
    let C2 = a2.hypot(b2);
    let C_mean_7 = ((C1 + C2) / 2.0).powi(7);
    let G = 0.5 * (1.0 - (C_mean_7 / (C_mean_7 + pow25_7)).sqrt());

    let a1 = a1 * (1.0 + G);
    let a2 = a2 * (1.0 + G);

    let C1 = a1.hypot(b1);
    let C2 = a2.hypot(b2);

    #[inline]
    fn hue(a: Float, b: Float) -> Float {
        if a == 0.0 && b == 0.0 {
            0.0
        } else {
            b.atan2(a).to_degrees().rem_euclid(360.0)
        }
    }

    let h1 = hue(a1, b1);
    let h2 = hue(a2, b2);
    let is_achromatic = C1 * C2 == 0.0;

    // Differences
    let ΔL = L2 - L1;
    let ΔC = C2 - C1;
    let Δh = if is_achromatic {
        0.0
    } else {
        let Δh = h2 - h1;
        if Δh > 180.0 {
            Δh - 360.0
        } else if Δh < -180.0 {
            Δh + 360.0
        } else {
            Δh
        }
    };
    let ΔH = 2.0 * (C1 * C2).sqrt() * (Δh / 2.0).to_radians().sin();

    // Means
    let L_mean = (L1 + L2) / 2.0;
    let C_mean = (C1 + C2) / 2.0;
    let h_mean = if is_achromatic {
        h1 + h2
    } else if (h1 - h2).abs() <= 180.0 {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 360.0 {
        (h1 + h2 + 360.0) / 2.0
    } else {
        (h1 + h2 - 360.0) / 2.0
    };

    // Weighting functions
    let T = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let Δθ = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let C_mean_7 = C_mean.powi(7);
    let R_C = 2.0 * (C_mean_7 / (C_mean_7 + pow25_7)).sqrt();

    let L_offset_2 = (L_mean - 50.0).powi(2);
    let S_L = 1.0 + 0.015 * L_offset_2 / (20.0 + L_offset_2).sqrt();
    let S_C = 1.0 + 0.045 * C_mean;
    let S_H = 1.0 + 0.015 * C_mean * T;
    let R_T = -(2.0 * Δθ).to_radians().sin() * R_C;

    let ΔL = ΔL / S_L;
    let ΔC = ΔC / S_C;
    let ΔH = ΔH / S_H;

    (ΔL * ΔL + ΔC * ΔC + ΔH * ΔH + R_T * ΔC * ΔH).sqrt()
}

/// Find the candidate closest to the origin.
///
/// This function computes the distance to every candidate with the given
/// function and returns the index of the closest candidate together with its
/// distance, or `None` if there are no candidates. The first candidate wins a
/// tie. Since no candidate can be closer than zero, the search stops at the
/// first candidate with zero distance.
pub(crate) fn find_closest<C, I, F>(candidates: I, mut compute_distance: F) -> Option<(usize, Float)>
where
    I: IntoIterator<Item = C>,
    F: FnMut(C) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);

            if distance == 0.0 {
                break;
            }
        }
    }

    min_index.map(|index| (index, min_distance))
}

/// Interpolate linearly between the two coordinate arrays.
#[must_use = "function returns new color coordinates and does not mutate original values"]
pub(crate) fn interpolate(
    fraction: Float,
    coordinates1: &[Float; 4],
    coordinates2: &[Float; 4],
) -> [Float; 4] {
    [
        lerp(coordinates1[0], coordinates2[0], fraction),
        lerp(coordinates1[1], coordinates2[1], fraction),
        lerp(coordinates1[2], coordinates2[2], fraction),
        lerp(coordinates1[3], coordinates2[3], fraction),
    ]
}
