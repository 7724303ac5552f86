use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

// --------------------------------------------------------------------------------------------------------------------

/// Round the number to the given number of fractional digits.
///
/// The result never is negative zero.
#[inline]
pub fn round(value: Float, digits: i32) -> Float {
    let base = (10.0 as Float).powi(digits);
    (base * value).round() / base + 0.0
}

/// Floor the number to the given number of fractional digits.
///
/// The result never is negative zero.
#[inline]
pub fn floor(value: Float, digits: i32) -> Float {
    let base = (10.0 as Float).powi(digits);
    (base * value).floor() / base + 0.0
}

/// Clamp the number to `min..=max`.
///
/// Unlike [`Float::clamp`], this function does not pass not-a-number through.
/// Since not-a-number compares false to both bounds, it ends up as `min`.
#[inline]
pub fn clamp(value: Float, min: Float, max: Float) -> Float {
    if value > max {
        max
    } else if value >= min {
        value
    } else {
        min
    }
}

/// Clamp the number to the unit range `0..=1`.
#[inline]
pub fn clamp_unit(value: Float) -> Float {
    clamp(value, 0.0, 1.0)
}

/// Normalize the hue to `0..360`.
///
/// Not-a-number and infinities become zero. All other angles are reduced
/// modulo 360 with a non-negative remainder.
pub fn clamp_hue(degrees: Float) -> Float {
    if !degrees.is_finite() {
        return 0.0;
    }

    let hue = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative angle rounds up to the modulus itself.
    if hue >= 360.0 {
        0.0
    } else {
        hue + 0.0
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A CSS angle unit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Gradians,
    Radians,
    Turns,
}

impl AngleUnit {
    /// Look up the unit for the given suffix.
    ///
    /// The empty suffix and unknown suffixes both denote degrees.
    pub fn from_suffix(suffix: &str) -> Self {
        match suffix.to_ascii_lowercase().as_str() {
            "grad" => Self::Gradians,
            "rad" => Self::Radians,
            "turn" => Self::Turns,
            _ => Self::Degrees,
        }
    }

    /// Get the factor for converting this unit to degrees.
    pub fn to_degrees_factor(&self) -> Float {
        match *self {
            Self::Degrees => 1.0,
            Self::Gradians => 0.9,
            Self::Radians => 180.0 / ::core::f64::consts::PI as Float,
            Self::Turns => 360.0,
        }
    }
}

/// Parse a number from a regex capture.
#[inline]
pub(crate) fn parse_number(text: &str) -> Option<Float> {
    text.trim().parse::<Float>().ok()
}

/// Parse a number that may be suffixed with a percent sign, returning the
/// number and whether it is a percentage.
pub(crate) fn parse_maybe_percent(text: &str) -> Option<(Float, bool)> {
    let text = text.trim();
    match text.strip_suffix('%') {
        Some(number) => Some((parse_number(number)?, true)),
        None => Some((parse_number(text)?, false)),
    }
}

/// Parse a hue with optional angle unit, returning degrees.
///
/// The result has not been normalized yet.
pub fn parse_hue(value: &str, unit: &str) -> Option<Float> {
    Some(parse_number(value)? * AngleUnit::from_suffix(unit).to_degrees_factor())
}

/// Parse an optional alpha value.
///
/// A missing value means fully opaque. Percentages are scaled to the unit
/// range. The result has not been clamped yet.
pub fn parse_alpha(value: Option<&str>) -> Option<Float> {
    match value {
        None => Some(1.0),
        Some(text) if text.trim().is_empty() => Some(1.0),
        Some(text) => {
            let (number, is_percent) = parse_maybe_percent(text)?;
            Some(if is_percent { number / 100.0 } else { number })
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
pub(crate) fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Interpolate linearly between the two numbers.
#[inline]
pub(crate) fn lerp(from: Float, to: Float, fraction: Float) -> Float {
    fraction.mul_add(to - from, from)
}
