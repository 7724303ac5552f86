use crate::core::FloatExt;
use crate::{Bits, Float};

/// Assert that two numbers or two coordinate arrays are equal after
/// normalization with [`to_eq_bits`].
///
/// Coordinates are compared pairwise. On failure, the message lists both
/// values on separate lines.
///
/// # Panics
///
/// If any pair of normalized numbers differs.
#[macro_export]
macro_rules! assert_close_enough {
    ([$($f1:expr),+ $(,)?], [$($f2:expr),+ $(,)?] $(,)?) => {
        $( $crate::assert_close_enough!($f1, $f2); )+
    };
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        assert_eq!(
            $crate::to_eq_bits(f1),
            $crate::to_eq_bits(f2),
            "numbers differ:\n{:?}\n{:?}",
            f1,
            f2
        );
    };
}

/// Normalize the number for equality testing and return its bits.
///
/// Not-a-number becomes zero, the number is rounded to the precision of
/// the type's rounding factor, and negative zero becomes positive zero.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(value: Float) -> Bits {
    let rounded = if value.is_nan() {
        0.0
    } else {
        (<Float as FloatExt>::ROUNDING_FACTOR * value).round()
    };

    // Adding positive zero turns negative zero into positive zero.
    (rounded + 0.0).to_bits()
}
