mod conversion;
mod difference;
mod equality;
mod gamut;
mod math;

// conversion
pub(crate) use conversion::{
    from_8bit_range, linear_rgb_to_rgb, oklab_to_linear_srgb, rgb_to_linear_rgb, srgb_to_lab,
    srgb_to_oklab, srgb_to_xyz, to_8bit_range, to_polar, xyz_to_srgb, D65_WHITE,
};

// difference
pub(crate) use difference::{delta_e_2000, find_closest, interpolate};

// equality
pub use equality::to_eq_bits;

// gamut
pub(crate) use gamut::{in_gamut, map_lch_to_srgb, map_oklch_to_srgb};

// math
pub(crate) use math::{parse_maybe_percent, parse_number, FloatExt};
pub use math::{clamp, clamp_hue, clamp_unit, floor, parse_alpha, parse_hue, round, AngleUnit};
