//! # Chromata
//!
//! Chromata parses, converts, manipulates, and compares CSS colors. It also
//! generates color palettes.
//!
//!
//! ## 1. Overview
//!
//! Chromata's main abstractions are:
//!
//!   * [`Color`] is an immutable, **canonical color**, i.e., an unrounded
//!     sRGB color with coordinates in `0..=255` plus alpha. Its methods
//!     convert to all supported color spaces, lighten, darken, saturate,
//!     rotate, mix, and measure perceptual differences.
//!   * The per-space records [`Rgb`], [`Hsl`], [`Hsv`], [`Hwb`], [`Xyz`],
//!     [`Lab`], [`Lch`], [`Oklab`], [`Oklch`], and [`Cmyk`] implement the
//!     [`ColorModel`] trait. They clamp and round their coordinates, convert
//!     to and from [`Rgb`], and parse as well as format CSS-like strings.
//!     Conversion from CIELAB, CIELCh, and Oklch **gamut-maps** colors by
//!     reducing chroma while preserving lightness and hue.
//!   * A [`Registry`] is the **format dispatcher**. It tries an ordered list
//!     of string or object parsers until one accepts an input. The
//!     process-wide registry handles hexadecimal, RGB, HSL, and Oklch strings
//!     by default. [`Plugin`]s such as [`LabPlugin`] add more formats.
//!   * [`generate_palette`], [`generate_shift_palette`],
//!     [`generate_antd_palette`], and [`find_nearest_palette`] produce
//!     11-level **palettes**.
//!
//!
//! ## 2. Parse, Convert, Format
//!
//! ```
//! # use chromata::{extend, Color, ColorFormatError, LabPlugin};
//! extend(&[&LabPlugin]);
//!
//! let color: Color = "lab(54.29% 80.8 69.89)".parse()?;
//! assert_eq!(color.to_hex(), "#ff0000");
//! assert_eq!(color.to_lab_string(), "lab(54.29% 80.8 69.89)");
//!
//! let red = Color::new("#f00");
//! assert_eq!(red.to_hsl_string(), "hsl(0 100% 50%)");
//! assert_eq!(red.darken(0.25).to_hex(), "#800000");
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//! Since the first color was parsed from a CIELAB string, converting it back to
//! CIELAB re-parses that string and incurs no rounding errors.
//!
//!
//! ## 3. Optional Features
//!
//! Chromata supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** derives `Serialize` and `Deserialize` for per-space
//!     records, color objects, formats, and palettes. This feature is
//!     disabled by default.
//!
//!
//! ## 4. Acknowledgements
//!
//! Chromata's conversions follow the formulae of the
//! [Color.js](https://colorjs.io) library and the [CSS Color
//! 4](https://www.w3.org/TR/css-color-4/) specification.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
mod error;
mod object;
mod palette;
mod registry;
mod space;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{clamp, clamp_hue, clamp_unit, floor, parse_alpha, parse_hue, round, AngleUnit};
pub use error::{ColorFormatError, PaletteError};
pub use object::{Color, Source};
pub use palette::{
    find_nearest_palette, format_output, generate_antd_palette, generate_palette,
    generate_shift_palette, FormattedColor, Level, NearestPalette, OutputFormat, Palette,
    PaletteFamily, Theme,
};
pub use registry::{
    extend, get_format, CmykPlugin, HwbPlugin, Input, LabPlugin, LchPlugin, ObjectParser,
    OklabPlugin, Plugin, Registry, StringParser, XyzPlugin,
};
pub use space::{
    parse_hex, to_hex, Cmyk, ColorModel, ColorObject, Format, Hsl, Hsv, Hwb, Lab, Lch, Oklab,
    Oklch, Rgb, Xyz, ALPHA_PRECISION,
};
