//! Utility module with chromata's errors.

use thiserror::Error;

/// An erroneous color format.
///
/// Parsing does not distinguish between malformed inputs in any more detail.
/// Each registered parser either accepts an input or passes it on to the next
/// parser, and only the dispatcher knows that all of them declined.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorFormatError {
    /// A color string that none of the registered string parsers accepts. For
    /// example, `#00` is missing a hexadecimal digit, whereas `lab(50 0 0)`
    /// requires the [`LabPlugin`](crate::LabPlugin).
    #[error("color string has unknown format")]
    UnknownFormat,

    /// A structured color that none of the registered object parsers accepts,
    /// e.g., because it lacks a required field.
    #[error("color object has unknown format")]
    UnknownObject,
}

/// An invalid palette request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The base color does not parse.
    #[error("invalid base color {input}")]
    InvalidColor { input: String },
}
