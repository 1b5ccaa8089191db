//! Unit-parse failures.
//!
//! None of these abort a frame: [`crate::units::resolve`] turns them into a
//! zero length plus a warning. They surface as `Err` only through
//! [`crate::units::try_resolve`] and [`crate::style::LengthValue::parse`].

use thiserror::Error;

/// A length string that could not be turned into a number of pixels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// The numeric part is not a number (e.g. `"abc%"`, `"12xx"`).
    #[error("invalid number format in unit string '{0}'")]
    InvalidNumber(String),
    /// The numeric part does not fit in an `f32`.
    #[error("value out of range in unit string '{0}'")]
    OutOfRange(String),
}
