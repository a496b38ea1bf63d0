//! Error types for color parsing.

use thiserror::Error;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input was empty (or only a `#`).
    #[error("empty color string")]
    Empty,

    /// The hex body had a length other than 3, 6 or 8 digits.
    #[error("invalid hex color length: {0}")]
    InvalidLength(usize),

    /// A character outside `[0-9a-fA-F]` was found.
    #[error("invalid hex digit: {0:?}")]
    InvalidDigit(char),
}
