//! Error types for theme validation and serialization.

use thiserror::Error;

/// Errors produced by theme operations.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Strict validation found structural errors or contrast failures.
    ///
    /// The string holds every individual message joined with `"; "`.
    #[error("{0}")]
    Validation(String),

    /// A theme with the requested ID is not registered.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// Design-token serialization failed.
    #[error("failed to marshal design tokens: {0}")]
    Json(#[from] serde_json::Error),

    /// Serialized output was not valid UTF-8.
    #[error("serialized output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
