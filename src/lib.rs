//! # hueforge
//!
//! Theme data with color math, WCAG contrast validation and automatic
//! contrast repair.
//!
//! This crate bundles the workspace members behind one dependency:
//!
//! - [`hue`]: the [`Color`] value, color-space transforms and contrast math
//! - [`swatch`]: themes, derivation, validation, auto-fix, registry and export
//!
//! plus [`init_logger`], a file sink for the `log` records both crates emit.
//!
//! ```
//! use hueforge::{Color, ContrastLevel, Registry, auto_fix_contrast, validate_contrast};
//!
//! let registry = Registry::with_builtin();
//! registry.select("solarized-light").unwrap();
//! let theme = registry.current().unwrap();
//!
//! let fixed = auto_fix_contrast(&theme, ContrastLevel::Aa);
//! assert!(validate_contrast(&fixed, ContrastLevel::Aa).len()
//!     <= validate_contrast(&theme, ContrastLevel::Aa).len());
//! assert_ne!(fixed.text_primary, Color::EMPTY);
//! ```

pub mod error;
pub mod log_init;

pub use hue;
pub use swatch;

pub use error::LogInitError;
pub use hue::{Color, ColorParseError, ContrastLevel, WcagLevel, classify, contrast_ratio};
pub use log_init::{init_logger, init_logger_with_level};
pub use swatch::*;
