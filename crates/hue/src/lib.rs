//! Color values and WCAG contrast math for hueforge themes.
//!
//! - [`Color`]: immutable hex-backed color with HSL, Lab and LCh(uv) transforms
//! - [`contrast`]: relative luminance ratios and WCAG level classification

pub mod color;
pub mod contrast;
pub mod error;

pub use color::Color;
pub use contrast::{ContrastLevel, WcagLevel, classify, contrast_ratio};
pub use error::ColorParseError;
