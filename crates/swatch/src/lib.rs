//! # swatch
//!
//! Theme data for UI and terminal color schemes: a fixed set of color
//! slots, a derivation engine that fills the slots a theme author left
//! empty, WCAG contrast validation over a fixed pair taxonomy and an
//! automatic fixer for failing pairs.
//!
//! ## Quick Start
//!
//! ```
//! use hue::{Color, ContrastLevel};
//! use swatch::{ThemeBuilder, auto_fix_contrast, validate_contrast};
//!
//! let theme = ThemeBuilder::new("low", "Low")
//!     .with_background(Color::from_hex("#1a1a1a"))
//!     .with_text_primary(Color::from_hex("#444444"))
//!     .with_is_dark(true)
//!     .build();
//!
//! assert!(!validate_contrast(&theme, ContrastLevel::Aa).is_empty());
//!
//! let fixed = auto_fix_contrast(&theme, ContrastLevel::Aa);
//! assert_eq!(fixed.id, "low-fixed");
//! assert!(hue::contrast_ratio(fixed.text_primary, fixed.background) >= 4.5);
//! ```
//!
//! ## Modules
//!
//! - [`role`] / [`theme`]: the slot table and the theme record
//! - [`derive`] / [`builder`]: filling in missing slots
//! - [`pairs`] / [`validation`] / [`fix`]: contrast checking and repair
//! - [`analysis`]: accessibility statistics
//! - [`registry`] / [`builtin`]: theme collections
//! - [`output`] / [`tokens`]: CSS, SCSS, JSON and DTCG export

pub mod analysis;
pub mod builder;
pub mod builtin;
pub mod derive;
pub mod error;
pub mod fix;
pub mod output;
pub mod pairs;
pub mod registry;
pub mod role;
pub mod theme;
pub mod tokens;
pub mod validation;

pub use analysis::{
    ThemeComparison, ThemeStats, analyze_all, analyze_theme, compare_themes, filter_accessible,
    sort_by_accessibility,
};
pub use builder::{Palette, ThemeBuilder, derive_theme, generate_from_palette};
pub use builtin::{builtin, builtin_themes};
pub use derive::derive;
pub use error::{Result, ThemeError};
pub use fix::{FixConfig, adjust_for_contrast, auto_fix_contrast, auto_fix_contrast_with};
pub use output::{
    ColorSpace, CssOptions, SyntaxFormat, SyntaxOptions, generate_all_themes_css, generate_css,
    generate_json, generate_scss, generate_syntax_css,
};
pub use pairs::{PairSpec, STANDARD_PAIRS};
pub use registry::Registry;
pub use role::ColorRole;
pub use theme::{SemanticColor, Theme};
pub use tokens::{TokenOptions, generate_all_design_tokens, generate_design_tokens};
pub use validation::{
    ContrastIssue, Severity, ValidationError, validate_contrast, validate_strict,
    validate_strict_aaa, validate_theme,
};
