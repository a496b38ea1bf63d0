//! Structural and WCAG contrast validation.
//!
//! Two independent checks:
//!
//! - [`validate_theme`] looks for missing metadata, missing required colors,
//!   empty ANSI slots and a dark flag that disagrees with the background.
//! - [`validate_contrast`] measures every pair of [`STANDARD_PAIRS`] against
//!   the requested [`ContrastLevel`].
//!
//! [`validate_strict`] folds both into a single `Result` for callers that
//! want pass/fail.

use std::fmt;

use hue::{Color, ContrastLevel, contrast_ratio};
use thiserror::Error;

use crate::error::{Result, ThemeError};
use crate::pairs::STANDARD_PAIRS;
use crate::role::ColorRole;
use crate::theme::Theme;

/// How serious a [`ValidationError`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structural problem with a theme.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("[{severity}] {field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationError {
    fn error(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        }
    }

    fn warning(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        }
    }
}

/// A foreground/background pair below the required contrast ratio.
#[derive(Error, Clone, Debug, PartialEq)]
#[error(
    "{foreground_role} on {background_role}: {ratio:.2}:1 (requires {required_ratio:.1}:1 for {level})"
)]
pub struct ContrastIssue {
    pub foreground_role: ColorRole,
    pub background_role: ColorRole,
    pub foreground: Color,
    pub background: Color,
    pub ratio: f64,
    pub required_ratio: f64,
    pub level: ContrastLevel,
}

const CHECKED_ANSI: [(&str, ColorRole); 5] = [
    ("Black", ColorRole::Black),
    ("Red", ColorRole::Red),
    ("Green", ColorRole::Green),
    ("Blue", ColorRole::Blue),
    ("White", ColorRole::White),
];

/// Checks a theme for missing data and mode mismatches.
pub fn validate_theme(theme: &Theme) -> Vec<ValidationError> {
    let mut errs = Vec::new();

    if theme.id.is_empty() {
        errs.push(ValidationError::error("ID", "theme ID is required"));
    }
    if theme.display_name.is_empty() {
        errs.push(ValidationError::error("DisplayName", "display name is required"));
    }
    if theme.background.is_empty() {
        errs.push(ValidationError::error("Background", "background color is required"));
    }
    if theme.text_primary.is_empty() {
        errs.push(ValidationError::error("TextPrimary", "primary text color is required"));
    }

    for (field, role) in CHECKED_ANSI {
        if theme.color(role).is_empty() {
            errs.push(ValidationError::warning(field, "ANSI color is empty or transparent"));
        }
    }

    if !theme.background.is_empty() && !theme.text_primary.is_empty() {
        let dark_bg = theme.background.is_dark();
        let dark_text = theme.text_primary.is_dark();

        if theme.is_dark && !dark_bg {
            errs.push(ValidationError::warning(
                "IsDark",
                "theme is marked as dark but has a light background",
            ));
        }
        if !theme.is_dark && dark_bg {
            errs.push(ValidationError::warning(
                "IsDark",
                "theme is marked as light but has a dark background",
            ));
        }
        if dark_bg == dark_text {
            errs.push(ValidationError::warning(
                "TextPrimary",
                "text and background have similar luminance, may be hard to read",
            ));
        }
    }

    errs
}

/// Returns one issue per standard pair that falls below `level`.
///
/// Pairs with an empty side are skipped; issues keep pair order.
pub fn validate_contrast(theme: &Theme, level: ContrastLevel) -> Vec<ContrastIssue> {
    let required = level.required_ratio();

    STANDARD_PAIRS
        .iter()
        .filter_map(|pair| {
            let (fg, bg) = pair.resolve(theme);
            if fg.is_empty() || bg.is_empty() {
                return None;
            }
            let ratio = contrast_ratio(fg, bg);
            (ratio < required).then(|| ContrastIssue {
                foreground_role: pair.foreground,
                background_role: pair.background,
                foreground: fg,
                background: bg,
                ratio,
                required_ratio: required,
                level,
            })
        })
        .collect()
}

/// Fails when the theme has structural errors or AA contrast issues.
pub fn validate_strict(theme: &Theme) -> Result<()> {
    validate_strict_at(theme, ContrastLevel::Aa)
}

/// Like [`validate_strict`], at AAA.
pub fn validate_strict_aaa(theme: &Theme) -> Result<()> {
    validate_strict_at(theme, ContrastLevel::Aaa)
}

fn validate_strict_at(theme: &Theme, level: ContrastLevel) -> Result<()> {
    // warnings do not fail strict validation
    let messages: Vec<String> = validate_theme(theme)
        .iter()
        .filter(|e| e.severity == Severity::Error)
        .map(ToString::to_string)
        .chain(validate_contrast(theme, level).iter().map(ToString::to_string))
        .collect();

    if messages.is_empty() {
        return Ok(());
    }

    log::debug!(
        "strict {} validation of '{}' found {} problem(s)",
        level,
        theme.id,
        messages.len()
    );
    Err(ThemeError::Validation(messages.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ThemeBuilder;

    fn low_contrast() -> Theme {
        ThemeBuilder::new("low", "Low")
            .with_background(Color::from_hex("#1a1a1a"))
            .with_text_primary(Color::from_hex("#444444"))
            .with_is_dark(true)
            .build()
    }

    #[test]
    fn test_required_fields() {
        let errs = validate_theme(&Theme::default());
        let fields: Vec<_> = errs
            .iter()
            .filter(|e| e.severity == Severity::Error)
            .map(|e| e.field.as_str())
            .collect();
        assert_eq!(fields, ["ID", "DisplayName", "Background", "TextPrimary"]);
    }

    #[test]
    fn test_ansi_warnings() {
        let errs = validate_theme(&low_contrast());
        let ansi = errs
            .iter()
            .filter(|e| e.message == "ANSI color is empty or transparent")
            .count();
        assert_eq!(ansi, 5);
    }

    #[test]
    fn test_mode_mismatch_warning() {
        let theme = ThemeBuilder::new("m", "M")
            .with_background(Color::from_hex("#ffffff"))
            .with_text_primary(Color::from_hex("#000000"))
            .with_is_dark(true)
            .build();
        let errs = validate_theme(&theme);
        assert!(errs.iter().any(|e| e.field == "IsDark"
            && e.message == "theme is marked as dark but has a light background"));
    }

    #[test]
    fn test_light_flag_on_dark_background_warning() {
        let theme = ThemeBuilder::new("m", "M")
            .with_background(Color::from_hex("#000000"))
            .with_text_primary(Color::from_hex("#ffffff"))
            .with_is_dark(false)
            .build();
        let errs = validate_theme(&theme);
        assert!(errs.iter().any(|e| e.field == "IsDark"
            && e.severity == Severity::Warning
            && e.message == "theme is marked as light but has a dark background"));
    }

    #[test]
    fn test_similar_luminance_warning() {
        let errs = validate_theme(&low_contrast());
        assert!(errs.iter().any(|e| e.field == "TextPrimary"
            && e.severity == Severity::Warning));
    }

    #[test]
    fn test_validation_error_display() {
        let e = ValidationError::error("ID", "theme ID is required");
        assert_eq!(e.to_string(), "[error] ID: theme ID is required");
    }

    #[test]
    fn test_contrast_issue_display() {
        let issues = validate_contrast(&low_contrast(), ContrastLevel::Aa);
        let first = &issues[0];
        assert_eq!(first.foreground_role, ColorRole::TextPrimary);
        assert_eq!(first.background_role, ColorRole::Background);
        let text = first.to_string();
        assert!(text.starts_with("TextPrimary on Background: "));
        assert!(text.ends_with(":1 (requires 4.5:1 for AA)"));
    }

    #[test]
    fn test_skips_empty_pairs() {
        let mut theme = Theme::new("bare", "Bare");
        theme.background = Color::from_hex("#000000");
        theme.text_primary = Color::from_hex("#111111");
        let issues = validate_contrast(&theme, ContrastLevel::Aa);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_strict_joins_messages() {
        let err = validate_strict(&low_contrast()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("TextPrimary on Background"));
        assert!(msg.contains("; "));
        assert!(!msg.contains("[warning]"));
    }

    #[test]
    fn test_derived_semantic_pairs_share_rgb() {
        let theme = ThemeBuilder::new("hc", "High Contrast")
            .with_background(Color::from_hex("#000000"))
            .with_text_primary(Color::from_hex("#ffffff"))
            .with_accent(Color::from_hex("#ffff00"))
            .build();
        // luminance ignores alpha, so a derived tint measures 1:1 against its text
        let failing: Vec<_> = validate_contrast(&theme, ContrastLevel::Aa)
            .into_iter()
            .map(|i| i.foreground_role)
            .collect();
        assert_eq!(
            failing,
            [
                ColorRole::SuccessText,
                ColorRole::WarningText,
                ColorRole::ErrorText,
                ColorRole::InfoText,
            ]
        );
    }

    #[test]
    fn test_strict_passes_clean_theme() {
        let mut theme = Theme::new("clean", "Clean");
        theme.background = Color::from_hex("#000000");
        theme.text_primary = Color::from_hex("#ffffff");
        assert!(validate_strict(&theme).is_ok());
        assert!(validate_strict_aaa(&theme).is_ok());
    }

    #[test]
    fn test_strict_aaa_rejects_aa_only_pair() {
        let mut theme = Theme::new("mid", "Mid");
        theme.background = Color::from_hex("#000000");
        // about 4.69:1
        theme.text_primary = Color::from_hex("#777777");
        assert!(validate_strict(&theme).is_ok());

        let msg = validate_strict_aaa(&theme).unwrap_err().to_string();
        assert!(msg.contains("TextPrimary on Background"));
        assert!(msg.contains("requires 7.0:1 for AAA"));
    }
}
