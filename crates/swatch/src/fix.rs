//! Automatic contrast repair.
//!
//! [`auto_fix_contrast`] walks the contrast issues of a theme and nudges each
//! failing foreground's HSL lightness away from its background, one fixed
//! step at a time, until the pair passes or the step budget runs out. Only
//! text, accent, border and a few syntax roles are rewritten; backgrounds and
//! semantic colors are never touched.

use hue::{Color, ContrastLevel, contrast_ratio};

use crate::derive::derive;
use crate::role::ColorRole;
use crate::theme::Theme;
use crate::validation::validate_contrast;

/// Step size and budget for the lightness search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixConfig {
    /// Lightness change per iteration (HSL, 0-1).
    pub step: f64,
    pub max_iterations: usize,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            step: 0.05,
            max_iterations: 50,
        }
    }
}

/// Returns a theme whose failing foregrounds have been adjusted toward `level`.
///
/// A theme without issues comes back unchanged. Otherwise the result is a
/// copy with `-fixed` appended to its ID and ` (Fixed)` to its name. The
/// search is best effort: a pair that cannot reach the target within the
/// budget keeps its closest attempt.
pub fn auto_fix_contrast(theme: &Theme, level: ContrastLevel) -> Theme {
    auto_fix_contrast_with(theme, level, &FixConfig::default())
}

pub fn auto_fix_contrast_with(theme: &Theme, level: ContrastLevel, config: &FixConfig) -> Theme {
    let issues = validate_contrast(theme, level);
    if issues.is_empty() {
        return theme.clone();
    }

    let mut fixed = theme.clone();
    fixed.id = format!("{}-fixed", theme.id);
    fixed.display_name = format!("{} (Fixed)", theme.display_name);
    fixed.description = format!("{} - WCAG contrast adjusted", theme.description);

    let mut adjusted: Vec<ColorRole> = Vec::new();
    for issue in &issues {
        let role = issue.foreground_role;
        if adjusted.contains(&role) {
            continue;
        }
        adjusted.push(role);

        if !role.is_auto_fixable() {
            log::debug!("{}: {role} is not auto-fixable, leaving as is", theme.id);
            continue;
        }

        let replacement = adjust_for_contrast(
            issue.foreground,
            issue.background,
            issue.required_ratio,
            theme.is_dark,
            config,
        );
        log::debug!(
            "{}: {role} {} -> {} ({:.2}:1 -> {:.2}:1)",
            theme.id,
            issue.foreground,
            replacement,
            issue.ratio,
            contrast_ratio(replacement, issue.background)
        );
        fixed.set_color(role, replacement);
    }

    derive(&fixed, Some(fixed.is_dark))
}

/// Lightens (dark themes) or darkens (light themes) `fg` until it reaches
/// `required` against `bg`, or the iteration budget is spent.
pub fn adjust_for_contrast(
    fg: Color,
    bg: Color,
    required: f64,
    is_dark: bool,
    config: &FixConfig,
) -> Color {
    let mut current = fg;
    for _ in 0..config.max_iterations {
        if contrast_ratio(current, bg) >= required {
            break;
        }
        current = if is_dark {
            current.lighten(config.step)
        } else {
            current.darken(config.step)
        };
    }
    current
}
