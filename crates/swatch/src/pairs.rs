//! The foreground/background pairs checked for contrast.
//!
//! Validation, auto-fix and analysis all iterate [`STANDARD_PAIRS`] in
//! order, so issue lists and accessibility scores agree with each other.

use hue::Color;

use crate::role::ColorRole;
use crate::theme::Theme;

/// A foreground role drawn on top of a background role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PairSpec {
    pub foreground: ColorRole,
    pub background: ColorRole,
}

impl PairSpec {
    const fn new(foreground: ColorRole, background: ColorRole) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Both colors of this pair, read from `theme`.
    pub fn resolve(&self, theme: &Theme) -> (Color, Color) {
        (theme.color(self.foreground), theme.color(self.background))
    }
}

pub const STANDARD_PAIRS: [PairSpec; 14] = [
    PairSpec::new(ColorRole::TextPrimary, ColorRole::Background),
    PairSpec::new(ColorRole::TextSecondary, ColorRole::Background),
    PairSpec::new(ColorRole::TextMuted, ColorRole::Background),
    PairSpec::new(ColorRole::TextPrimary, ColorRole::BackgroundSecondary),
    PairSpec::new(ColorRole::TextPrimary, ColorRole::Surface),
    PairSpec::new(ColorRole::Accent, ColorRole::Background),
    PairSpec::new(ColorRole::SuccessText, ColorRole::SuccessBackground),
    PairSpec::new(ColorRole::WarningText, ColorRole::WarningBackground),
    PairSpec::new(ColorRole::ErrorText, ColorRole::ErrorBackground),
    PairSpec::new(ColorRole::InfoText, ColorRole::InfoBackground),
    PairSpec::new(ColorRole::CodeText, ColorRole::CodeBackground),
    PairSpec::new(ColorRole::CodeComment, ColorRole::CodeBackground),
    PairSpec::new(ColorRole::CodeKeyword, ColorRole::CodeBackground),
    PairSpec::new(ColorRole::CodeString, ColorRole::CodeBackground),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_order() {
        let names: Vec<_> = STANDARD_PAIRS
            .iter()
            .map(|p| format!("{}/{}", p.foreground, p.background))
            .collect();
        assert_eq!(names[0], "TextPrimary/Background");
        assert_eq!(names[6], "Success.Text/Success.Background");
        assert_eq!(names[13], "CodeString/CodeBackground");
    }

    #[test]
    fn test_resolve_reads_theme() {
        let mut theme = Theme::new("t", "T");
        theme.background = Color::from_hex("#000");
        let (fg, bg) = STANDARD_PAIRS[0].resolve(&theme);
        assert!(fg.is_empty());
        assert_eq!(bg.hex(), "#000000");
    }
}
