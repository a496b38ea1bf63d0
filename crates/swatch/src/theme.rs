//! The resolved theme record.
//!
//! A [`Theme`] is plain data: metadata plus one [`Color`] per slot. Slots
//! start as [`Color::EMPTY`] and are either set explicitly or filled by
//! [`derive`](crate::derive::derive). Consumers treat an empty slot as
//! "omit" or "transparent".
//!
//! ## Slot Groups
//!
//! | Group      | Slots                                                      |
//! |------------|------------------------------------------------------------|
//! | background | `background`, `background_secondary`, `surface`, `surface_secondary` |
//! | text       | `text_primary`, `text_secondary`, `text_muted`, `text_inverted` |
//! | accent     | `accent`, `accent_secondary`, `brand`                      |
//! | border     | `border`, `border_subtle`, `border_strong`                 |
//! | semantic   | `success`, `warning`, `error`, `info` (each bg/border/text) |
//! | ANSI       | 8 normal + 8 bright terminal colors                        |
//! | code       | 12 syntax-highlighting roles                               |

use hue::Color;

use crate::role::ColorRole;

/// Background, border and text colors for one semantic state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SemanticColor {
    pub background: Color,
    pub border: Color,
    pub text: Color,
}

impl SemanticColor {
    pub fn is_empty(&self) -> bool {
        self.background.is_empty() && self.border.is_empty() && self.text.is_empty()
    }
}

/// A complete theme: metadata and every color slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Theme {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub author: String,
    pub license: String,
    /// Upstream URL of the palette.
    pub source: String,
    pub is_dark: bool,

    pub background: Color,
    pub background_secondary: Color,
    pub surface: Color,
    pub surface_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_inverted: Color,

    pub accent: Color,
    pub accent_secondary: Color,
    pub brand: Color,

    pub border: Color,
    pub border_subtle: Color,
    pub border_strong: Color,

    pub success: SemanticColor,
    pub warning: SemanticColor,
    pub error: SemanticColor,
    pub info: SemanticColor,

    pub black: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub purple: Color,
    pub cyan: Color,
    pub white: Color,
    pub bright_black: Color,
    pub bright_red: Color,
    pub bright_green: Color,
    pub bright_yellow: Color,
    pub bright_blue: Color,
    pub bright_purple: Color,
    pub bright_cyan: Color,
    pub bright_white: Color,

    pub code_background: Color,
    pub code_text: Color,
    pub code_comment: Color,
    pub code_keyword: Color,
    pub code_string: Color,
    pub code_number: Color,
    pub code_function: Color,
    pub code_operator: Color,
    pub code_punctuation: Color,
    pub code_variable: Color,
    pub code_constant: Color,
    pub code_type: Color,
}

impl Theme {
    /// Creates a theme with metadata only; every color slot is empty.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            ..Default::default()
        }
    }

    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::BackgroundSecondary => self.background_secondary,
            ColorRole::Surface => self.surface,
            ColorRole::SurfaceSecondary => self.surface_secondary,
            ColorRole::TextPrimary => self.text_primary,
            ColorRole::TextSecondary => self.text_secondary,
            ColorRole::TextMuted => self.text_muted,
            ColorRole::TextInverted => self.text_inverted,
            ColorRole::Accent => self.accent,
            ColorRole::AccentSecondary => self.accent_secondary,
            ColorRole::Brand => self.brand,
            ColorRole::Border => self.border,
            ColorRole::BorderSubtle => self.border_subtle,
            ColorRole::BorderStrong => self.border_strong,
            ColorRole::SuccessBackground => self.success.background,
            ColorRole::SuccessBorder => self.success.border,
            ColorRole::SuccessText => self.success.text,
            ColorRole::WarningBackground => self.warning.background,
            ColorRole::WarningBorder => self.warning.border,
            ColorRole::WarningText => self.warning.text,
            ColorRole::ErrorBackground => self.error.background,
            ColorRole::ErrorBorder => self.error.border,
            ColorRole::ErrorText => self.error.text,
            ColorRole::InfoBackground => self.info.background,
            ColorRole::InfoBorder => self.info.border,
            ColorRole::InfoText => self.info.text,
            ColorRole::Black => self.black,
            ColorRole::Red => self.red,
            ColorRole::Green => self.green,
            ColorRole::Yellow => self.yellow,
            ColorRole::Blue => self.blue,
            ColorRole::Purple => self.purple,
            ColorRole::Cyan => self.cyan,
            ColorRole::White => self.white,
            ColorRole::BrightBlack => self.bright_black,
            ColorRole::BrightRed => self.bright_red,
            ColorRole::BrightGreen => self.bright_green,
            ColorRole::BrightYellow => self.bright_yellow,
            ColorRole::BrightBlue => self.bright_blue,
            ColorRole::BrightPurple => self.bright_purple,
            ColorRole::BrightCyan => self.bright_cyan,
            ColorRole::BrightWhite => self.bright_white,
            ColorRole::CodeBackground => self.code_background,
            ColorRole::CodeText => self.code_text,
            ColorRole::CodeComment => self.code_comment,
            ColorRole::CodeKeyword => self.code_keyword,
            ColorRole::CodeString => self.code_string,
            ColorRole::CodeNumber => self.code_number,
            ColorRole::CodeFunction => self.code_function,
            ColorRole::CodeOperator => self.code_operator,
            ColorRole::CodePunctuation => self.code_punctuation,
            ColorRole::CodeVariable => self.code_variable,
            ColorRole::CodeConstant => self.code_constant,
            ColorRole::CodeType => self.code_type,
        }
    }

    pub fn slot_mut(&mut self, role: ColorRole) -> &mut Color {
        match role {
            ColorRole::Background => &mut self.background,
            ColorRole::BackgroundSecondary => &mut self.background_secondary,
            ColorRole::Surface => &mut self.surface,
            ColorRole::SurfaceSecondary => &mut self.surface_secondary,
            ColorRole::TextPrimary => &mut self.text_primary,
            ColorRole::TextSecondary => &mut self.text_secondary,
            ColorRole::TextMuted => &mut self.text_muted,
            ColorRole::TextInverted => &mut self.text_inverted,
            ColorRole::Accent => &mut self.accent,
            ColorRole::AccentSecondary => &mut self.accent_secondary,
            ColorRole::Brand => &mut self.brand,
            ColorRole::Border => &mut self.border,
            ColorRole::BorderSubtle => &mut self.border_subtle,
            ColorRole::BorderStrong => &mut self.border_strong,
            ColorRole::SuccessBackground => &mut self.success.background,
            ColorRole::SuccessBorder => &mut self.success.border,
            ColorRole::SuccessText => &mut self.success.text,
            ColorRole::WarningBackground => &mut self.warning.background,
            ColorRole::WarningBorder => &mut self.warning.border,
            ColorRole::WarningText => &mut self.warning.text,
            ColorRole::ErrorBackground => &mut self.error.background,
            ColorRole::ErrorBorder => &mut self.error.border,
            ColorRole::ErrorText => &mut self.error.text,
            ColorRole::InfoBackground => &mut self.info.background,
            ColorRole::InfoBorder => &mut self.info.border,
            ColorRole::InfoText => &mut self.info.text,
            ColorRole::Black => &mut self.black,
            ColorRole::Red => &mut self.red,
            ColorRole::Green => &mut self.green,
            ColorRole::Yellow => &mut self.yellow,
            ColorRole::Blue => &mut self.blue,
            ColorRole::Purple => &mut self.purple,
            ColorRole::Cyan => &mut self.cyan,
            ColorRole::White => &mut self.white,
            ColorRole::BrightBlack => &mut self.bright_black,
            ColorRole::BrightRed => &mut self.bright_red,
            ColorRole::BrightGreen => &mut self.bright_green,
            ColorRole::BrightYellow => &mut self.bright_yellow,
            ColorRole::BrightBlue => &mut self.bright_blue,
            ColorRole::BrightPurple => &mut self.bright_purple,
            ColorRole::BrightCyan => &mut self.bright_cyan,
            ColorRole::BrightWhite => &mut self.bright_white,
            ColorRole::CodeBackground => &mut self.code_background,
            ColorRole::CodeText => &mut self.code_text,
            ColorRole::CodeComment => &mut self.code_comment,
            ColorRole::CodeKeyword => &mut self.code_keyword,
            ColorRole::CodeString => &mut self.code_string,
            ColorRole::CodeNumber => &mut self.code_number,
            ColorRole::CodeFunction => &mut self.code_function,
            ColorRole::CodeOperator => &mut self.code_operator,
            ColorRole::CodePunctuation => &mut self.code_punctuation,
            ColorRole::CodeVariable => &mut self.code_variable,
            ColorRole::CodeConstant => &mut self.code_constant,
            ColorRole::CodeType => &mut self.code_type,
        }
    }

    pub fn set_color(&mut self, role: ColorRole, color: Color) {
        *self.slot_mut(role) = color;
    }

    /// Resolves a symbolic role name; unknown names yield [`Color::EMPTY`].
    pub fn color_by_name(&self, name: &str) -> Color {
        ColorRole::from_name(name)
            .map(|role| self.color(role))
            .unwrap_or(Color::EMPTY)
    }

    /// Every slot paired with its role, in rendering order.
    pub fn colors(&self) -> impl Iterator<Item = (ColorRole, Color)> + '_ {
        ColorRole::ALL.iter().map(move |&role| (role, self.color(role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_theme_is_empty() {
        let theme = Theme::new("t", "T");
        assert!(theme.colors().all(|(_, c)| c.is_empty()));
        assert!(!theme.is_dark);
        assert!(theme.success.is_empty());
    }

    #[test]
    fn test_set_and_get_every_role() {
        let mut theme = Theme::new("t", "T");
        for (i, &role) in ColorRole::ALL.iter().enumerate() {
            theme.set_color(role, Color::rgb(i as u8, 0, 0));
        }
        for (i, &role) in ColorRole::ALL.iter().enumerate() {
            assert_eq!(theme.color(role), Color::rgb(i as u8, 0, 0), "{role}");
        }
    }

    #[test]
    fn test_color_by_name() {
        let mut theme = Theme::new("t", "T");
        theme.warning.text = Color::from_hex("#eab308");
        assert_eq!(theme.color_by_name("Warning.Text").hex(), "#eab308");
        assert!(theme.color_by_name("Warning.Glow").is_empty());
    }
}
