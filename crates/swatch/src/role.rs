//! The fixed table of theme color slots.
//!
//! Every color a [`Theme`](crate::Theme) carries is addressed by a
//! [`ColorRole`]. Each role has three spellings:
//!
//! | Form            | Example          | Used by                        |
//! |-----------------|------------------|--------------------------------|
//! | symbolic name   | `Success.Text`   | pair taxonomy, contrast issues |
//! | CSS name        | `success-text`   | CSS/SCSS/JSON renderers        |
//! | override key    | `text_primary`   | [`derive_theme`](crate::derive_theme) |
//!
//! Semantic sub-slots have no override key; they are replaced as a group.

use phf::phf_map;

macro_rules! color_roles {
    ($($variant:ident => $name:literal, $css:literal;)+) => {
        /// Identifies one color slot of a theme.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ColorRole {
            $($variant,)+
        }

        impl ColorRole {
            /// Every role, in rendering order.
            pub const ALL: &'static [ColorRole] = &[$(ColorRole::$variant,)+];

            /// Symbolic name, e.g. `TextPrimary` or `Warning.Background`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(ColorRole::$variant => $name,)+
                }
            }

            /// Kebab-case name used for CSS custom properties.
            pub fn css_name(&self) -> &'static str {
                match self {
                    $(ColorRole::$variant => $css,)+
                }
            }
        }
    };
}

color_roles! {
    Background => "Background", "background";
    BackgroundSecondary => "BackgroundSecondary", "background-secondary";
    Surface => "Surface", "surface";
    SurfaceSecondary => "SurfaceSecondary", "surface-secondary";
    TextPrimary => "TextPrimary", "text-primary";
    TextSecondary => "TextSecondary", "text-secondary";
    TextMuted => "TextMuted", "text-muted";
    TextInverted => "TextInverted", "text-inverted";
    Accent => "Accent", "accent";
    AccentSecondary => "AccentSecondary", "accent-secondary";
    Brand => "Brand", "brand";
    Border => "Border", "border";
    BorderSubtle => "BorderSubtle", "border-subtle";
    BorderStrong => "BorderStrong", "border-strong";
    SuccessBackground => "Success.Background", "success-background";
    SuccessBorder => "Success.Border", "success-border";
    SuccessText => "Success.Text", "success-text";
    WarningBackground => "Warning.Background", "warning-background";
    WarningBorder => "Warning.Border", "warning-border";
    WarningText => "Warning.Text", "warning-text";
    ErrorBackground => "Error.Background", "error-background";
    ErrorBorder => "Error.Border", "error-border";
    ErrorText => "Error.Text", "error-text";
    InfoBackground => "Info.Background", "info-background";
    InfoBorder => "Info.Border", "info-border";
    InfoText => "Info.Text", "info-text";
    Black => "Black", "black";
    Red => "Red", "red";
    Green => "Green", "green";
    Yellow => "Yellow", "yellow";
    Blue => "Blue", "blue";
    Purple => "Purple", "purple";
    Cyan => "Cyan", "cyan";
    White => "White", "white";
    BrightBlack => "BrightBlack", "bright-black";
    BrightRed => "BrightRed", "bright-red";
    BrightGreen => "BrightGreen", "bright-green";
    BrightYellow => "BrightYellow", "bright-yellow";
    BrightBlue => "BrightBlue", "bright-blue";
    BrightPurple => "BrightPurple", "bright-purple";
    BrightCyan => "BrightCyan", "bright-cyan";
    BrightWhite => "BrightWhite", "bright-white";
    CodeBackground => "CodeBackground", "code-background";
    CodeText => "CodeText", "code-text";
    CodeComment => "CodeComment", "code-comment";
    CodeKeyword => "CodeKeyword", "code-keyword";
    CodeString => "CodeString", "code-string";
    CodeNumber => "CodeNumber", "code-number";
    CodeFunction => "CodeFunction", "code-function";
    CodeOperator => "CodeOperator", "code-operator";
    CodePunctuation => "CodePunctuation", "code-punctuation";
    CodeVariable => "CodeVariable", "code-variable";
    CodeConstant => "CodeConstant", "code-constant";
    CodeType => "CodeType", "code-type";
}

static ROLES_BY_NAME: phf::Map<&'static str, ColorRole> = phf_map! {
    "Background" => ColorRole::Background,
    "BackgroundSecondary" => ColorRole::BackgroundSecondary,
    "Surface" => ColorRole::Surface,
    "SurfaceSecondary" => ColorRole::SurfaceSecondary,
    "TextPrimary" => ColorRole::TextPrimary,
    "TextSecondary" => ColorRole::TextSecondary,
    "TextMuted" => ColorRole::TextMuted,
    "TextInverted" => ColorRole::TextInverted,
    "Accent" => ColorRole::Accent,
    "AccentSecondary" => ColorRole::AccentSecondary,
    "Brand" => ColorRole::Brand,
    "Border" => ColorRole::Border,
    "BorderSubtle" => ColorRole::BorderSubtle,
    "BorderStrong" => ColorRole::BorderStrong,
    "Success.Background" => ColorRole::SuccessBackground,
    "Success.Border" => ColorRole::SuccessBorder,
    "Success.Text" => ColorRole::SuccessText,
    "Warning.Background" => ColorRole::WarningBackground,
    "Warning.Border" => ColorRole::WarningBorder,
    "Warning.Text" => ColorRole::WarningText,
    "Error.Background" => ColorRole::ErrorBackground,
    "Error.Border" => ColorRole::ErrorBorder,
    "Error.Text" => ColorRole::ErrorText,
    "Info.Background" => ColorRole::InfoBackground,
    "Info.Border" => ColorRole::InfoBorder,
    "Info.Text" => ColorRole::InfoText,
    "Black" => ColorRole::Black,
    "Red" => ColorRole::Red,
    "Green" => ColorRole::Green,
    "Yellow" => ColorRole::Yellow,
    "Blue" => ColorRole::Blue,
    "Purple" => ColorRole::Purple,
    "Cyan" => ColorRole::Cyan,
    "White" => ColorRole::White,
    "BrightBlack" => ColorRole::BrightBlack,
    "BrightRed" => ColorRole::BrightRed,
    "BrightGreen" => ColorRole::BrightGreen,
    "BrightYellow" => ColorRole::BrightYellow,
    "BrightBlue" => ColorRole::BrightBlue,
    "BrightPurple" => ColorRole::BrightPurple,
    "BrightCyan" => ColorRole::BrightCyan,
    "BrightWhite" => ColorRole::BrightWhite,
    "CodeBackground" => ColorRole::CodeBackground,
    "CodeText" => ColorRole::CodeText,
    "CodeComment" => ColorRole::CodeComment,
    "CodeKeyword" => ColorRole::CodeKeyword,
    "CodeString" => ColorRole::CodeString,
    "CodeNumber" => ColorRole::CodeNumber,
    "CodeFunction" => ColorRole::CodeFunction,
    "CodeOperator" => ColorRole::CodeOperator,
    "CodePunctuation" => ColorRole::CodePunctuation,
    "CodeVariable" => ColorRole::CodeVariable,
    "CodeConstant" => ColorRole::CodeConstant,
    "CodeType" => ColorRole::CodeType,
};

static ROLES_BY_OVERRIDE_KEY: phf::Map<&'static str, ColorRole> = phf_map! {
    "background" => ColorRole::Background,
    "background_secondary" => ColorRole::BackgroundSecondary,
    "surface" => ColorRole::Surface,
    "surface_secondary" => ColorRole::SurfaceSecondary,
    "text_primary" => ColorRole::TextPrimary,
    "text_secondary" => ColorRole::TextSecondary,
    "text_muted" => ColorRole::TextMuted,
    "text_inverted" => ColorRole::TextInverted,
    "accent" => ColorRole::Accent,
    "accent_secondary" => ColorRole::AccentSecondary,
    "brand" => ColorRole::Brand,
    "border" => ColorRole::Border,
    "border_subtle" => ColorRole::BorderSubtle,
    "border_strong" => ColorRole::BorderStrong,
    "black" => ColorRole::Black,
    "red" => ColorRole::Red,
    "green" => ColorRole::Green,
    "yellow" => ColorRole::Yellow,
    "blue" => ColorRole::Blue,
    "purple" => ColorRole::Purple,
    "cyan" => ColorRole::Cyan,
    "white" => ColorRole::White,
    "bright_black" => ColorRole::BrightBlack,
    "bright_red" => ColorRole::BrightRed,
    "bright_green" => ColorRole::BrightGreen,
    "bright_yellow" => ColorRole::BrightYellow,
    "bright_blue" => ColorRole::BrightBlue,
    "bright_purple" => ColorRole::BrightPurple,
    "bright_cyan" => ColorRole::BrightCyan,
    "bright_white" => ColorRole::BrightWhite,
    "code_background" => ColorRole::CodeBackground,
    "code_text" => ColorRole::CodeText,
    "code_comment" => ColorRole::CodeComment,
    "code_keyword" => ColorRole::CodeKeyword,
    "code_string" => ColorRole::CodeString,
    "code_number" => ColorRole::CodeNumber,
    "code_function" => ColorRole::CodeFunction,
    "code_operator" => ColorRole::CodeOperator,
    "code_punctuation" => ColorRole::CodePunctuation,
    "code_variable" => ColorRole::CodeVariable,
    "code_constant" => ColorRole::CodeConstant,
    "code_type" => ColorRole::CodeType,
};

/// Foreground roles the contrast fixer is allowed to rewrite.
const AUTO_FIXABLE: &[ColorRole] = &[
    ColorRole::TextPrimary,
    ColorRole::TextSecondary,
    ColorRole::TextMuted,
    ColorRole::TextInverted,
    ColorRole::Accent,
    ColorRole::AccentSecondary,
    ColorRole::Brand,
    ColorRole::Border,
    ColorRole::BorderSubtle,
    ColorRole::BorderStrong,
    ColorRole::CodeText,
    ColorRole::CodeComment,
    ColorRole::CodeKeyword,
    ColorRole::CodeString,
];

impl ColorRole {
    /// Looks up a role by its symbolic name (`"TextPrimary"`, `"Info.Text"`).
    pub fn from_name(name: &str) -> Option<ColorRole> {
        ROLES_BY_NAME.get(name).copied()
    }

    /// Looks up a role by its snake_case override key (`"code_type"`).
    pub fn from_override_key(key: &str) -> Option<ColorRole> {
        ROLES_BY_OVERRIDE_KEY.get(key).copied()
    }

    pub fn is_semantic(&self) -> bool {
        self.name().contains('.')
    }

    pub fn is_auto_fixable(&self) -> bool {
        AUTO_FIXABLE.contains(self)
    }
}

impl std::fmt::Display for ColorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
