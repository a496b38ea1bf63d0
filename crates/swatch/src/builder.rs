//! Fluent construction of themes.
//!
//! [`ThemeBuilder`] accumulates metadata and explicitly set colors, then
//! [`ThemeBuilder::build`] hands the sparse theme to [`derive`] and returns
//! the resolved result. [`generate_from_palette`] and [`derive_theme`] are
//! shortcuts for the two common starting points: a minimal palette and an
//! existing theme with a few overrides.

use hue::Color;

use crate::derive::derive;
use crate::role::ColorRole;
use crate::theme::{SemanticColor, Theme};

/// Builder for [`Theme`].
///
/// # Examples
///
/// ```
/// use hue::Color;
/// use swatch::ThemeBuilder;
///
/// let theme = ThemeBuilder::new("midnight", "Midnight")
///     .with_background(Color::from_hex("#0b0e14"))
///     .with_text_primary(Color::from_hex("#e6e1cf"))
///     .with_accent(Color::from_hex("#ffb454"))
///     .build();
///
/// assert!(theme.is_dark);
/// assert!(!theme.surface.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct ThemeBuilder {
    theme: Theme,
    is_dark: Option<bool>,
}

macro_rules! color_setters {
    ($($method:ident => $role:ident),+ $(,)?) => {
        $(
            pub fn $method(mut self, color: Color) -> Self {
                self.theme.set_color(ColorRole::$role, color);
                self
            }
        )+
    };
}

impl ThemeBuilder {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            theme: Theme::new(id, display_name),
            is_dark: None,
        }
    }

    /// Starts from an existing theme's metadata and colors.
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            theme: theme.clone(),
            is_dark: Some(theme.is_dark),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.theme.description = description.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.theme.author = author.into();
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.theme.license = license.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.theme.source = source.into();
        self
    }

    /// Pins the dark flag. Without this, it is inferred from the background.
    pub fn with_is_dark(mut self, is_dark: bool) -> Self {
        self.is_dark = Some(is_dark);
        self
    }

    pub fn with_color(mut self, role: ColorRole, color: Color) -> Self {
        self.theme.set_color(role, color);
        self
    }

    pub fn with_success(mut self, color: SemanticColor) -> Self {
        self.theme.success = color;
        self
    }

    pub fn with_warning(mut self, color: SemanticColor) -> Self {
        self.theme.warning = color;
        self
    }

    pub fn with_error(mut self, color: SemanticColor) -> Self {
        self.theme.error = color;
        self
    }

    pub fn with_info(mut self, color: SemanticColor) -> Self {
        self.theme.info = color;
        self
    }

    color_setters! {
        with_background => Background,
        with_background_secondary => BackgroundSecondary,
        with_surface => Surface,
        with_surface_secondary => SurfaceSecondary,
        with_text_primary => TextPrimary,
        with_text_secondary => TextSecondary,
        with_text_muted => TextMuted,
        with_text_inverted => TextInverted,
        with_accent => Accent,
        with_accent_secondary => AccentSecondary,
        with_brand => Brand,
        with_border => Border,
        with_border_subtle => BorderSubtle,
        with_border_strong => BorderStrong,
        with_black => Black,
        with_red => Red,
        with_green => Green,
        with_yellow => Yellow,
        with_blue => Blue,
        with_purple => Purple,
        with_cyan => Cyan,
        with_white => White,
        with_bright_black => BrightBlack,
        with_bright_red => BrightRed,
        with_bright_green => BrightGreen,
        with_bright_yellow => BrightYellow,
        with_bright_blue => BrightBlue,
        with_bright_purple => BrightPurple,
        with_bright_cyan => BrightCyan,
        with_bright_white => BrightWhite,
        with_code_background => CodeBackground,
        with_code_text => CodeText,
        with_code_comment => CodeComment,
        with_code_keyword => CodeKeyword,
        with_code_string => CodeString,
        with_code_number => CodeNumber,
        with_code_function => CodeFunction,
        with_code_operator => CodeOperator,
        with_code_punctuation => CodePunctuation,
        with_code_variable => CodeVariable,
        with_code_constant => CodeConstant,
        with_code_type => CodeType,
    }

    /// Derives every missing color and returns the finished theme.
    pub fn build(&self) -> Theme {
        derive(&self.theme, self.is_dark)
    }
}

/// A minimal set of colors from which a full theme can be generated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    /// ANSI colors in terminal order: black, red, green, yellow, blue,
    /// purple, cyan, white, then the eight bright variants. Empty entries
    /// are left unset.
    pub ansi: [Color; 16],
}

pub(crate) const ANSI_ROLES: [ColorRole; 16] = [
    ColorRole::Black,
    ColorRole::Red,
    ColorRole::Green,
    ColorRole::Yellow,
    ColorRole::Blue,
    ColorRole::Purple,
    ColorRole::Cyan,
    ColorRole::White,
    ColorRole::BrightBlack,
    ColorRole::BrightRed,
    ColorRole::BrightGreen,
    ColorRole::BrightYellow,
    ColorRole::BrightBlue,
    ColorRole::BrightPurple,
    ColorRole::BrightCyan,
    ColorRole::BrightWhite,
];

impl Palette {
    pub fn new(background: Color, foreground: Color, accent: Color) -> Self {
        Self {
            background,
            foreground,
            accent,
            ansi: [Color::EMPTY; 16],
        }
    }

    /// Sets the ANSI colors from hex strings; invalid entries stay empty.
    pub fn with_ansi_hex(mut self, colors: [&str; 16]) -> Self {
        for (slot, hex) in self.ansi.iter_mut().zip(colors) {
            *slot = Color::from_hex(hex);
        }
        self
    }
}

/// Generates a complete theme from a minimal palette.
pub fn generate_from_palette(
    id: impl Into<String>,
    display_name: impl Into<String>,
    palette: &Palette,
) -> Theme {
    let mut builder = ThemeBuilder::new(id, display_name)
        .with_background(palette.background)
        .with_text_primary(palette.foreground)
        .with_accent(palette.accent);

    for (role, color) in ANSI_ROLES.iter().zip(palette.ansi) {
        if !color.is_empty() {
            builder = builder.with_color(*role, color);
        }
    }

    builder.build()
}

/// Creates a new theme from `base` with some colors replaced.
///
/// Overrides are keyed by snake_case slot name (`"accent"`,
/// `"code_keyword"`); semantic groups cannot be overridden and unknown keys
/// are skipped.
pub fn derive_theme(
    base: &Theme,
    id: impl Into<String>,
    display_name: impl Into<String>,
    overrides: &[(&str, Color)],
) -> Theme {
    let mut builder = ThemeBuilder::from_theme(base);
    builder.theme.id = id.into();
    builder.theme.display_name = display_name.into();

    for (key, color) in overrides {
        match ColorRole::from_override_key(key) {
            Some(role) => builder.theme.set_color(role, *color),
            None => log::warn!("ignoring unknown color override '{key}'"),
        }
    }

    builder.build()
}
