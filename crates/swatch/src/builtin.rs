//! Bundled themes built from their published palettes.

use hue::Color;
use once_cell::sync::Lazy;

use crate::builder::{ANSI_ROLES, ThemeBuilder};
use crate::theme::Theme;

static BUILTIN: Lazy<Vec<Theme>> =
    Lazy::new(|| vec![dracula(), gruvbox_dark(), nord(), solarized_light()]);

/// Every bundled theme, sorted by ID.
pub fn builtin_themes() -> &'static [Theme] {
    &BUILTIN
}

/// Looks up a bundled theme by ID.
pub fn builtin(id: &str) -> Option<&'static Theme> {
    BUILTIN.iter().find(|t| t.id == id)
}

fn with_ansi(mut builder: ThemeBuilder, ansi: [&str; 16]) -> ThemeBuilder {
    for (role, hex) in ANSI_ROLES.into_iter().zip(ansi) {
        builder = builder.with_color(role, Color::from_hex(hex));
    }
    builder
}

fn dracula() -> Theme {
    let builder = ThemeBuilder::new("dracula", "Dracula")
        .with_description("A dark theme with vivid purple and pink accents")
        .with_author("Zeno Rocha")
        .with_license("MIT")
        .with_source("https://draculatheme.com")
        .with_background(Color::from_hex("#282a36"))
        .with_surface(Color::from_hex("#44475a"))
        .with_text_primary(Color::from_hex("#f8f8f2"))
        .with_text_muted(Color::from_hex("#6272a4"))
        .with_accent(Color::from_hex("#bd93f9"))
        .with_code_comment(Color::from_hex("#6272a4"));
    with_ansi(
        builder,
        [
            "#21222c", "#ff5555", "#50fa7b", "#f1fa8c", "#bd93f9", "#ff79c6", "#8be9fd", "#f8f8f2",
            "#6272a4", "#ff6e6e", "#69ff94", "#ffffa5", "#d6acff", "#ff92df", "#a4ffff", "#ffffff",
        ],
    )
    .build()
}

fn nord() -> Theme {
    let builder = ThemeBuilder::new("nord", "Nord")
        .with_description("An arctic, north-bluish color palette")
        .with_author("Arctic Ice Studio")
        .with_license("MIT")
        .with_source("https://www.nordtheme.com")
        .with_background(Color::from_hex("#2e3440"))
        .with_surface(Color::from_hex("#3b4252"))
        .with_text_primary(Color::from_hex("#eceff4"))
        .with_accent(Color::from_hex("#88c0d0"));
    with_ansi(
        builder,
        [
            "#3b4252", "#bf616a", "#a3be8c", "#ebcb8b", "#81a1c1", "#b48ead", "#88c0d0", "#e5e9f0",
            "#4c566a", "#bf616a", "#a3be8c", "#ebcb8b", "#81a1c1", "#b48ead", "#8fbcbb", "#eceff4",
        ],
    )
    .build()
}

fn gruvbox_dark() -> Theme {
    let builder = ThemeBuilder::new("gruvbox-dark", "Gruvbox Dark")
        .with_description("Retro groove color scheme, dark variant")
        .with_author("Pavel Pertsev")
        .with_license("MIT")
        .with_source("https://github.com/morhetz/gruvbox")
        .with_background(Color::from_hex("#282828"))
        .with_surface(Color::from_hex("#3c3836"))
        .with_text_primary(Color::from_hex("#ebdbb2"))
        .with_accent(Color::from_hex("#fabd2f"));
    with_ansi(
        builder,
        [
            "#282828", "#cc241d", "#98971a", "#d79921", "#458588", "#b16286", "#689d6a", "#a89984",
            "#928374", "#fb4934", "#b8bb26", "#fabd2f", "#83a598", "#d3869b", "#8ec07c", "#ebdbb2",
        ],
    )
    .build()
}

fn solarized_light() -> Theme {
    let builder = ThemeBuilder::new("solarized-light", "Solarized Light")
        .with_description("Precision colors for machines and people, light variant")
        .with_author("Ethan Schoonover")
        .with_license("MIT")
        .with_source("https://ethanschoonover.com/solarized/")
        .with_background(Color::from_hex("#fdf6e3"))
        .with_surface(Color::from_hex("#eee8d5"))
        .with_text_primary(Color::from_hex("#657b83"))
        .with_accent(Color::from_hex("#268bd2"));
    with_ansi(
        builder,
        [
            "#073642", "#dc322f", "#859900", "#b58900", "#268bd2", "#d33682", "#2aa198", "#eee8d5",
            "#002b36", "#cb4b16", "#586e75", "#657b83", "#839496", "#6c71c4", "#93a1a1", "#fdf6e3",
        ],
    )
    .build()
}
