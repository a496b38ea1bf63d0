//! Text renderers: CSS custom properties, SCSS variables, flat JSON and
//! syntax-highlighting stylesheets.
//!
//! Variables are emitted for every [`ColorRole`] in [`ColorRole::ALL`]
//! order and named `--{prefix}-{css_name}`. Unset slots render as
//! `transparent` so the variable set is identical for every theme.

use std::fmt::Write;

use hue::Color;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::role::ColorRole;
use crate::theme::Theme;
use crate::tokens::to_json;

const DEFAULT_PREFIX: &str = "theme";

/// Notation used for color values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorSpace {
    /// `#rrggbb`, or `#rrggbbaa` when the color carries alpha.
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `oklch(l c h)`
    Oklch,
}

impl ColorSpace {
    pub fn format(&self, color: Color) -> String {
        if color.is_empty() {
            return "transparent".to_string();
        }
        match self {
            ColorSpace::Hex => color.hex(),
            ColorSpace::Rgb => color.css_rgb(),
            ColorSpace::Hsl => color.css_hsl(),
            ColorSpace::Oklch => color.css_oklch(),
        }
    }
}

/// Options for [`generate_css`], [`generate_scss`] and [`generate_json`].
#[derive(Clone, Debug, PartialEq)]
pub struct CssOptions {
    /// Variable name prefix. Empty means `"theme"`.
    pub prefix: String,
    /// Wrap variables in `:root { }`.
    pub include_root: bool,
    /// Wrap variables in `[data-theme="id"] { }`. Takes precedence over `include_root`.
    pub use_data_attribute: bool,
    pub color_space: ColorSpace,
    pub minify: bool,
    /// Emit name, author and license comments. Ignored when minifying.
    pub include_metadata: bool,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            include_root: true,
            use_data_attribute: false,
            color_space: ColorSpace::Hex,
            minify: false,
            include_metadata: true,
        }
    }
}

impl CssOptions {
    fn prefix(&self) -> &str {
        if self.prefix.is_empty() {
            DEFAULT_PREFIX
        } else {
            &self.prefix
        }
    }
}

fn variables(
    theme: &Theme,
    space: ColorSpace,
) -> impl Iterator<Item = (&'static str, String)> + '_ {
    ColorRole::ALL
        .iter()
        .map(move |role| (role.css_name(), space.format(theme.color(*role))))
}

/// Renders a theme as CSS custom properties.
pub fn generate_css(theme: &Theme, options: &CssOptions) -> String {
    let prefix = options.prefix();
    let mut out = String::new();

    if options.include_metadata && !options.minify {
        let _ = writeln!(out, "/* Theme: {} ({}) */", theme.display_name, theme.id);
        if !theme.author.is_empty() {
            let _ = writeln!(out, "/* Author: {} */", theme.author);
        }
        if !theme.license.is_empty() {
            let _ = writeln!(out, "/* License: {} */", theme.license);
        }
        out.push('\n');
    }

    let selector = if options.use_data_attribute {
        Some(format!("[data-theme={:?}]", theme.id))
    } else if options.include_root {
        Some(":root".to_string())
    } else {
        None
    };

    if let Some(selector) = &selector {
        out.push_str(selector);
        out.push_str(if options.minify { "{" } else { " {\n" });
    }

    for (name, value) in variables(theme, options.color_space) {
        if options.minify {
            let _ = write!(out, "--{prefix}-{name}:{value};");
        } else {
            let _ = writeln!(out, "    --{prefix}-{name}: {value};");
        }
    }

    if selector.is_some() {
        out.push_str(if options.minify { "}" } else { "}\n" });
    }

    out
}

/// Renders several themes into one stylesheet, each under its own
/// `[data-theme="id"]` selector.
pub fn generate_all_themes_css(themes: &[Theme], options: &CssOptions) -> String {
    let options = CssOptions {
        use_data_attribute: true,
        include_root: false,
        ..options.clone()
    };

    let mut out = String::new();
    for (i, theme) in themes.iter().enumerate() {
        if i > 0 && !options.minify {
            out.push('\n');
        }
        out.push_str(&generate_css(theme, &options));
    }
    out
}

/// Renders a theme as SCSS variables (`$prefix-name: value;`).
pub fn generate_scss(theme: &Theme, options: &CssOptions) -> String {
    let prefix = options.prefix();
    let mut out = String::new();

    if options.include_metadata && !options.minify {
        let _ = writeln!(out, "// Theme: {} ({})", theme.display_name, theme.id);
        if !theme.author.is_empty() {
            let _ = writeln!(out, "// Author: {}", theme.author);
        }
        out.push('\n');
    }

    for (name, value) in variables(theme, options.color_space) {
        if options.minify {
            let _ = write!(out, "${prefix}-{name}:{value};");
        } else {
            let _ = writeln!(out, "${prefix}-{name}: {value};");
        }
    }

    out
}

/// Renders a flat JSON object of CSS name to color value.
///
/// Pretty-printed with four-space indentation unless `minify` is set.
pub fn generate_json(theme: &Theme, options: &CssOptions) -> Result<String> {
    let map: Map<String, Value> = variables(theme, options.color_space)
        .map(|(name, value)| (name.to_string(), Value::String(value)))
        .collect();
    let indent = if options.minify { "" } else { "    " };
    to_json(&Value::Object(map), indent)
}

/// Target syntax-highlighting library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyntaxFormat {
    /// Prism.js `.token.*` classes.
    #[default]
    Prism,
    /// Highlight.js `.hljs-*` classes.
    HighlightJs,
    /// Chroma `.chroma .*` classes.
    Chroma,
}

const PRISM_RULES: &[(&str, ColorRole)] = &[
    (".token.comment, .token.prolog, .token.doctype, .token.cdata", ColorRole::CodeComment),
    (".token.punctuation", ColorRole::CodePunctuation),
    (
        ".token.property, .token.tag, .token.boolean, .token.number, .token.constant, .token.symbol",
        ColorRole::CodeNumber,
    ),
    (
        ".token.selector, .token.attr-name, .token.string, .token.char, .token.builtin",
        ColorRole::CodeString,
    ),
    (".token.operator, .token.entity, .token.url", ColorRole::CodeOperator),
    (".token.atrule, .token.attr-value, .token.keyword", ColorRole::CodeKeyword),
    (".token.function, .token.class-name", ColorRole::CodeFunction),
    (".token.regex, .token.important, .token.variable", ColorRole::CodeVariable),
];

const HIGHLIGHT_JS_RULES: &[(&str, ColorRole)] = &[
    (".hljs-comment, .hljs-quote", ColorRole::CodeComment),
    (".hljs-keyword, .hljs-selector-tag", ColorRole::CodeKeyword),
    (".hljs-string, .hljs-doctag", ColorRole::CodeString),
    (".hljs-number, .hljs-literal", ColorRole::CodeNumber),
    (".hljs-title, .hljs-section, .hljs-selector-id", ColorRole::CodeFunction),
    (".hljs-variable, .hljs-template-variable", ColorRole::CodeVariable),
    (".hljs-type, .hljs-class .hljs-title", ColorRole::CodeType),
    (".hljs-symbol, .hljs-bullet", ColorRole::CodeConstant),
    (".hljs-attribute", ColorRole::CodeOperator),
];

const CHROMA_RULES: &[(&str, ColorRole)] = &[
    (".chroma .c, .chroma .cm, .chroma .c1, .chroma .cs", ColorRole::CodeComment),
    (
        ".chroma .k, .chroma .kc, .chroma .kd, .chroma .kn, .chroma .kp, .chroma .kr",
        ColorRole::CodeKeyword,
    ),
    (
        ".chroma .s, .chroma .sa, .chroma .sb, .chroma .sc, .chroma .dl, .chroma .sd, \
         .chroma .s2, .chroma .se, .chroma .sh, .chroma .si, .chroma .sx, .chroma .sr, \
         .chroma .s1, .chroma .ss",
        ColorRole::CodeString,
    ),
    (
        ".chroma .m, .chroma .mb, .chroma .mf, .chroma .mh, .chroma .mi, .chroma .il, .chroma .mo",
        ColorRole::CodeNumber,
    ),
    (".chroma .nf, .chroma .fm", ColorRole::CodeFunction),
    (
        ".chroma .nv, .chroma .vc, .chroma .vg, .chroma .vi, .chroma .vm",
        ColorRole::CodeVariable,
    ),
    (
        ".chroma .nc, .chroma .no, .chroma .nd, .chroma .ni, .chroma .ne, .chroma .nl, \
         .chroma .nn, .chroma .nt",
        ColorRole::CodeType,
    ),
    (".chroma .o, .chroma .ow", ColorRole::CodeOperator),
    (".chroma .p", ColorRole::CodePunctuation),
];

impl SyntaxFormat {
    fn rules(&self) -> &'static [(&'static str, ColorRole)] {
        match self {
            SyntaxFormat::Prism => PRISM_RULES,
            SyntaxFormat::HighlightJs => HIGHLIGHT_JS_RULES,
            SyntaxFormat::Chroma => CHROMA_RULES,
        }
    }
}

/// Options for [`generate_syntax_css`].
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxOptions {
    pub format: SyntaxFormat,
    /// Prefix of the referenced variables. Empty means `"theme"`.
    pub prefix: String,
    /// Reference `var(--prefix-code-*)` instead of inlining hex values.
    pub use_variables: bool,
    pub minify: bool,
}

impl Default for SyntaxOptions {
    fn default() -> Self {
        Self {
            format: SyntaxFormat::Prism,
            prefix: DEFAULT_PREFIX.to_string(),
            use_variables: true,
            minify: false,
        }
    }
}

/// Renders token-class rules for a syntax highlighter.
pub fn generate_syntax_css(theme: &Theme, options: &SyntaxOptions) -> String {
    let prefix = if options.prefix.is_empty() {
        DEFAULT_PREFIX
    } else {
        &options.prefix
    };
    let (nl, indent) = if options.minify { ("", "") } else { ("\n", "    ") };

    let mut out = String::new();
    for (selector, role) in options.format.rules() {
        let value = if options.use_variables {
            Color::css_var(prefix, role.css_name())
        } else {
            ColorSpace::Hex.format(theme.color(*role))
        };
        let _ = write!(out, "{selector} {{{nl}{indent}color: {value};{nl}}}{nl}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ThemeBuilder;

    fn sample() -> Theme {
        ThemeBuilder::new("ink", "Ink")
            .with_author("A. Writer")
            .with_license("MIT")
            .with_background(Color::from_hex("#101010"))
            .with_text_primary(Color::from_hex("#f0f0f0"))
            .with_accent(Color::from_hex("#3b82f6"))
            .build()
    }

    // ==================== CSS TESTS ====================

    #[test]
    fn test_css_metadata_and_root() {
        let css = generate_css(&sample(), &CssOptions::default());
        assert!(css.starts_with(
            "/* Theme: Ink (ink) */\n/* Author: A. Writer */\n/* License: MIT */\n\n:root {\n"
        ));
        assert!(css.contains("    --theme-background: #101010;\n"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn test_css_variable_count() {
        let css = generate_css(&sample(), &CssOptions::default());
        assert_eq!(css.matches("--theme-").count(), ColorRole::ALL.len());
    }

    #[test]
    fn test_css_empty_renders_transparent() {
        let css = generate_css(&sample(), &CssOptions::default());
        // no ANSI colors were given
        assert!(css.contains("--theme-red: transparent;"));
    }

    #[test]
    fn test_css_data_attribute_minified() {
        let options = CssOptions {
            prefix: "x".into(),
            use_data_attribute: true,
            minify: true,
            ..Default::default()
        };
        let css = generate_css(&sample(), &options);
        assert!(css.starts_with("[data-theme=\"ink\"]{--x-background:#101010;"));
        assert!(css.ends_with(";}"));
        assert!(!css.contains('\n'));
    }

    #[test]
    fn test_css_empty_prefix_defaults() {
        let options = CssOptions {
            prefix: String::new(),
            include_metadata: false,
            include_root: false,
            ..Default::default()
        };
        let css = generate_css(&sample(), &options);
        assert!(css.starts_with("    --theme-background: #101010;\n"));
    }

    #[test]
    fn test_css_color_spaces() {
        let mut theme = Theme::new("c", "C");
        theme.background = Color::rgb(255, 0, 0);
        let render = |space| {
            let options = CssOptions {
                color_space: space,
                include_metadata: false,
                ..Default::default()
            };
            generate_css(&theme, &options)
        };
        assert!(render(ColorSpace::Rgb).contains("--theme-background: rgb(255, 0, 0);"));
        assert!(render(ColorSpace::Hsl).contains("--theme-background: hsl(0.0, 100.0%, 50.0%);"));
        assert!(render(ColorSpace::Oklch).contains("--theme-background: oklch("));
    }

    #[test]
    fn test_all_themes_css() {
        let a = sample();
        let mut b = sample();
        b.id = "ink-2".into();
        let css = generate_all_themes_css(&[a, b], &CssOptions::default());
        assert!(css.contains("[data-theme=\"ink\"] {\n"));
        assert!(css.contains("}\n\n/* Theme: Ink (ink-2) */"));
        assert!(!css.contains(":root"));
    }

    // ==================== SCSS / JSON TESTS ====================

    #[test]
    fn test_scss() {
        let scss = generate_scss(&sample(), &CssOptions::default());
        assert!(scss.starts_with("// Theme: Ink (ink)\n// Author: A. Writer\n\n"));
        assert!(scss.contains("$theme-text-primary: #f0f0f0;\n"));
        assert!(!scss.contains("License"));
    }

    #[test]
    fn test_json_is_valid() {
        let json = generate_json(&sample(), &CssOptions::default()).unwrap();
        assert!(json.starts_with("{\n    \"background\": \"#101010\",\n"));
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["accent"], "#3b82f6");
        assert_eq!(parsed.as_object().unwrap().len(), ColorRole::ALL.len());
    }

    #[test]
    fn test_json_minified() {
        let options = CssOptions {
            minify: true,
            ..Default::default()
        };
        let json = generate_json(&sample(), &options).unwrap();
        assert!(json.starts_with("{\"background\":\"#101010\","));
    }

    // ==================== SYNTAX TESTS ====================

    #[test]
    fn test_syntax_rule_counts() {
        let theme = sample();
        for (format, count) in [
            (SyntaxFormat::Prism, 8),
            (SyntaxFormat::HighlightJs, 9),
            (SyntaxFormat::Chroma, 9),
        ] {
            let options = SyntaxOptions {
                format,
                ..Default::default()
            };
            let css = generate_syntax_css(&theme, &options);
            assert_eq!(css.matches("color: ").count(), count, "{format:?}");
        }
    }

    #[test]
    fn test_syntax_inline_colors() {
        let options = SyntaxOptions {
            format: SyntaxFormat::HighlightJs,
            use_variables: false,
            minify: true,
            ..Default::default()
        };
        let css = generate_syntax_css(&sample(), &options);
        assert!(css.starts_with(".hljs-comment, .hljs-quote {color: #f0f0f07f;}"));
    }
}
