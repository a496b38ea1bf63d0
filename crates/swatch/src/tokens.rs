//! W3C Design Tokens (DTCG) export.
//!
//! Produces a nested JSON document where every color is a token object with
//! `$value`, `$type` and optionally `$description`:
//!
//! ```json
//! {
//!   "$description": "Design tokens for Dracula theme",
//!   "color": {
//!     "$type": "color",
//!     "background": {
//!       "primary": { "$value": "#282a36", "$type": "color", "$description": "..." }
//!     }
//!   },
//!   "meta": { "id": { "$value": "dracula", "$type": "string" } }
//! }
//! ```
//!
//! Unset colors are left out of the document rather than exported as empty
//! strings, and groups that end up empty are dropped.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value, json};

use hue::Color;

use crate::error::Result;
use crate::theme::{SemanticColor, Theme};

/// Options for [`generate_design_tokens`].
#[derive(Clone, Debug, PartialEq)]
pub struct TokenOptions {
    /// Add a `$description` to each color token.
    pub include_descriptions: bool,
    /// Indentation unit. Empty means two spaces.
    pub indent: String,
}

impl Default for TokenOptions {
    fn default() -> Self {
        Self {
            include_descriptions: true,
            indent: "  ".to_string(),
        }
    }
}

impl TokenOptions {
    fn indent(&self) -> &str {
        if self.indent.is_empty() { "  " } else { &self.indent }
    }
}

/// Serializes `value`, pretty-printed with `indent` or compact when `indent` is empty.
pub(crate) fn to_json(value: &Value, indent: &str) -> Result<String> {
    if indent.is_empty() {
        return Ok(serde_json::to_string(value)?);
    }
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

struct Group<'a> {
    map: Map<String, Value>,
    options: &'a TokenOptions,
}

impl<'a> Group<'a> {
    fn new(options: &'a TokenOptions) -> Self {
        Self {
            map: Map::new(),
            options,
        }
    }

    fn token(mut self, key: &str, color: Color, description: &str) -> Self {
        if color.is_empty() {
            return self;
        }
        let mut token = Map::new();
        token.insert("$value".into(), Value::String(color.hex()));
        token.insert("$type".into(), Value::String("color".into()));
        if self.options.include_descriptions && !description.is_empty() {
            token.insert("$description".into(), Value::String(description.into()));
        }
        self.map.insert(key.into(), Value::Object(token));
        self
    }

    fn semantic(self, key: &str, color: &SemanticColor, label: &str) -> Self {
        let group = Group::new(self.options)
            .token("background", color.background, &format!("{label} background color"))
            .token("border", color.border, &format!("{label} border color"))
            .token("text", color.text, &format!("{label} text color"));
        self.group(key, group)
    }

    fn group(mut self, key: &str, group: Group<'_>) -> Self {
        if !group.map.is_empty() {
            self.map.insert(key.into(), Value::Object(group.map));
        }
        self
    }
}

fn token_tree(t: &Theme, options: &TokenOptions) -> Value {
    let g = || Group::new(options);

    let background = g()
        .token("primary", t.background, "Primary background color")
        .token("secondary", t.background_secondary, "Secondary background color");
    let surface = g()
        .token("primary", t.surface, "Primary surface color for cards/modals")
        .token("secondary", t.surface_secondary, "Secondary surface color");
    let text = g()
        .token("primary", t.text_primary, "Primary text color")
        .token("secondary", t.text_secondary, "Secondary text color")
        .token("muted", t.text_muted, "Muted text color for placeholders")
        .token("inverted", t.text_inverted, "Inverted text for colored backgrounds");
    let accent = g()
        .token("primary", t.accent, "Primary accent color")
        .token("secondary", t.accent_secondary, "Secondary accent color");
    let border = g()
        .token("default", t.border, "Default border color")
        .token("subtle", t.border_subtle, "Subtle border color")
        .token("strong", t.border_strong, "Strong/emphasized border color");
    let semantic = g()
        .semantic("success", &t.success, "Success")
        .semantic("warning", &t.warning, "Warning")
        .semantic("error", &t.error, "Error")
        .semantic("info", &t.info, "Info");
    let ansi = g()
        .token("black", t.black, "ANSI black")
        .token("red", t.red, "ANSI red")
        .token("green", t.green, "ANSI green")
        .token("yellow", t.yellow, "ANSI yellow")
        .token("blue", t.blue, "ANSI blue")
        .token("purple", t.purple, "ANSI purple/magenta")
        .token("cyan", t.cyan, "ANSI cyan")
        .token("white", t.white, "ANSI white")
        .token("bright-black", t.bright_black, "Bright ANSI black")
        .token("bright-red", t.bright_red, "Bright ANSI red")
        .token("bright-green", t.bright_green, "Bright ANSI green")
        .token("bright-yellow", t.bright_yellow, "Bright ANSI yellow")
        .token("bright-blue", t.bright_blue, "Bright ANSI blue")
        .token("bright-purple", t.bright_purple, "Bright ANSI purple")
        .token("bright-cyan", t.bright_cyan, "Bright ANSI cyan")
        .token("bright-white", t.bright_white, "Bright ANSI white");
    let code = g()
        .token("background", t.code_background, "Code block background")
        .token("text", t.code_text, "Default code text")
        .token("comment", t.code_comment, "Code comment color")
        .token("keyword", t.code_keyword, "Code keyword color")
        .token("string", t.code_string, "Code string literal color")
        .token("number", t.code_number, "Code number literal color")
        .token("function", t.code_function, "Code function name color")
        .token("operator", t.code_operator, "Code operator color")
        .token("punctuation", t.code_punctuation, "Code punctuation color")
        .token("variable", t.code_variable, "Code variable color")
        .token("constant", t.code_constant, "Code constant color")
        .token("type", t.code_type, "Code type name color");

    let mut color = g();
    color.map.insert("$type".into(), Value::String("color".into()));
    let color = color
        .group("background", background)
        .group("surface", surface)
        .group("text", text)
        .group("accent", accent)
        .token("brand", t.brand, "Brand/logo color")
        .group("border", border)
        .group("semantic", semantic)
        .group("ansi", ansi)
        .group("code", code);

    json!({
        "$description": format!("Design tokens for {} theme", t.display_name),
        "color": color.map,
        "meta": {
            "id": { "$value": t.id, "$type": "string" },
            "name": { "$value": t.display_name, "$type": "string" },
            "description": { "$value": t.description, "$type": "string" },
            "author": { "$value": t.author, "$type": "string" },
            "license": { "$value": t.license, "$type": "string" },
            "source": { "$value": t.source, "$type": "string" },
            "isDark": { "$value": t.is_dark, "$type": "boolean" },
        },
    })
}

/// Exports one theme as a DTCG document.
pub fn generate_design_tokens(theme: &Theme, options: &TokenOptions) -> Result<String> {
    to_json(&token_tree(theme, options), options.indent())
}

/// Exports several themes into one document keyed by theme ID.
pub fn generate_all_design_tokens(themes: &[Theme], options: &TokenOptions) -> Result<String> {
    let mut all = Map::new();
    all.insert(
        "$description".into(),
        Value::String("Design tokens collection".into()),
    );
    for theme in themes {
        all.insert(theme.id.clone(), token_tree(theme, options));
    }
    to_json(&Value::Object(all), options.indent())
}
