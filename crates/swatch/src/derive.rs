//! Fills unset theme slots from the colors that are set.
//!
//! Derivation is a single ordered pass. A step runs only when its target
//! slot is empty and its source slot is not, so explicitly set colors are
//! never overwritten and later steps can read what earlier steps produced.
//!
//! | Target                 | Dark theme             | Light theme            |
//! |------------------------|------------------------|------------------------|
//! | `background_secondary` | background +3% L       | background -3% L       |
//! | `surface`              | background +5% L       | background -2% L       |
//! | `surface_secondary`    | surface +3% L          | surface -2% L          |
//! | `code_background`      | background -2% L       | background -5% L       |
//!
//! Text, border, accent, semantic and syntax slots derive the same way in
//! both modes (alpha variants, hue rotation, ANSI lookups).

use hue::Color;

use crate::theme::{SemanticColor, Theme};

const SUCCESS_FALLBACK: Color = Color::rgb(0x22, 0xc5, 0x5e);
const WARNING_FALLBACK: Color = Color::rgb(0xea, 0xb3, 0x08);
const ERROR_FALLBACK: Color = Color::rgb(0xef, 0x44, 0x44);
const INFO_FALLBACK: Color = Color::rgb(0x3b, 0x82, 0xf6);

/// Returns a copy of `partial` with every derivable empty slot filled.
///
/// When `is_dark` is `None` a theme already marked dark stays dark. Otherwise
/// the mode is inferred from the background's luminance, and without a
/// background the partial theme's own flag is kept.
pub fn derive(partial: &Theme, is_dark: Option<bool>) -> Theme {
    let mut t = partial.clone();

    t.is_dark = match is_dark {
        Some(dark) => dark,
        None if !partial.is_dark && !t.background.is_empty() => t.background.is_dark(),
        None => partial.is_dark,
    };
    let dark = t.is_dark;

    fill(&mut t.background_secondary, t.background, |bg| {
        if dark { bg.lighten(0.03) } else { bg.darken(0.03) }
    });
    fill(&mut t.surface, t.background, |bg| {
        if dark { bg.lighten(0.05) } else { bg.darken(0.02) }
    });
    fill(&mut t.surface_secondary, t.surface, |s| {
        if dark { s.lighten(0.03) } else { s.darken(0.02) }
    });

    fill(&mut t.text_secondary, t.text_primary, |c| c.with_alpha(0.7));
    fill(&mut t.text_muted, t.text_primary, |c| c.with_alpha(0.5));
    fill(&mut t.text_inverted, t.background, |bg| bg);

    fill(&mut t.accent_secondary, t.accent, |c| {
        let (h, s, l) = c.hsl_values();
        Color::hsl(h + 30.0, s, l)
    });
    fill(&mut t.brand, t.accent, |c| c);

    fill(&mut t.border, t.text_primary, |c| c.with_alpha(0.2));
    fill(&mut t.border_subtle, t.border, |c| c.with_alpha(0.1));
    fill(&mut t.border_strong, t.border, |c| c.with_alpha(0.4));

    t.success = semantic(t.success, t.green, SUCCESS_FALLBACK);
    t.warning = semantic(t.warning, t.yellow, WARNING_FALLBACK);
    t.error = semantic(t.error, t.red, ERROR_FALLBACK);
    t.info = semantic(t.info, t.blue, INFO_FALLBACK);

    fill(&mut t.code_background, t.background, |bg| {
        if dark { bg.darken(0.02) } else { bg.darken(0.05) }
    });
    fill(&mut t.code_text, t.text_primary, |c| c);
    fill(&mut t.code_comment, t.text_muted, |c| c);
    fill(&mut t.code_keyword, t.purple, |c| c);
    fill(&mut t.code_string, t.green, |c| c);
    fill(&mut t.code_number, t.yellow, |c| c);
    fill(&mut t.code_function, t.blue, |c| c);
    fill(&mut t.code_operator, t.cyan, |c| c);
    fill(&mut t.code_punctuation, t.text_secondary, |c| c);
    fill(&mut t.code_variable, t.text_primary, |c| c);
    fill(&mut t.code_constant, t.yellow, |c| c);
    fill(&mut t.code_type, t.cyan, |c| c);

    log::trace!(
        "derived theme '{}' (dark={}): {} of {} slots set",
        t.id,
        t.is_dark,
        t.colors().filter(|(_, c)| !c.is_empty()).count(),
        crate::role::ColorRole::ALL.len()
    );

    t
}

fn fill(target: &mut Color, source: Color, f: impl FnOnce(Color) -> Color) {
    if target.is_empty() && !source.is_empty() {
        *target = f(source);
    }
}

// A group is left alone once its text color is set.
fn semantic(existing: SemanticColor, base: Color, fallback: Color) -> SemanticColor {
    if !existing.text.is_empty() {
        return existing;
    }
    let c = if base.is_empty() { fallback } else { base };
    SemanticColor {
        background: c.with_alpha(0.1),
        border: c.with_alpha(0.3),
        text: c,
    }
}
