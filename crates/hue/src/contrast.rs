//! WCAG 2.1 contrast ratio computation and compliance classification.
//!
//! Ratios range from 1:1 (identical luminance) to 21:1 (black on white) and
//! are independent of argument order.

use std::fmt;

use crate::color::Color;

/// Minimum ratio for AA normal text.
pub const MIN_AA: f64 = 4.5;

/// Minimum ratio for AA large text (18pt+, or 14pt+ bold).
pub const MIN_AA_LARGE: f64 = 3.0;

/// Minimum ratio for AAA normal text.
pub const MIN_AAA: f64 = 7.0;

/// Minimum ratio for AAA large text.
pub const MIN_AAA_LARGE: f64 = 4.5;

/// Minimum ratio for UI components and graphical objects.
pub const MIN_UI_COMPONENT: f64 = 3.0;

/// Contrast ratio between two relative luminance values.
pub fn ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two colors. Alpha is ignored.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    ratio(a.relative_luminance(), b.relative_luminance())
}

pub fn meets_aa(fg: Color, bg: Color, large_text: bool) -> bool {
    let min = if large_text { MIN_AA_LARGE } else { MIN_AA };
    contrast_ratio(fg, bg) >= min
}

pub fn meets_aaa(fg: Color, bg: Color, large_text: bool) -> bool {
    let min = if large_text { MIN_AAA_LARGE } else { MIN_AAA };
    contrast_ratio(fg, bg) >= min
}

pub fn meets_ui_component(fg: Color, bg: Color) -> bool {
    contrast_ratio(fg, bg) >= MIN_UI_COMPONENT
}

/// The highest WCAG level a ratio satisfies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WcagLevel {
    Fail,
    AaLarge,
    Aa,
    AaaLarge,
    Aaa,
}

impl WcagLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::AaaLarge => "AAA (large text only)",
            WcagLevel::Aa => "AA",
            WcagLevel::AaLarge => "AA (large text only)",
            WcagLevel::Fail => "Fail",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a ratio, checking AAA, AAA-large, AA, AA-large in that order.
///
/// AA normal and AAA large share the 4.5 threshold, so exactly 4.5 lands on
/// [`WcagLevel::AaaLarge`].
pub fn classify(ratio: f64) -> WcagLevel {
    if ratio >= MIN_AAA {
        WcagLevel::Aaa
    } else if ratio >= MIN_AAA_LARGE {
        WcagLevel::AaaLarge
    } else if ratio >= MIN_AA {
        WcagLevel::Aa
    } else if ratio >= MIN_AA_LARGE {
        WcagLevel::AaLarge
    } else {
        WcagLevel::Fail
    }
}

/// Classifies the contrast between two colors.
pub fn check(fg: Color, bg: Color) -> WcagLevel {
    classify(contrast_ratio(fg, bg))
}

/// Compliance target requested by a caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContrastLevel {
    #[default]
    Aa,
    Aaa,
}

impl ContrastLevel {
    pub fn required_ratio(&self) -> f64 {
        match self {
            ContrastLevel::Aa => MIN_AA,
            ContrastLevel::Aaa => MIN_AAA,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContrastLevel::Aa => "AA",
            ContrastLevel::Aaa => "AAA",
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
