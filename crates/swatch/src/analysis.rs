//! Accessibility statistics for themes.
//!
//! Scores are computed over the same [`STANDARD_PAIRS`] the validator uses,
//! against the AA threshold, so a theme with zero AA issues scores 100%
//! whenever all fourteen pairs are populated.

use std::cmp::Ordering;
use std::collections::HashSet;

use hue::Color;
use hue::contrast::{MIN_AA, contrast_ratio};
use serde::Serialize;

use crate::pairs::STANDARD_PAIRS;
use crate::theme::Theme;

/// Color usage and accessibility numbers for one theme.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ThemeStats {
    /// Number of non-empty color slots.
    pub color_count: usize,
    /// Number of distinct non-empty hex values.
    pub unique_colors: usize,
    /// Sum of measured pair ratios divided by the total pair count.
    pub contrast_score: f64,
    /// Pairs meeting AA (4.5:1).
    pub accessible_pairs: usize,
    pub total_pairs: usize,
    /// `accessible_pairs / total_pairs`, as a percentage.
    pub accessibility_percent: f64,
    pub is_dark: bool,
    /// Mean luminance of the primary, secondary and muted text colors that are set.
    pub average_text_luminance: f64,
    pub background_luminance: f64,
}

/// Side-by-side statistics for two themes. Differences are `b - a`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeComparison {
    pub theme_a: String,
    pub theme_b: String,
    pub stats_a: ThemeStats,
    pub stats_b: ThemeStats,
    pub contrast_diff: f64,
    pub access_diff: f64,
    pub unique_diff: isize,
    pub same_dark_mode: bool,
    /// ID of the theme with the higher accessibility percentage; ties go to `a`.
    pub more_accessible: String,
}

pub fn analyze_theme(theme: &Theme) -> ThemeStats {
    let set: Vec<Color> = theme
        .colors()
        .map(|(_, c)| c)
        .filter(|c| !c.is_empty())
        .collect();
    let unique: HashSet<Color> = set.iter().copied().collect();

    let text = [theme.text_primary, theme.text_secondary, theme.text_muted];
    let text_lums: Vec<f64> = text
        .iter()
        .filter(|c| !c.is_empty())
        .map(Color::relative_luminance)
        .collect();
    let average_text_luminance = if text_lums.is_empty() {
        0.0
    } else {
        text_lums.iter().sum::<f64>() / text_lums.len() as f64
    };

    let mut total_ratio = 0.0;
    let mut accessible_pairs = 0;
    for pair in &STANDARD_PAIRS {
        let (fg, bg) = pair.resolve(theme);
        if fg.is_empty() || bg.is_empty() {
            continue;
        }
        let ratio = contrast_ratio(fg, bg);
        total_ratio += ratio;
        if ratio >= MIN_AA {
            accessible_pairs += 1;
        }
    }
    let total_pairs = STANDARD_PAIRS.len();

    ThemeStats {
        color_count: set.len(),
        unique_colors: unique.len(),
        contrast_score: total_ratio / total_pairs as f64,
        accessible_pairs,
        total_pairs,
        accessibility_percent: accessible_pairs as f64 / total_pairs as f64 * 100.0,
        is_dark: theme.is_dark,
        average_text_luminance,
        background_luminance: if theme.background.is_empty() {
            0.0
        } else {
            theme.background.relative_luminance()
        },
    }
}

pub fn compare_themes(a: &Theme, b: &Theme) -> ThemeComparison {
    let stats_a = analyze_theme(a);
    let stats_b = analyze_theme(b);

    let more_accessible = if stats_a.accessibility_percent >= stats_b.accessibility_percent {
        a.id.clone()
    } else {
        b.id.clone()
    };

    ThemeComparison {
        theme_a: a.id.clone(),
        theme_b: b.id.clone(),
        contrast_diff: stats_b.contrast_score - stats_a.contrast_score,
        access_diff: stats_b.accessibility_percent - stats_a.accessibility_percent,
        unique_diff: stats_b.unique_colors as isize - stats_a.unique_colors as isize,
        same_dark_mode: stats_a.is_dark == stats_b.is_dark,
        more_accessible,
        stats_a,
        stats_b,
    }
}

pub fn analyze_all(themes: &[Theme]) -> Vec<ThemeStats> {
    themes.iter().map(analyze_theme).collect()
}

/// Themes whose accessibility percentage is at least `min_percent`.
pub fn filter_accessible(themes: &[Theme], min_percent: f64) -> Vec<Theme> {
    themes
        .iter()
        .filter(|t| analyze_theme(t).accessibility_percent >= min_percent)
        .cloned()
        .collect()
}

/// Themes ordered by accessibility percentage, highest first. Ties keep input order.
pub fn sort_by_accessibility(themes: &[Theme]) -> Vec<Theme> {
    let mut scored: Vec<(f64, &Theme)> = themes
        .iter()
        .map(|t| (analyze_theme(t).accessibility_percent, t))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.into_iter().map(|(_, t)| t.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ThemeBuilder;
    use crate::validation::validate_contrast;
    use hue::ContrastLevel;

    fn theme(id: &str, bg: &str, fg: &str) -> Theme {
        ThemeBuilder::new(id, id)
            .with_background(Color::from_hex(bg))
            .with_text_primary(Color::from_hex(fg))
            .with_accent(Color::from_hex("#3b82f6"))
            .build()
    }

    #[test]
    fn test_counts() {
        let stats = analyze_theme(&theme("a", "#000000", "#ffffff"));
        assert_eq!(stats.total_pairs, 14);
        assert!(stats.color_count > 20);
        assert!(stats.unique_colors <= stats.color_count);
        assert!(stats.is_dark);
        assert!(stats.background_luminance.abs() < 1e-9);
        assert!((stats.average_text_luminance - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_percent_agrees_with_validator() {
        let t = theme("a", "#1a1a1a", "#444444");
        let stats = analyze_theme(&t);
        let measured = STANDARD_PAIRS
            .iter()
            .filter(|p| {
                let (fg, bg) = p.resolve(&t);
                !fg.is_empty() && !bg.is_empty()
            })
            .count();
        let issues = validate_contrast(&t, ContrastLevel::Aa).len();
        assert_eq!(stats.accessible_pairs, measured - issues);
    }

    #[test]
    fn test_empty_theme_scores_zero() {
        let stats = analyze_theme(&Theme::new("e", "E"));
        assert_eq!(stats.color_count, 0);
        assert_eq!(stats.accessibility_percent, 0.0);
        assert_eq!(stats.contrast_score, 0.0);
    }

    #[test]
    fn test_compare_picks_more_accessible() {
        let good = theme("good", "#000000", "#ffffff");
        let bad = theme("bad", "#1a1a1a", "#444444");
        assert_eq!(compare_themes(&good, &bad).more_accessible, "good");
        assert_eq!(compare_themes(&bad, &good).more_accessible, "good");
        let cmp = compare_themes(&bad, &good);
        assert!(cmp.access_diff > 0.0);
        assert!(cmp.same_dark_mode);
    }

    #[test]
    fn test_filter_and_sort() {
        let good = theme("good", "#000000", "#ffffff");
        let bad = theme("bad", "#1a1a1a", "#444444");
        let themes = vec![bad.clone(), good.clone()];

        let sorted = sort_by_accessibility(&themes);
        assert_eq!(sorted[0].id, "good");
        assert_eq!(sorted[1].id, "bad");

        let good_pct = analyze_theme(&good).accessibility_percent;
        let kept = filter_accessible(&themes, good_pct);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "good");
        assert_eq!(analyze_all(&themes).len(), 2);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = analyze_theme(&theme("a", "#000000", "#ffffff"));
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_pairs"], 14);
        assert_eq!(json["is_dark"], true);
    }
}
