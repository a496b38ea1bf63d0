//! Thread-safe theme registry with a current selection.
//!
//! A [`Registry`] is an ordinary value: construct one, share it (for
//! example behind an `Arc`), and drop it when done. Themes are kept sorted
//! by ID, which is also the order [`Registry::next_theme`] and
//! [`Registry::previous_theme`] cycle through.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hue::Color;

use crate::builtin::builtin_themes;
use crate::error::{Result, ThemeError};
use crate::role::ColorRole;
use crate::theme::Theme;

#[derive(Debug, Default)]
struct State {
    themes: BTreeMap<String, Arc<Theme>>,
    current: Option<String>,
}

impl State {
    fn current(&self) -> Option<&Arc<Theme>> {
        self.current.as_ref().and_then(|id| self.themes.get(id))
    }

    fn current_index(&self) -> usize {
        self.current
            .as_ref()
            .and_then(|id| self.themes.keys().position(|k| k == id))
            .unwrap_or(0)
    }

    fn select_index(&mut self, index: usize) {
        self.current = self.themes.keys().nth(index).cloned();
    }
}

/// A set of themes keyed by ID plus the currently selected one.
#[derive(Debug, Default)]
pub struct Registry {
    state: RwLock<State>,
}

impl Registry {
    /// Creates a registry holding `default` (selected) and `others`.
    pub fn new(default: Theme, others: impl IntoIterator<Item = Theme>) -> Self {
        let mut state = State {
            current: Some(default.id.clone()),
            ..Default::default()
        };
        state.themes.insert(default.id.clone(), Arc::new(default));
        for theme in others {
            state.themes.insert(theme.id.clone(), Arc::new(theme));
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// A registry of the bundled themes with `dracula` selected.
    pub fn with_builtin() -> Self {
        let registry = Self::default();
        registry.register(builtin_themes().iter().cloned());
        registry.set_theme_id("dracula");
        registry
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds themes, replacing any with the same ID.
    pub fn register(&self, themes: impl IntoIterator<Item = Theme>) {
        let mut state = self.write();
        for theme in themes {
            log::debug!("registering theme '{}'", theme.id);
            state.themes.insert(theme.id.clone(), Arc::new(theme));
        }
    }

    /// Removes themes by ID. If the current theme is removed, the first
    /// remaining theme (by ID) becomes current.
    pub fn unregister<'a>(&self, ids: impl IntoIterator<Item = &'a str>) {
        let mut state = self.write();
        for id in ids {
            state.themes.remove(id);
        }
        let current_gone = state
            .current
            .as_ref()
            .is_some_and(|id| !state.themes.contains_key(id));
        if current_gone {
            state.select_index(0);
            log::debug!("current theme removed, now {:?}", state.current);
        }
    }

    pub fn unregister_all(&self) {
        let mut state = self.write();
        state.themes.clear();
        state.current = None;
    }

    /// Selects a theme by ID. Returns `false` if no such theme is registered.
    pub fn set_theme_id(&self, id: &str) -> bool {
        let mut state = self.write();
        if !state.themes.contains_key(id) {
            return false;
        }
        state.current = Some(id.to_string());
        true
    }

    /// Like [`Registry::set_theme_id`], failing with [`ThemeError::UnknownTheme`].
    pub fn select(&self, id: &str) -> Result<()> {
        if self.set_theme_id(id) {
            Ok(())
        } else {
            Err(ThemeError::UnknownTheme(id.to_string()))
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<Theme>> {
        self.read().themes.get(id).cloned()
    }

    pub fn current(&self) -> Option<Arc<Theme>> {
        self.read().current().cloned()
    }

    /// All themes, sorted by ID.
    pub fn themes(&self) -> Vec<Arc<Theme>> {
        self.read().themes.values().cloned().collect()
    }

    pub fn theme_ids(&self) -> Vec<String> {
        self.read().themes.keys().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.read().themes.len()
    }

    /// Advances to the next theme by ID, wrapping at the end.
    pub fn next_theme(&self) {
        let mut state = self.write();
        if state.themes.is_empty() || state.current.is_none() {
            return;
        }
        let next = (state.current_index() + 1) % state.themes.len();
        state.select_index(next);
    }

    /// Steps back to the previous theme by ID, wrapping at the start.
    pub fn previous_theme(&self) {
        let mut state = self.write();
        if state.themes.is_empty() || state.current.is_none() {
            return;
        }
        let len = state.themes.len();
        let prev = (state.current_index() + len - 1) % len;
        state.select_index(prev);
    }

    /// ID of the current theme, or `""` when none is selected.
    pub fn current_id(&self) -> String {
        self.read().current.clone().unwrap_or_default()
    }

    pub fn current_display_name(&self) -> String {
        self.read()
            .current()
            .map(|t| t.display_name.clone())
            .unwrap_or_default()
    }

    pub fn current_is_dark(&self) -> bool {
        self.read().current().is_some_and(|t| t.is_dark)
    }

    /// A color of the current theme; empty when none is selected.
    pub fn current_color(&self, role: ColorRole) -> Color {
        self.read()
            .current()
            .map(|t| t.color(role))
            .unwrap_or(Color::EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: &str) -> Theme {
        Theme::new(id, id.to_uppercase())
    }

    #[test]
    fn test_new_selects_default() {
        let reg = Registry::new(named("b"), [named("a"), named("c")]);
        assert_eq!(reg.current_id(), "b");
        assert_eq!(reg.theme_ids(), ["a", "b", "c"]);
        assert_eq!(reg.count(), 3);
    }

    #[test]
    fn test_navigation_wraps() {
        let reg = Registry::new(named("c"), [named("a"), named("b")]);
        reg.next_theme();
        assert_eq!(reg.current_id(), "a");
        reg.previous_theme();
        assert_eq!(reg.current_id(), "c");
        reg.previous_theme();
        assert_eq!(reg.current_id(), "b");
    }

    #[test]
    fn test_unregister_current_falls_back() {
        let reg = Registry::new(named("b"), [named("a"), named("c")]);
        reg.unregister(["b"]);
        assert_eq!(reg.current_id(), "a");
        reg.unregister(["a", "c"]);
        assert_eq!(reg.current_id(), "");
        assert!(reg.current().is_none());
    }

    #[test]
    fn test_set_theme_id() {
        let reg = Registry::new(named("a"), [named("b")]);
        assert!(reg.set_theme_id("b"));
        assert!(!reg.set_theme_id("zzz"));
        assert_eq!(reg.current_id(), "b");
        assert!(matches!(reg.select("zzz"), Err(ThemeError::UnknownTheme(_))));
    }

    #[test]
    fn test_unregister_all() {
        let reg = Registry::new(named("a"), Vec::new());
        reg.unregister_all();
        assert_eq!(reg.count(), 0);
        reg.next_theme();
        assert_eq!(reg.current_id(), "");
        assert!(reg.current_color(ColorRole::Background).is_empty());
    }

    #[test]
    fn test_register_replaces() {
        let reg = Registry::new(named("a"), Vec::new());
        let mut replacement = named("a");
        replacement.display_name = "Alpha".into();
        reg.register([replacement]);
        assert_eq!(reg.count(), 1);
        assert_eq!(reg.current_display_name(), "Alpha");
    }

    #[test]
    fn test_builtin_registry() {
        let reg = Registry::with_builtin();
        assert_eq!(reg.current_id(), "dracula");
        assert!(reg.current_is_dark());
        assert_eq!(reg.current_color(ColorRole::Background).hex(), "#282a36");
        assert!(reg.get("nord").is_some());
    }
}
