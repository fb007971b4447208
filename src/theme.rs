use leptos::prelude::*;
use std::str::FromStr;

use crate::storage::{keys, KeyValueStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

/// Stored preference wins; otherwise fall back to the OS color scheme.
/// A corrupt stored value counts as absent.
pub fn initial_theme(store: &dyn KeyValueStore, prefers_dark: bool) -> Theme {
    store
        .get(keys::THEME)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

/// OS-level `prefers-color-scheme: dark`, read once at initialization.
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

/// Apply the theme by toggling the `dark` class on `<html>`; CSS does the rest.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn stored_preference_wins_over_os_preference() {
        let store = MemoryStore::default();
        store.set(keys::THEME, "light");
        assert_eq!(initial_theme(&store, true), Theme::Light);
    }

    #[test]
    fn os_preference_applies_when_nothing_is_stored() {
        let store = MemoryStore::default();
        assert_eq!(initial_theme(&store, true), Theme::Dark);
        assert_eq!(initial_theme(&store, false), Theme::Light);
    }

    #[test]
    fn corrupt_stored_value_falls_back_to_os_preference() {
        let store = MemoryStore::default();
        store.set(keys::THEME, "sepia");
        assert_eq!(initial_theme(&store, true), Theme::Dark);
    }

    #[test]
    fn double_toggle_restores_the_persisted_value() {
        let store = MemoryStore::default();
        store.set(keys::THEME, Theme::Dark.as_str());

        let mut theme = initial_theme(&store, false);
        theme = theme.toggle();
        store.set(keys::THEME, theme.as_str());
        theme = theme.toggle();
        store.set(keys::THEME, theme.as_str());

        assert_eq!(store.get(keys::THEME).as_deref(), Some("dark"));
    }
}
