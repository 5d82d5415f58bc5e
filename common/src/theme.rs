use std::fmt;

use tracing::debug;

use crate::config::ThemeConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    pub fn flipped(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    // anything other than the two stored values counts as no preference
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ThemePreference::Dark),
            "light" => Some(ThemePreference::Light),
            _ => None,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// everything the page needs to reflect a preference
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeView {
    pub dark: bool,
    pub body_class: String,
    pub icon: &'static str,
    pub aria_label: &'static str,
}

// key-value persistence for the preference
//
// implementations swallow their own failures; missing storage is just "no preference"
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    fn save(&mut self, key: &str, value: &str);
}

pub struct ThemeStore<S: PreferenceStore> {
    store: S,
    config: ThemeConfig,
    current: ThemePreference,
}

impl<S: PreferenceStore> ThemeStore<S> {
    // reads the stored preference once, falling back to what the system reports
    pub fn new(store: S, config: ThemeConfig, system_prefers_dark: bool) -> Self {
        let mut theme = ThemeStore {
            store,
            config,
            current: ThemePreference::Light,
        };
        theme.current = theme.initial_preference(system_prefers_dark);
        theme
    }

    pub fn initial_preference(&self, system_prefers_dark: bool) -> ThemePreference {
        let stored = self
            .store
            .load(&self.config.storage_key)
            .and_then(|v| ThemePreference::parse(&v));

        match stored {
            Some(pref) => pref,
            None => ThemePreference::from_dark(system_prefers_dark),
        }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn apply(&mut self, pref: ThemePreference) -> ThemeView {
        debug!("applying theme {pref}");

        self.current = pref;
        self.store.save(&self.config.storage_key, pref.as_str());
        self.view()
    }

    pub fn toggle(&mut self) -> ThemeView {
        self.apply(self.current.flipped())
    }

    pub fn view(&self) -> ThemeView {
        let dark = self.current.is_dark();

        ThemeView {
            dark,
            body_class: self.config.body_class.clone(),
            icon: if dark { "fas fa-sun" } else { "fas fa-moon" },
            aria_label: if dark {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            },
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Default)]
    struct MemoryStore {
        items: HashMap<String, String>,
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.items.get(key).cloned()
        }

        fn save(&mut self, key: &str, value: &str) {
            self.items.insert(key.to_owned(), value.to_owned());
        }
    }

    fn store_with(value: Option<&str>) -> MemoryStore {
        let mut store = MemoryStore::default();
        if let Some(value) = value {
            store.save("theme", value);
        }
        store
    }

    fn theme(value: Option<&str>, system_dark: bool) -> ThemeStore<MemoryStore> {
        ThemeStore::new(store_with(value), ThemeConfig::default(), system_dark)
    }

    #[test]
    fn stored_value_wins_over_system() {
        assert_eq!(theme(Some("dark"), false).current(), ThemePreference::Dark);
        assert_eq!(theme(Some("light"), true).current(), ThemePreference::Light);
    }

    #[test]
    fn no_preference_follows_system() {
        assert_eq!(theme(None, true).current(), ThemePreference::Dark);
        assert_eq!(theme(None, false).current(), ThemePreference::Light);
        assert_eq!(theme(Some("sepia"), true).current(), ThemePreference::Dark);
    }

    #[test]
    fn toggle_parity() {
        for n in 0..7 {
            let mut store = theme(Some("light"), false);
            for _ in 0..n {
                store.toggle();
            }

            let expected = if n % 2 == 1 { "dark" } else { "light" };
            assert_eq!(store.store().load("theme").as_deref(), Some(expected));
        }
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut store = theme(None, true);
        let before = store.current();

        store.toggle();
        store.toggle();

        assert_eq!(store.current(), before);
        assert_eq!(store.store().load("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn view_tracks_preference() {
        let mut store = theme(None, false);

        let view = store.apply(ThemePreference::Dark);
        assert!(view.dark);
        assert_eq!(view.body_class, "dark-mode");
        assert_eq!(view.icon, "fas fa-sun");
        assert_eq!(view.aria_label, "Switch to light mode");

        let view = store.toggle();
        assert!(!view.dark);
        assert_eq!(view.icon, "fas fa-moon");
        assert_eq!(view.aria_label, "Switch to dark mode");
    }
}
