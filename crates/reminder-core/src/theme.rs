use tracing::{debug, error};

use crate::config::THEME_STORAGE_KEY;
use crate::storage::KeyValueStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Accepts the bare value or its JSON string form (`"dark"` quoted).
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let raw = raw
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(raw);
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }

    /// Stored choice first, then the device preference, then dark.
    pub fn resolve<S: KeyValueStorage + ?Sized>(storage: &S, device_prefers_dark: Option<bool>) -> Self {
        if let Some(stored) = storage
            .get_item(THEME_STORAGE_KEY)
            .as_deref()
            .and_then(Self::parse)
        {
            debug!(theme = stored.storage_value(), "using stored theme");
            return stored;
        }

        let theme = match device_prefers_dark {
            Some(true) => Self::Dark,
            Some(false) => Self::Light,
            None => Self::default(),
        };
        debug!(theme = theme.storage_value(), ?device_prefers_dark, "using device theme");
        theme
    }

    pub fn save<S: KeyValueStorage + ?Sized>(self, storage: &S) {
        if let Err(err) = storage.set_item(THEME_STORAGE_KEY, self.storage_value()) {
            error!(error = %format!("{err:#}"), "failed persisting theme");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;
    use crate::config::THEME_STORAGE_KEY;
    use crate::storage::{KeyValueStorage, MemoryStorage};

    #[test]
    fn defaults_to_dark_without_any_preference() {
        assert_eq!(Theme::resolve(&MemoryStorage::new(), None), Theme::Dark);
    }

    #[test]
    fn device_preference_used_when_nothing_stored() {
        let storage = MemoryStorage::new();
        assert_eq!(Theme::resolve(&storage, Some(false)), Theme::Light);
        assert_eq!(Theme::resolve(&storage, Some(true)), Theme::Dark);
    }

    #[test]
    fn stored_value_beats_device_preference() {
        let storage = MemoryStorage::new();
        storage
            .set_item(THEME_STORAGE_KEY, "light")
            .expect("set theme");

        assert_eq!(Theme::resolve(&storage, Some(true)), Theme::Light);
    }

    #[test]
    fn unknown_stored_value_is_ignored() {
        let storage = MemoryStorage::new();
        storage
            .set_item(THEME_STORAGE_KEY, "sepia")
            .expect("set theme");

        assert_eq!(Theme::resolve(&storage, Some(false)), Theme::Light);
    }

    #[test]
    fn reads_json_quoted_value_under_shared_key() {
        let storage = MemoryStorage::new();
        storage
            .set_item("mantine-color-scheme", "\"light\"")
            .expect("set theme");

        assert_eq!(THEME_STORAGE_KEY, "mantine-color-scheme");
        assert_eq!(Theme::resolve(&storage, Some(true)), Theme::Light);
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("\"dark"), None);
    }

    #[test]
    fn toggle_twice_round_trips() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }
}
