use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::GradebookError;
use crate::storage::{Storage, DARK_KEY, LANGUAGE_KEY};

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Az,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Az => "az",
            Language::En => "en",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "az" => Some(Language::Az),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

/// User-facing settings persisted between launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub dark: bool,
}

impl Preferences {
    /// Read preferences, falling back to defaults for anything missing or
    /// unreadable.
    pub fn load(storage: &dyn Storage) -> Self {
        let language = read(storage, LANGUAGE_KEY)
            .and_then(|tag| {
                let parsed = Language::from_tag(&tag);
                if parsed.is_none() {
                    warn!("Ignoring unknown language tag: {}", tag);
                }
                parsed
            })
            .unwrap_or_default();

        let dark = read(storage, DARK_KEY)
            .and_then(|flag| flag.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self { language, dark }
    }
}

fn read(storage: &dyn Storage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to read preference {}: {}", key, e);
            None
        }
    }
}

/// Preferences plus the storage they are written back to.
pub struct PreferenceStore {
    storage: Arc<dyn Storage>,
    current: Preferences,
}

impl PreferenceStore {
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let current = Preferences::load(storage.as_ref());
        info!(
            "Loaded preferences: language={}, dark={}",
            current.language.as_str(),
            current.dark
        );
        Self { storage, current }
    }

    pub fn current(&self) -> Preferences {
        self.current
    }

    /// Update the language. The in-memory value changes even if the write fails.
    pub fn set_language(&mut self, language: Language) -> Result<(), GradebookError> {
        self.current.language = language;
        self.storage.set(LANGUAGE_KEY, language.as_str())
    }

    /// Update the theme flag. The in-memory value changes even if the write fails.
    pub fn set_dark(&mut self, dark: bool) -> Result<(), GradebookError> {
        self.current.dark = dark;
        self.storage.set(DARK_KEY, if dark { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_defaults_when_empty() {
        let prefs = Preferences::load(&MemoryStorage::new());
        assert_eq!(prefs.language, Language::Az);
        assert!(!prefs.dark);
    }

    #[test]
    fn test_garbage_falls_back_to_defaults() {
        let storage = MemoryStorage::new();
        storage.set(LANGUAGE_KEY, "fr").unwrap();
        storage.set(DARK_KEY, "yes please").unwrap();

        assert_eq!(Preferences::load(&storage), Preferences::default());
    }

    #[test]
    fn test_changes_are_persisted() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let mut store = PreferenceStore::load(storage.clone());

        store.set_language(Language::En).unwrap();
        store.set_dark(true).unwrap();

        let reloaded = Preferences::load(storage.as_ref());
        assert_eq!(reloaded.language, Language::En);
        assert!(reloaded.dark);
        assert_eq!(store.current(), reloaded);
    }
}
