//! Persisted UI language preference
//!
//! The preferred language is the only state that survives between visits.
//! It sits behind [`PreferenceStore`] so the controller never touches the
//! filesystem directly.

use crate::config::APP_ID;
use crate::error::{PreferenceError, PreferenceResult};
use crate::i18n::Lang;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Read and write the preferred UI language
pub trait PreferenceStore {
    /// Stored language, `es` when nothing usable is stored
    fn get(&self) -> Lang;

    /// Persist `lang` as the preferred language
    fn set(&mut self, lang: Lang) -> PreferenceResult<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Preferences {
    preferred_language: Lang,
}

/// Preference store backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    /// Store at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<config_dir>/talks-catalog/preferences.json`
    pub fn in_config_dir() -> PreferenceResult<Self> {
        dirs::config_dir()
            .map(|p| Self::new(p.join(APP_ID).join("preferences.json")))
            .ok_or(PreferenceError::DirectoryError)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self) -> Lang {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Lang::default(),
        };

        match serde_json::from_str::<Preferences>(&content) {
            Ok(prefs) => prefs.preferred_language,
            Err(e) => {
                log::warn!("Ignoring unreadable preferences at {}: {}", self.path.display(), e);
                Lang::default()
            }
        }
    }

    fn set(&mut self, lang: Lang) -> PreferenceResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PreferenceError::WriteError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(&Preferences {
            preferred_language: lang,
        })?;

        std::fs::write(&self.path, content).map_err(|e| PreferenceError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        log::debug!("Preferred language '{}' saved to {}", lang, self.path.display());
        Ok(())
    }
}

/// In-memory preference store
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    stored: Option<Lang>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(lang: Lang) -> Self {
        Self { stored: Some(lang) }
    }

    /// Value written by the last `set`, if any
    pub fn stored(&self) -> Option<Lang> {
        self.stored
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self) -> Lang {
        self.stored.unwrap_or_default()
    }

    fn set(&mut self, lang: Lang) -> PreferenceResult<()> {
        self.stored = Some(lang);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_defaults_to_spanish() {
        let dir = TempDir::new().unwrap();
        let store = JsonPreferenceStore::new(dir.path().join("preferences.json"));
        assert_eq!(store.get(), Lang::Es);
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let mut store = JsonPreferenceStore::new(&path);

        store.set(Lang::En).unwrap();
        assert_eq!(store.get(), Lang::En);
        assert!(std::fs::read_to_string(&path).unwrap().contains("\"en\""));

        let reopened = JsonPreferenceStore::new(&path);
        assert_eq!(reopened.get(), Lang::En);
    }

    #[test]
    fn test_corrupt_file_defaults_to_spanish() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"preferred_language": "fr"}"#).unwrap();
        assert_eq!(JsonPreferenceStore::new(&path).get(), Lang::Es);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryPreferenceStore::new();
        assert_eq!(store.get(), Lang::Es);
        assert_eq!(store.stored(), None);
        store.set(Lang::En).unwrap();
        assert_eq!(store.get(), Lang::En);
        assert_eq!(store.stored(), Some(Lang::En));
    }
}
