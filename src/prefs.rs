//! User preferences: language and accessibility mode.
//!
//! The browser front end keeps these in local storage; on the service side
//! they are an explicit value loaded at startup and passed down to whatever
//! renders content. Mutation goes through setters that persist to disk as a
//! side effect, so there is no ambient global state to reason about.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::i18n::Language;

/// The preference values themselves. Serialized as a small JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Preferred presentation language
    pub language: Language,

    /// Whether accessibility mode (larger text, higher contrast) is on
    pub accessibility_mode: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            language: Language::site_default(),
            accessibility_mode: false,
        }
    }
}

/// File-backed preference store.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    current: UserPreferences,
}

impl PreferenceStore {
    /// Load preferences from `path`, falling back to defaults when the file
    /// does not exist yet. A file that exists but cannot be read or parsed is
    /// an error; silently discarding a user's saved preferences is worse than
    /// failing startup.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let current = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences from {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Malformed preferences file {}", path.display()))?
        } else {
            UserPreferences::default()
        };

        Ok(Self { path, current })
    }

    /// The current preference values.
    pub fn current(&self) -> UserPreferences {
        self.current
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Change the preferred language. Persists only when the value actually
    /// changes.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        if self.current.language == language {
            return Ok(());
        }
        self.current.language = language;
        info!(language = language.code(), "preferred language changed");
        self.persist()
    }

    /// Toggle accessibility mode. Persists only when the value actually
    /// changes.
    pub fn set_accessibility_mode(&mut self, enabled: bool) -> Result<()> {
        if self.current.accessibility_mode == enabled {
            return Ok(());
        }
        self.current.accessibility_mode = enabled;
        info!(enabled, "accessibility mode changed");
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create preferences directory {}", parent.display())
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(&self.current)
            .context("Failed to serialize preferences")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write preferences to {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> PreferenceStore {
        let path = temp_dir.path().join("preferences.json");
        PreferenceStore::load(path).expect("Should load fresh store")
    }

    // ==================== Default Tests ====================

    #[test]
    fn test_fresh_store_has_defaults() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = store_in(&temp_dir);

        let prefs = store.current();
        assert_eq!(prefs.language, Language::KAZAKH);
        assert!(!prefs.accessibility_mode);
    }

    #[test]
    fn test_fresh_store_does_not_create_file() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = store_in(&temp_dir);

        // Nothing written until a value changes
        assert!(!store.path().exists());
    }

    // ==================== Setter Tests ====================

    #[test]
    fn test_set_language_persists() {
        let temp_dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&temp_dir);

        store
            .set_language(Language::RUSSIAN)
            .expect("Should persist");

        assert_eq!(store.current().language, Language::RUSSIAN);
        assert!(store.path().exists());

        // Reload from disk
        let reloaded = PreferenceStore::load(store.path()).expect("Should reload");
        assert_eq!(reloaded.current().language, Language::RUSSIAN);
    }

    #[test]
    fn test_set_accessibility_mode_persists() {
        let temp_dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&temp_dir);

        store.set_accessibility_mode(true).expect("Should persist");

        let reloaded = PreferenceStore::load(store.path()).expect("Should reload");
        assert!(reloaded.current().accessibility_mode);
    }

    #[test]
    fn test_setting_same_value_does_not_write() {
        let temp_dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&temp_dir);

        // Language is already the default
        store
            .set_language(Language::site_default())
            .expect("Should be a no-op");
        assert!(!store.path().exists());
    }

    #[test]
    fn test_both_preferences_survive_roundtrip() {
        let temp_dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&temp_dir);

        store.set_language(Language::ENGLISH).expect("set language");
        store.set_accessibility_mode(true).expect("set mode");

        let reloaded = PreferenceStore::load(store.path()).expect("reload");
        assert_eq!(
            reloaded.current(),
            UserPreferences {
                language: Language::ENGLISH,
                accessibility_mode: true,
            }
        );
    }

    #[test]
    fn test_persist_creates_missing_parent_directory() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("nested").join("dir").join("prefs.json");
        let mut store = PreferenceStore::load(path).expect("load");

        store.set_accessibility_mode(true).expect("Should persist");
        assert!(store.path().exists());
    }

    // ==================== Failure Tests ====================

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("preferences.json");
        std::fs::write(&path, "{ not valid json").expect("write");

        let result = PreferenceStore::load(path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Malformed preferences file"));
    }

    #[test]
    fn test_unknown_language_in_file_is_an_error() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("preferences.json");
        std::fs::write(
            &path,
            r#"{ "language": "de", "accessibility_mode": false }"#,
        )
        .expect("write");

        assert!(PreferenceStore::load(path).is_err());
    }

    // ==================== Document Shape Tests ====================

    #[test]
    fn test_on_disk_document_uses_language_code() {
        let temp_dir = TempDir::new().expect("temp dir");
        let mut store = store_in(&temp_dir);
        store.set_language(Language::ENGLISH).expect("set");

        let raw = std::fs::read_to_string(store.path()).expect("read");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("parse");
        assert_eq!(value["language"], "en");
        assert_eq!(value["accessibility_mode"], false);
    }
}
