//! Language registry: single source of truth for the languages the site serves.
//!
//! The registry is a `OnceLock` singleton, initialized on first access and
//! immutable afterwards. The UI serves three languages; only a subset of them
//! has a matching locale in the CMS (the rest always render static content).

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "ru", "kz")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Russian")
    pub name: &'static str,

    /// Native name of the language (e.g., "Русский", "Қазақша")
    pub native_name: &'static str,

    /// Locale code to send to the CMS, when the CMS holds content for this
    /// language. `None` means the language is presentation-only and always
    /// resolves to the embedded static dataset.
    pub cms_locale: Option<&'static str>,

    /// Whether this is the site's default language (exactly one should be true)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the site's default language configuration.
    ///
    /// # Panics
    /// Panics if zero or multiple default languages are defined (this
    /// indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// The languages the site is built for. Kazakh is the default presentation
/// language but has no CMS locale yet; English and Russian are CMS-backed.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            cms_locale: Some("en"),
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            cms_locale: Some("ru"),
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "kz",
            name: "Kazakh",
            native_name: "Қазақша",
            cms_locale: None,
            is_default: true,
            enabled: true,
        },
    ]
}
