//! Internationalization (i18n) module for multi-language support.
//!
//! All language-related logic lives here: the registry of supported
//! languages, the validated `Language` type, and the localized UI string
//! tables consumed by the serving layer.
//!
//! The site presents three languages (en, ru, kz) but the CMS is localized
//! only to en and ru; Kazakh content always comes from the embedded static
//! tables. `LanguageConfig::cms_locale` captures that split.

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{strings_for, PageStrings, ENGLISH_STRINGS, KAZAKH_STRINGS, RUSSIAN_STRINGS};
