//! Content service for the EduCenter university site.
//!
//! Serves multilingual news articles from a headless CMS with an embedded
//! static fallback, localized UI string tables, and environment-driven
//! database selection.

pub mod cms;
pub mod config;
pub mod db;
pub mod fallback;
pub mod i18n;
pub mod prefs;
pub mod server;
