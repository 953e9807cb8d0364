//! Translation catalogs and the locale-bound formatter handle.
//!
//! Catalogs are flat `key -> string` JSON files, one per locale, loaded once
//! at startup. Formatter acquisition fails for locales without a catalog;
//! `translate` itself is total and falls back to the key.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

pub type Catalog = HashMap<String, String>;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to read locale catalogs: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid locale catalog {name}: {message}")]
    Parse { name: String, message: String },

    #[error("no translation catalog for locale '{0}'")]
    FormatterUnavailable(String),
}

pub type I18nResult<T> = Result<T, I18nError>;

/// Process-wide translation store. Cheap to clone per worker.
#[derive(Clone, Debug)]
pub struct I18n {
    catalogs: HashMap<String, Catalog>,
    default_locale: String,
}

impl I18n {
    pub fn new(catalogs: HashMap<String, Catalog>, default_locale: impl Into<String>) -> Self {
        Self {
            catalogs,
            default_locale: default_locale.into(),
        }
    }

    /// Loads every `<locale>.json` file from the given directory. Other
    /// files are ignored.
    pub fn load(dir: impl AsRef<Path>, default_locale: impl Into<String>) -> I18nResult<Self> {
        let mut catalogs = HashMap::new();

        for entry in std::fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let raw = std::fs::read_to_string(&path)?;
            let catalog: Catalog =
                serde_json::from_str(&raw).map_err(|e| I18nError::Parse {
                    name: path.display().to_string(),
                    message: e.to_string(),
                })?;

            catalogs.insert(locale.to_string(), catalog);
        }

        Ok(Self::new(catalogs, default_locale))
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Returns a formatter bound to the given locale. A regional tag such as
    /// `en-US` falls back to its primary subtag when no exact catalog
    /// exists.
    pub fn formatter<'a>(&'a self, locale: &'a str) -> I18nResult<Formatter<'a>> {
        let resolved = if self.catalogs.contains_key(locale) {
            Some(locale)
        } else {
            locale
                .split('-')
                .next()
                .filter(|primary| self.catalogs.contains_key(*primary))
        };

        let resolved =
            resolved.ok_or_else(|| I18nError::FormatterUnavailable(locale.to_string()))?;

        Ok(Formatter {
            locale: resolved,
            messages: &self.catalogs[resolved],
        })
    }
}

/// Locale-bound handle mapping translation keys to user-facing strings.
#[derive(Clone, Copy, Debug)]
pub struct Formatter<'a> {
    locale: &'a str,
    messages: &'a Catalog,
}

impl Formatter<'_> {
    pub fn locale(&self) -> &str {
        self.locale
    }

    /// Translates a key, falling back to the key itself when the catalog
    /// has no entry for it.
    pub fn translate(&self, key: &str) -> String {
        match self.messages.get(key) {
            Some(message) => message.clone(),
            None => {
                log::warn!("Missing translation key '{key}' for locale '{}'", self.locale);
                key.to_string()
            }
        }
    }
}
