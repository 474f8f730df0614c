//! Supported locale table
//!
//! Maps the locale codes the site knows about onto the smaller set of
//! culture codes that actually carry translations.

use serde::{Deserialize, Serialize};

/// One row of the locale table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
    pub locale: String,
    pub culture: String,
}

impl LocaleEntry {
    pub fn new(locale: impl Into<String>, culture: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            culture: culture.into(),
        }
    }
}

/// Built-in table: (locale code, culture code), in priority order
const DEFAULT_LOCALES: &[(&str, &str)] = &[
    ("en", "en"),
    ("en-US", "en"),
    ("en-GB", "en"),
    ("fr", "fr"),
    ("fr-FR", "fr"),
    ("de", "de"),
    ("de-DE", "de"),
    ("es", "es"),
    ("es-ES", "es"),
    ("es-419", "es"),
    ("it", "it"),
    ("pt", "pt"),
    ("pt-BR", "pt"),
    ("nl", "nl"),
    ("pl", "pl"),
    ("ru", "ru"),
    ("uk", "uk"),
    ("tr", "tr"),
    ("ja", "ja"),
    ("ko", "ko"),
    ("zh-Hans", "zh"),
    ("zh-CN", "zh"),
];

/// Ordered locale → culture table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable {
    entries: Vec<LocaleEntry>,
}

impl LocaleTable {
    pub fn new(entries: Vec<LocaleEntry>) -> Self {
        Self { entries }
    }

    /// Build a table from `(locale, culture)` pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(locale, culture)| LocaleEntry::new(locale, culture))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Culture code for a locale, if the locale is supported
    pub fn culture_of(&self, locale: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.locale == locale)
            .map(|e| e.culture.as_str())
    }

    /// Distinct culture codes in first-appearance order
    pub fn cultures(&self) -> Vec<&str> {
        let mut cultures: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !cultures.contains(&entry.culture.as_str()) {
                cultures.push(&entry.culture);
            }
        }
        cultures
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_LOCALES.iter().copied())
    }
}
