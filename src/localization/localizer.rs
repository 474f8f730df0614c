//! Localization lookup
//!
//! The host owns the real translation store; the exporter only needs
//! "translate this key into that culture".

use ahash::AHashMap;

/// Lookup of a display-name key in one culture
///
/// Implementations must always return something: a missing translation
/// falls back inside the localizer, never surfaces as an error.
pub trait Localizer {
    fn localize(&self, key: &str, culture: &str) -> String;
}

impl<F> Localizer for F
where
    F: Fn(&str, &str) -> String,
{
    fn localize(&self, key: &str, culture: &str) -> String {
        self(key, culture)
    }
}

/// Localizer backed by per-culture dictionaries
///
/// Unknown cultures and keys fall back to the key itself.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLocalizer {
    cultures: AHashMap<String, AHashMap<String, String>>,
}

impl DictionaryLocalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tables(cultures: AHashMap<String, AHashMap<String, String>>) -> Self {
        Self { cultures }
    }

    /// Add or replace a translation
    pub fn insert(
        &mut self,
        culture: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.cultures
            .entry(culture.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn culture_count(&self) -> usize {
        self.cultures.len()
    }
}

impl Localizer for DictionaryLocalizer {
    fn localize(&self, key: &str, culture: &str) -> String {
        self.cultures
            .get(culture)
            .and_then(|table| table.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
