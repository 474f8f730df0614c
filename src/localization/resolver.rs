//! Display name resolution across the supported locale table

use indexmap::IndexMap;

use super::{LocaleTable, Localizer};

/// Culture code → localized string, in locale-table order
pub type LocalizedName = IndexMap<String, String>;

/// Resolve a display-name key into every distinct culture of the table.
///
/// Each culture is looked up once, on its first appearance in the table;
/// later locales sharing that culture are skipped.
pub fn localized_name(
    key: &str,
    locales: &LocaleTable,
    localizer: &dyn Localizer,
) -> LocalizedName {
    let mut names = LocalizedName::with_capacity(locales.len());
    for entry in locales.iter() {
        if names.contains_key(&entry.culture) {
            continue;
        }
        let value = localizer.localize(key, &entry.culture);
        names.insert(entry.culture.clone(), value);
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::DictionaryLocalizer;
    use std::cell::RefCell;

    #[test]
    fn test_one_entry_per_culture() {
        let table = LocaleTable::from_pairs([
            ("en-US", "en"),
            ("en-GB", "en"),
            ("fr", "fr"),
            ("fr-CA", "fr"),
            ("de", "de"),
        ]);
        let mut localizer = DictionaryLocalizer::new();
        localizer.insert("fr", "Wood", "Bois");
        localizer.insert("de", "Wood", "Holz");

        let names = localized_name("Wood", &table, &localizer);

        assert_eq!(names.len(), 3);
        let keys: Vec<&str> = names.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["en", "fr", "de"]);
        assert_eq!(names["en"], "Wood");
        assert_eq!(names["fr"], "Bois");
        assert_eq!(names["de"], "Holz");
    }

    #[test]
    fn test_each_culture_looked_up_once() {
        let table = LocaleTable::from_pairs([("a", "x"), ("b", "x"), ("c", "y"), ("d", "x")]);
        let calls = RefCell::new(Vec::new());
        let localizer = |key: &str, culture: &str| {
            calls.borrow_mut().push(culture.to_string());
            key.to_uppercase()
        };

        let names = localized_name("wood", &table, &localizer);

        assert_eq!(*calls.borrow(), vec!["x".to_string(), "y".to_string()]);
        assert_eq!(names["x"], "WOOD");
    }

    #[test]
    fn test_empty_translation_is_kept() {
        let table = LocaleTable::from_pairs([("en", "en")]);
        let localizer = |_: &str, _: &str| String::new();

        let names = localized_name("Wood", &table, &localizer);
        assert_eq!(names["en"], "");
    }
}
