//! The translation table.
//!
//! Loaded once from a JSON document shaped like
//! `{ "en": { "key": "text", ... }, "ar": { ... } }` and never mutated.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use super::Language;
use crate::error::{ExplorerError, ExplorerResult};

/// Bilingual table shipped with the crate.
const BUILTIN_TRANSLATIONS: &str = include_str!("../../data/translations.json");

/// Immutable mapping from `(language, key)` to display string.
///
/// The default table is empty: every lookup falls back to its key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationTable {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl TranslationTable {
    /// Parse a translation document.
    ///
    /// Every supported language must have a table. Tables for unknown
    /// language codes are rejected rather than ignored.
    pub fn from_json(json: &str) -> ExplorerResult<Self> {
        let raw: BTreeMap<String, HashMap<String, String>> = serde_json::from_str(json)?;

        let mut tables = HashMap::with_capacity(raw.len());
        for (code, entries) in raw {
            let language = Language::from_code(&code)
                .ok_or_else(|| ExplorerError::UnknownLanguage(code.clone()))?;
            tables.insert(language, entries);
        }

        for language in Language::ALL {
            if !tables.contains_key(&language) {
                return Err(ExplorerError::MissingLanguage(language.code().to_string()));
            }
        }

        Ok(Self { tables })
    }

    /// Read and parse a translation document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> ExplorerResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The embedded English/Arabic table.
    pub fn builtin() -> ExplorerResult<Self> {
        Self::from_json(BUILTIN_TRANSLATIONS)
    }

    /// Look up `key` under `language`, falling back to the key itself.
    ///
    /// A missing key is not an error: the raw key is what gets displayed.
    pub fn resolve<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        match self.get(language, key) {
            Some(text) => text,
            None => {
                tracing::trace!(language = %language, key, "translation missing, showing key");
                key
            }
        }
    }

    /// Look up `key` under `language`, returning `None` when absent.
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.get(language, key).is_some()
    }

    /// Sorted keys defined for `language`.
    pub fn keys(&self, language: Language) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .tables
            .get(&language)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Number of keys defined for `language`.
    pub fn len(&self, language: Language) -> usize {
        self.tables.get(&language).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        Language::ALL.iter().all(|lang| self.len(*lang) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "en": { "close": "Close", "heart": "Cardiovascular System" },
        "ar": { "close": "إغلاق" }
    }"#;

    #[test]
    fn resolve_returns_mapped_string() {
        let table = TranslationTable::from_json(SMALL).unwrap();
        assert_eq!(table.resolve(Language::English, "close"), "Close");
        assert_eq!(table.resolve(Language::Arabic, "close"), "إغلاق");
    }

    #[test]
    fn resolve_falls_back_to_key() {
        let table = TranslationTable::from_json(SMALL).unwrap();
        assert_eq!(table.resolve(Language::Arabic, "heart"), "heart");
        assert_eq!(table.resolve(Language::English, "no_such_key"), "no_such_key");
        assert_eq!(table.get(Language::Arabic, "heart"), None);
    }

    #[test]
    fn unknown_language_rejected() {
        let err = TranslationTable::from_json(r#"{"en": {}, "ar": {}, "fr": {}}"#).unwrap_err();
        assert!(matches!(err, ExplorerError::UnknownLanguage(code) if code == "fr"));
    }

    #[test]
    fn missing_language_rejected() {
        let err = TranslationTable::from_json(r#"{"en": {"a": "b"}}"#).unwrap_err();
        assert!(matches!(err, ExplorerError::MissingLanguage(code) if code == "ar"));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = TranslationTable::from_json(r#"{"en": ["x"]}"#).unwrap_err();
        assert!(matches!(err, ExplorerError::Json(_)));
    }

    #[test]
    fn keys_are_sorted() {
        let table = TranslationTable::from_json(SMALL).unwrap();
        assert_eq!(table.keys(Language::English), vec!["close", "heart"]);
        assert_eq!(table.len(Language::Arabic), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn default_table_shows_keys() {
        let table = TranslationTable::default();
        assert!(table.is_empty());
        assert_eq!(table.resolve(Language::Arabic, "title"), "title");
    }

    #[test]
    fn builtin_table_has_identical_key_sets() {
        let table = TranslationTable::builtin().unwrap();
        assert_eq!(table.keys(Language::English), table.keys(Language::Arabic));
        assert_eq!(table.resolve(Language::English, "title"), "Human Biology Explorer");
        assert_eq!(table.resolve(Language::Arabic, "close"), "إغلاق");
    }
}
