//! Locale-keyed translation tables.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::LoadError;
use crate::types::{Entry, Values};

/// A table of translation entries keyed by locale, then by key.
///
/// # Example
///
/// ```
/// use lexi::Dictionary;
///
/// let dictionary = Dictionary::new()
///     .with("en", "accept", "Yes")
///     .with("de", "accept", "Ja")
///     .with_formatter("en", "count", |values| format!("{} rows", values.len()));
///
/// assert_eq!(dictionary.get("de", "accept").and_then(|e| e.as_literal()), Some("Ja"));
/// assert!(dictionary.get("fr", "accept").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    locales: HashMap<String, HashMap<String, Entry>>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, returning the dictionary for chaining.
    pub fn with(mut self, locale: &str, key: &str, entry: impl Into<Entry>) -> Self {
        self.insert(locale, key, entry);
        self
    }

    /// Add a formatter entry, returning the dictionary for chaining.
    pub fn with_formatter(
        mut self,
        locale: &str,
        key: &str,
        f: impl Fn(&Values) -> String + Send + Sync + 'static,
    ) -> Self {
        self.insert(locale, key, Entry::formatter(f));
        self
    }

    /// Insert an entry, replacing any previous entry for the same key.
    pub fn insert(&mut self, locale: &str, key: &str, entry: impl Into<Entry>) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), entry.into());
    }

    /// Look up an entry.
    pub fn get(&self, locale: &str, key: &str) -> Option<&Entry> {
        self.locales.get(locale).and_then(|table| table.get(key))
    }

    /// Check whether the dictionary has a table for a locale.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Locales with a table, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Keys defined for a locale, sorted. Empty if the locale is unknown.
    pub fn keys(&self, locale: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .locales
            .get(locale)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Total number of entries across all locales.
    pub fn len(&self) -> usize {
        self.locales.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a dictionary from JSON text: `{"locale": {"key": "template"}}`.
    ///
    /// # Example
    ///
    /// ```
    /// use lexi::Dictionary;
    ///
    /// let dictionary = Dictionary::from_json_str(r#"{
    ///     "en": { "hello": "Hello, {name}!" },
    ///     "fr": { "hello": "Bonjour, {name} !" }
    /// }"#).unwrap();
    /// assert_eq!(dictionary.locales(), vec!["en", "fr"]);
    /// ```
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        Self::parse_json(content, PathBuf::from("<string>"))
    }

    /// Load a dictionary from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse_json(&content, path.to_path_buf())
    }

    fn parse_json(content: &str, path: PathBuf) -> Result<Self, LoadError> {
        let tables: BTreeMap<String, BTreeMap<String, String>> =
            serde_json::from_str(content).map_err(|e| LoadError::from_json(path, &e))?;

        let mut dictionary = Dictionary::new();
        for (locale, table) in tables {
            for (key, template) in table {
                dictionary.insert(&locale, &key, template);
            }
        }
        Ok(dictionary)
    }
}
