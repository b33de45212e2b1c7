//! Global holiday names.
//!
//! A [`TranslationProvider`] answers "which names exist for this key"; the
//! resolver merges them into every holiday it builds. [`TranslationCatalog`]
//! is the in-memory implementation, loadable from one JSON document or from
//! a directory holding one `<key>.json` file per holiday.

use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::error::{HolidayError, HolidayResult};
use crate::types::Translations;

/// Source of global translations keyed by holiday key.
pub trait TranslationProvider: Send + Sync {
    /// Names for `key`, if any are known.
    fn translations(&self, key: &str) -> Option<&Translations>;
}

/// Holiday names for many keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationCatalog {
    entries: BTreeMap<String, Translations>,
}

impl TranslationCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `{key: {locale: name}}` document.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::TranslationLoad` for malformed JSON and
    /// `HolidayError::UnknownLocale` for an unrecognised locale tag.
    pub fn from_json(json: &str) -> HolidayResult<Self> {
        let raw: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(json)
            .map_err(|e| HolidayError::translation_load("<inline>", e.to_string()))?;

        let mut catalog = Self::new();
        for (key, names) in raw {
            catalog.insert(key, Translations::from_pairs(names)?);
        }
        Ok(catalog)
    }

    /// Loads every `<key>.json` file in `dir`.
    ///
    /// Each file holds a flat `{locale: name}` object; the file stem is the
    /// holiday key. Files without a `.json` extension are ignored.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::TranslationLoad` if the directory or a file
    /// cannot be read or parsed, and `HolidayError::UnknownLocale` if a file
    /// names an unrecognised locale.
    pub fn load_dir(dir: impl AsRef<Path>) -> HolidayResult<Self> {
        let dir = dir.as_ref();
        let load_err = |path: &Path, reason: String| {
            HolidayError::translation_load(path.display().to_string(), reason)
        };

        let mut files = fs::read_dir(dir)
            .map_err(|e| load_err(dir, e.to_string()))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| load_err(dir, e.to_string()))?;
        files.retain(|path| path.extension().is_some_and(|ext| ext == "json"));
        files.sort();

        let mut catalog = Self::new();
        for path in files {
            let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) else {
                return Err(load_err(&path, "file name is not valid UTF-8".to_string()));
            };
            let text = fs::read_to_string(&path).map_err(|e| load_err(&path, e.to_string()))?;
            let names: BTreeMap<String, String> =
                serde_json::from_str(&text).map_err(|e| load_err(&path, e.to_string()))?;
            catalog.insert(key, Translations::from_pairs(names)?);
        }

        tracing::debug!(
            dir = %dir.display(),
            keys = catalog.len(),
            "loaded translation directory"
        );
        Ok(catalog)
    }

    /// Loads `dir` once per process and shares the result.
    ///
    /// # Errors
    ///
    /// Propagates the first load failure; failed loads are not cached.
    pub fn cached(dir: impl AsRef<Path>) -> HolidayResult<Arc<TranslationCatalog>> {
        static CACHE: OnceLock<Mutex<HashMap<PathBuf, Arc<TranslationCatalog>>>> = OnceLock::new();

        let dir = dir.as_ref().to_path_buf();
        let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
        if let Some(catalog) = cache.lock().get(&dir) {
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(Self::load_dir(&dir)?);
        Ok(Arc::clone(cache.lock().entry(dir).or_insert(catalog)))
    }

    /// Sets the names for `key`, replacing previous ones.
    pub fn insert(&mut self, key: impl Into<String>, translations: Translations) {
        self.entries.insert(key.into(), translations);
    }

    /// Merges `other` into this catalog; names from `other` win per
    /// `(key, locale)`.
    pub fn merge(&mut self, other: &TranslationCatalog) {
        for (key, names) in &other.entries {
            let merged = self.entries.entry(key.clone()).or_default();
            for (locale, name) in names.iter() {
                merged.insert(locale.clone(), name);
            }
        }
    }

    /// Names for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Translations> {
        self.entries.get(key)
    }

    /// Keys in lexical order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TranslationProvider for TranslationCatalog {
    fn translations(&self, key: &str) -> Option<&Translations> {
        self.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_json() {
        let catalog = TranslationCatalog::from_json(
            r#"{"newYearsDay": {"en": "New Year's Day", "nl_NL": "Nieuwjaarsdag"}}"#,
        )
        .unwrap();
        let names = catalog.translations("newYearsDay").unwrap();
        assert_eq!(names.get("nl_NL"), Some("Nieuwjaarsdag"));
        assert!(catalog.translations("christmasDay").is_none());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            TranslationCatalog::from_json("{not json"),
            Err(HolidayError::TranslationLoad { .. })
        ));
        assert!(matches!(
            TranslationCatalog::from_json(r#"{"x": {"zz_ZZ": "?"}}"#),
            Err(HolidayError::UnknownLocale { .. })
        ));
    }

    #[test]
    fn test_merge_later_source_wins() {
        let mut base =
            TranslationCatalog::from_json(r#"{"a": {"en": "A", "nl": "A-nl"}}"#).unwrap();
        let overlay =
            TranslationCatalog::from_json(r#"{"a": {"en": "A2"}, "b": {"en": "B"}}"#).unwrap();
        base.merge(&overlay);

        let a = base.get("a").unwrap();
        assert_eq!(a.get("en"), Some("A2"));
        assert_eq!(a.get("nl"), Some("A-nl"));
        assert_eq!(base.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    fn write(dir: &Path, name: &str, body: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(body.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "kingsDay.json", r#"{"nl": "Koningsdag", "en": "King's Day"}"#);
        write(dir.path(), "README.txt", "ignored");

        let catalog = TranslationCatalog::load_dir(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("kingsDay").unwrap().get("nl"), Some("Koningsdag"));
    }

    #[test]
    fn test_load_dir_unknown_locale_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "kingsDay.json", r#"{"klingon": "?"}"#);
        assert!(matches!(
            TranslationCatalog::load_dir(dir.path()),
            Err(HolidayError::UnknownLocale { .. })
        ));
    }

    #[test]
    fn test_load_dir_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            TranslationCatalog::load_dir(dir.path().join("absent")),
            Err(HolidayError::TranslationLoad { .. })
        ));
    }

    #[test]
    fn test_cached_loads_once() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.json", r#"{"en": "A"}"#);

        let first = TranslationCatalog::cached(dir.path()).unwrap();
        write(dir.path(), "b.json", r#"{"en": "B"}"#);
        let second = TranslationCatalog::cached(dir.path()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
    }
}
