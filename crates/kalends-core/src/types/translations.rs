//! Locale to display-name mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Locale;
use crate::error::HolidayResult;

/// Display names of a single holiday, keyed by locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations(BTreeMap<Locale, String>);

impl Translations {
    /// Creates an empty set of translations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds translations from `(locale, name)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::UnknownLocale` for the first unrecognised tag.
    pub fn from_pairs<I, L, N>(pairs: I) -> HolidayResult<Self>
    where
        I: IntoIterator<Item = (L, N)>,
        L: AsRef<str>,
        N: Into<String>,
    {
        let mut translations = Self::new();
        for (locale, name) in pairs {
            translations.insert(Locale::parse(locale.as_ref())?, name);
        }
        Ok(translations)
    }

    /// Sets the name for `locale`, replacing any previous value.
    pub fn insert(&mut self, locale: Locale, name: impl Into<String>) {
        self.0.insert(locale, name.into());
    }

    /// Sets the name for `locale` only if none is present.
    ///
    /// Returns true if the name was added.
    pub fn insert_if_absent(&mut self, locale: Locale, name: impl Into<String>) -> bool {
        if self.0.contains_key(&locale) {
            return false;
        }
        self.0.insert(locale, name.into());
        true
    }

    /// Additively merges `other`; existing entries win.
    pub fn merge_missing(&mut self, other: &Translations) {
        for (locale, name) in &other.0 {
            self.insert_if_absent(locale.clone(), name.clone());
        }
    }

    /// Looks up the exact tag.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(locale, _)| locale.as_str() == tag)
            .map(|(_, name)| name.as_str())
    }

    /// Looks up the first tag of `chain` that has a name.
    #[must_use]
    pub fn lookup(&self, chain: &[&str]) -> Option<&str> {
        chain.iter().find_map(|tag| self.get(tag))
    }

    /// Number of locales with a name.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(locale, name)` in locale order.
    pub fn iter(&self) -> impl Iterator<Item = (&Locale, &str)> {
        self.0.iter().map(|(locale, name)| (locale, name.as_str()))
    }
}
