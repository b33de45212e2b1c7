//! The holiday entity.
//!
//! A [`Holiday`] is one computed occurrence: key, date, type and names.
//! A substitute holiday is the same entity with a back-reference to a
//! snapshot of the holiday it replaces; its key is always
//! `substituteHoliday:<original key>` and its date always differs from the
//! original's.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use std::fmt;

use crate::calendars::local_midnight;
use crate::error::{HolidayError, HolidayResult};
use crate::translations::TranslationProvider;
use crate::types::{Date, HolidayType, Locale, Translations};

/// Prefix of every substitute holiday key.
pub const SUBSTITUTE_KEY_PREFIX: &str = "substituteHoliday:";

/// Translation key of the generic substitute name template (`"{0} observed"`).
pub const SUBSTITUTE_PATTERN_KEY: &str = "substituteHoliday";

/// One holiday occurrence.
///
/// Construction validates the key and locale; afterwards the only mutation
/// is the additive merge of global translations.
///
/// # Example
///
/// ```rust
/// use kalends_core::{Holiday, HolidayType};
/// use kalends_core::types::{Date, Translations};
///
/// let names = Translations::from_pairs([("en", "Christmas Day")]).unwrap();
/// let date = Date::from_ymd(2022, 12, 25).unwrap();
/// let christmas = Holiday::new("christmasDay", names, date, "en_US", HolidayType::Official).unwrap();
///
/// let observed = Holiday::substitute(&christmas, Default::default(), date.add_days(1), "en_US", None).unwrap();
/// assert_eq!(observed.key(), "substituteHoliday:christmasDay");
/// assert_eq!(observed.substituted_holiday().unwrap().date(), date);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holiday {
    key: String,
    date: Date,
    timezone: Tz,
    #[serde(rename = "type")]
    holiday_type: HolidayType,
    locale: Locale,
    #[serde(skip)]
    fallback_locale: Locale,
    translations: Translations,
    #[serde(skip)]
    global: Translations,
    #[serde(skip)]
    substitute_pattern: Translations,
    #[serde(skip_serializing_if = "Option::is_none")]
    substituted: Option<Box<Holiday>>,
}

impl Holiday {
    /// Creates a holiday.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidArgument` if `key` is blank and
    /// `HolidayError::UnknownLocale` if `locale` is not recognised.
    pub fn new(
        key: &str,
        translations: Translations,
        date: Date,
        locale: &str,
        holiday_type: HolidayType,
    ) -> HolidayResult<Self> {
        if key.trim().is_empty() {
            return Err(HolidayError::invalid_argument("holiday key must not be blank"));
        }
        let locale = Locale::parse(locale)?;

        Ok(Self {
            key: key.to_string(),
            date,
            timezone: Tz::UTC,
            holiday_type,
            locale,
            fallback_locale: Locale::default(),
            translations,
            global: Translations::new(),
            substitute_pattern: Translations::new(),
            substituted: None,
        })
    }

    /// Creates a substitute for `original`, dated `date`.
    ///
    /// The substitute takes the original's type unless `holiday_type` is
    /// given, and shares its timezone and fallback locale.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::UnknownLocale` if `locale` is not recognised and
    /// `HolidayError::InvalidArgument` if `date` equals the original's date.
    pub fn substitute(
        original: &Holiday,
        translations: Translations,
        date: Date,
        locale: &str,
        holiday_type: Option<HolidayType>,
    ) -> HolidayResult<Self> {
        let locale = Locale::parse(locale)?;
        if date == original.date {
            return Err(HolidayError::invalid_argument(format!(
                "substitute for '{}' must not fall on the original date {date}",
                original.key
            )));
        }

        Ok(Self {
            key: format!("{SUBSTITUTE_KEY_PREFIX}{}", original.key),
            date,
            timezone: original.timezone,
            holiday_type: holiday_type.unwrap_or(original.holiday_type),
            locale,
            fallback_locale: original.fallback_locale.clone(),
            translations,
            global: Translations::new(),
            substitute_pattern: Translations::new(),
            substituted: Some(Box::new(original.clone())),
        })
    }

    /// Binds the holiday to a timezone.
    #[must_use]
    pub fn in_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        if let Some(original) = self.substituted.as_mut() {
            original.timezone = timezone;
        }
        self
    }

    /// Sets the locale consulted when no name exists for the requested one.
    #[must_use]
    pub fn with_fallback_locale(mut self, locale: Locale) -> Self {
        if let Some(original) = self.substituted.as_mut() {
            original.fallback_locale = locale.clone();
        }
        self.fallback_locale = locale;
        self
    }

    /// The holiday key, e.g. `newYearsDay`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The calendar date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// The timezone the date belongs to.
    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Local midnight of the holiday.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidDate` if the day does not exist locally.
    pub fn start(&self) -> HolidayResult<DateTime<Tz>> {
        local_midnight(self.date, self.timezone)
    }

    /// The holiday type.
    #[must_use]
    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }

    /// The display locale chosen at construction.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Per-instance custom translations.
    #[must_use]
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Translations merged in from the global catalog.
    #[must_use]
    pub fn global_translations(&self) -> &Translations {
        &self.global
    }

    /// Returns true for a substitute holiday.
    #[must_use]
    pub fn is_substitute(&self) -> bool {
        self.substituted.is_some()
    }

    /// The holiday this one substitutes.
    #[must_use]
    pub fn substituted_holiday(&self) -> Option<&Holiday> {
        self.substituted.as_deref()
    }

    /// Key of the holiday this entry stands for: the original's key for a
    /// substitute, the own key otherwise.
    #[must_use]
    pub fn original_key(&self) -> &str {
        self.substituted
            .as_deref()
            .map_or(self.key.as_str(), |original| original.key.as_str())
    }

    /// Name in the display locale.
    #[must_use]
    pub fn name(&self) -> String {
        self.name_in(&self.locale)
    }

    /// Name in `locale`.
    ///
    /// Regular holidays resolve custom names, then global names (exact tag
    /// before bare language in each), then the fallback locale, and finally
    /// the key itself. Substitutes resolve their own custom and global names,
    /// then the substitute template applied to the original's name, then
    /// the original's name. When neither the substitute nor its original is
    /// named in `locale`, the fallback locale's names and template are used.
    #[must_use]
    pub fn name_in(&self, locale: &Locale) -> String {
        let chain = locale.fallback_chain();
        let Some(original) = self.substituted.as_deref() else {
            return self.resolve_name(&chain);
        };

        if let Some(name) = self.substitute_name(original, &chain, locale) {
            return name;
        }
        if !original.is_named_in(&chain) {
            let fallback = self.fallback_locale.fallback_chain();
            if let Some(name) = self.substitute_name(original, &fallback, locale) {
                return name;
            }
        }
        original.name_in(locale)
    }

    fn substitute_name(&self, original: &Holiday, chain: &[&str], locale: &Locale) -> Option<String> {
        self.translations
            .lookup(chain)
            .or_else(|| self.global.lookup(chain))
            .map(str::to_string)
            .or_else(|| {
                self.substitute_pattern
                    .lookup(chain)
                    .map(|pattern| pattern.replace("{0}", &original.name_in(locale)))
            })
    }

    fn is_named_in(&self, chain: &[&str]) -> bool {
        self.translations.lookup(chain).is_some() || self.global.lookup(chain).is_some()
    }

    fn resolve_name(&self, chain: &[&str]) -> String {
        let fallback = self.fallback_locale.fallback_chain();
        self.translations
            .lookup(chain)
            .or_else(|| self.global.lookup(chain))
            .or_else(|| self.translations.lookup(&fallback))
            .or_else(|| self.global.lookup(&fallback))
            .unwrap_or(&self.key)
            .to_string()
    }

    /// Merges names from `source` for this holiday's key.
    ///
    /// The merge is additive: a locale that already has a global name keeps
    /// it, and custom translations always take precedence at lookup.
    pub fn merge_global_translations(&mut self, source: &dyn TranslationProvider) {
        if let Some(names) = source.translations(&self.key) {
            self.global.merge_missing(names);
        }
        if let Some(original) = self.substituted.as_mut() {
            if let Some(pattern) = source.translations(SUBSTITUTE_PATTERN_KEY) {
                self.substitute_pattern.merge_missing(pattern);
            }
            original.merge_global_translations(source);
        }
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translations::TranslationCatalog;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn names(pairs: &[(&str, &str)]) -> Translations {
        Translations::from_pairs(pairs.iter().copied()).unwrap()
    }

    fn catalog() -> TranslationCatalog {
        TranslationCatalog::from_json(
            r#"{
                "christmasDay": {"en": "Christmas Day", "nl": "Kerstmis", "pl_PL": "Boże Narodzenie"},
                "substituteHoliday": {"en": "{0} observed", "nl": "{0} (vervangend)"},
                "substituteHoliday:boxingDay": {"en": "Boxing Day (substitute day)"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_blank_key_rejected() {
        for key in ["", "   "] {
            assert!(matches!(
                Holiday::new(key, Translations::new(), ymd(2024, 1, 1), "en_US", HolidayType::Official),
                Err(HolidayError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn test_unknown_locale_rejected() {
        assert!(matches!(
            Holiday::new("x", Translations::new(), ymd(2024, 1, 1), "xx_XX", HolidayType::Official),
            Err(HolidayError::UnknownLocale { .. })
        ));
    }

    #[test]
    fn test_name_resolution_order() {
        let mut holiday = Holiday::new(
            "christmasDay",
            names(&[("nl", "Kerst")]),
            ymd(2024, 12, 25),
            "nl_NL",
            HolidayType::Official,
        )
        .unwrap();
        holiday.merge_global_translations(&catalog());

        // Custom base language beats global exact and global base.
        assert_eq!(holiday.name(), "Kerst");
        // Global exact tag.
        assert_eq!(holiday.name_in(&Locale::parse("pl_PL").unwrap()), "Boże Narodzenie");
        // Nothing for German: fallback locale (en_US -> en).
        assert_eq!(holiday.name_in(&Locale::parse("de_DE").unwrap()), "Christmas Day");
    }

    #[test]
    fn test_name_falls_back_to_key() {
        let holiday = Holiday::new(
            "mysteryDay",
            Translations::new(),
            ymd(2024, 3, 3),
            "en_US",
            HolidayType::Other,
        )
        .unwrap();
        assert_eq!(holiday.name(), "mysteryDay");
    }

    #[test]
    fn test_merge_is_additive() {
        let mut holiday = Holiday::new(
            "christmasDay",
            names(&[("en", "Xmas")]),
            ymd(2024, 12, 25),
            "en_US",
            HolidayType::Official,
        )
        .unwrap();
        holiday.merge_global_translations(&catalog());
        holiday.merge_global_translations(
            &TranslationCatalog::from_json(r#"{"christmasDay": {"nl": "Overschreven"}}"#).unwrap(),
        );

        assert_eq!(holiday.name(), "Xmas");
        assert_eq!(holiday.global_translations().get("nl"), Some("Kerstmis"));
    }

    #[test]
    fn test_substitute_key_and_back_reference() {
        let original = Holiday::new(
            "christmasDay",
            Translations::new(),
            ymd(2022, 12, 25),
            "en_US",
            HolidayType::Bank,
        )
        .unwrap()
        .in_timezone(chrono_tz::Europe::London);
        let sub = Holiday::substitute(&original, Translations::new(), ymd(2022, 12, 27), "en_US", None)
            .unwrap();

        assert_eq!(sub.key(), "substituteHoliday:christmasDay");
        assert_eq!(sub.original_key(), "christmasDay");
        assert_eq!(sub.holiday_type(), HolidayType::Bank);
        assert_eq!(sub.timezone(), chrono_tz::Europe::London);
        assert!(sub.is_substitute());
        assert!(!original.is_substitute());
        assert_eq!(sub.substituted_holiday(), Some(&original));
    }

    #[test]
    fn test_substitute_on_same_date_rejected() {
        let original = Holiday::new(
            "christmasDay",
            Translations::new(),
            ymd(2022, 12, 25),
            "en_US",
            HolidayType::Official,
        )
        .unwrap();
        assert!(matches!(
            Holiday::substitute(&original, Translations::new(), ymd(2022, 12, 25), "en_US", None),
            Err(HolidayError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Holiday::substitute(&original, Translations::new(), ymd(2022, 12, 26), "qq", None),
            Err(HolidayError::UnknownLocale { .. })
        ));
    }

    #[test]
    fn test_substitute_name_resolution() {
        let christmas = Holiday::new(
            "christmasDay",
            Translations::new(),
            ymd(2022, 12, 25),
            "en_US",
            HolidayType::Official,
        )
        .unwrap();
        let boxing = Holiday::new(
            "boxingDay",
            Translations::new(),
            ymd(2021, 12, 26),
            "en_US",
            HolidayType::Official,
        )
        .unwrap();

        let mut sub = Holiday::substitute(&christmas, Translations::new(), ymd(2022, 12, 27), "en_US", None)
            .unwrap();
        sub.merge_global_translations(&catalog());
        // Template applied to the original's resolved name.
        assert_eq!(sub.name(), "Christmas Day observed");
        assert_eq!(sub.name_in(&Locale::parse("nl_NL").unwrap()), "Kerstmis (vervangend)");
        // No template in Polish: the original's own name.
        assert_eq!(sub.name_in(&Locale::parse("pl_PL").unwrap()), "Boże Narodzenie");
        // Neither named in German: the fallback locale's template.
        assert_eq!(sub.name_in(&Locale::parse("de_DE").unwrap()), "Christmas Day observed");

        let mut boxing_sub =
            Holiday::substitute(&boxing, Translations::new(), ymd(2021, 12, 28), "en_US", None).unwrap();
        boxing_sub.merge_global_translations(&catalog());
        // Substitute-specific global name beats the template.
        assert_eq!(boxing_sub.name(), "Boxing Day (substitute day)");

        let custom = Holiday::substitute(
            &christmas,
            names(&[("en", "Christmas (moved)")]),
            ymd(2022, 12, 27),
            "en_US",
            None,
        )
        .unwrap();
        assert_eq!(custom.name(), "Christmas (moved)");
    }

    #[test]
    fn test_start_is_local_midnight() {
        let holiday = Holiday::new(
            "newYearsDay",
            Translations::new(),
            ymd(2024, 1, 1),
            "en_US",
            HolidayType::Official,
        )
        .unwrap()
        .in_timezone(chrono_tz::Asia::Tokyo);
        let start = holiday.start().unwrap();
        assert_eq!(start.to_rfc3339(), "2024-01-01T00:00:00+09:00");
    }
}
