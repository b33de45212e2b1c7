//! The resolution engine.
//!
//! Turns a region's rules for a year into a [`HolidayCollection`]:
//!
//! 1. Validate the year and locale
//! 2. Evaluate every rule active in the year, in declaration order
//! 3. Place substitutes for holidays on trigger days or clashing dates
//! 4. Merge global translations into every entry

use std::fmt;
use std::sync::Arc;

use crate::collection::HolidayCollection;
use crate::config::{EngineConfig, Validate};
use crate::error::HolidayResult;
use crate::holiday::Holiday;
use crate::rules::{HolidayRule, RegionProvider, RuleSet};
use crate::translations::{TranslationCatalog, TranslationProvider};
use crate::types::{Date, Locale, Translations};

/// Resolves regions into holiday collections.
///
/// Cheap to clone; clones share configuration and translations.
#[derive(Clone)]
pub struct Resolver {
    config: Arc<EngineConfig>,
    fallback: Locale,
    translations: Arc<dyn TranslationProvider>,
}

impl Resolver {
    /// Creates a resolver without global translations.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::Config` if `config` is invalid.
    pub fn new(config: EngineConfig) -> HolidayResult<Self> {
        config.validate_or_error()?;
        let fallback = config.fallback_locale()?;
        Ok(Self {
            config: Arc::new(config),
            fallback,
            translations: Arc::new(TranslationCatalog::new()),
        })
    }

    /// Builder method to set the global translation source.
    #[must_use]
    pub fn with_translations(mut self, translations: Arc<dyn TranslationProvider>) -> Self {
        self.translations = translations;
        self
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The global translation source.
    pub fn translations(&self) -> &dyn TranslationProvider {
        self.translations.as_ref()
    }

    /// Resolves `region` for `year`, naming holidays in `locale`.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidYear` outside the configured range,
    /// `HolidayError::UnknownLocale` for an unrecognised locale, and any
    /// error raised by the region's rules.
    pub fn resolve(
        &self,
        region: Arc<dyn RegionProvider>,
        year: i32,
        locale: &str,
    ) -> HolidayResult<HolidayCollection> {
        self.config.check_year(year)?;
        let locale = Locale::parse(locale)?;
        let rules = region.rules(year)?;

        let mut collection =
            HolidayCollection::new(self.clone(), Arc::clone(&region), year, locale.clone());

        for rule in &rules {
            if let Some(holiday) = self.evaluate(rule, year, &locale, region.as_ref())? {
                collection.add(holiday);
            }
        }

        self.substitute(&rules, &mut collection, &locale)?;
        collection.merge_translations(self.translations.as_ref());

        tracing::debug!(
            region = region.code(),
            year,
            locale = %locale,
            holidays = collection.len(),
            "resolved holidays"
        );
        Ok(collection)
    }

    fn evaluate(
        &self,
        rule: &HolidayRule,
        year: i32,
        locale: &Locale,
        region: &dyn RegionProvider,
    ) -> HolidayResult<Option<Holiday>> {
        if !rule.is_active(year) {
            tracing::trace!(key = rule.key(), year, "rule outside its years");
            return Ok(None);
        }
        let Some(date) = rule.date_rule().evaluate(year)? else {
            tracing::trace!(key = rule.key(), year, "rule has no date this year");
            return Ok(None);
        };

        let holiday = Holiday::new(
            rule.key(),
            rule.translations().clone(),
            date,
            locale.as_str(),
            rule.holiday_type(),
        )?
        .in_timezone(region.timezone())
        .with_fallback_locale(self.fallback.clone());
        Ok(Some(holiday))
    }

    /// Places substitutes in rule declaration order.
    ///
    /// Each decision sees the originals and every substitute placed before
    /// it, so a later substitute never lands on an earlier one.
    fn substitute(
        &self,
        rules: &RuleSet,
        collection: &mut HolidayCollection,
        locale: &Locale,
    ) -> HolidayResult<()> {
        let weekend = collection.weekend();

        for rule in rules {
            let Some(policy) = rule.substitution() else {
                continue;
            };
            let Some(original) = collection.get(rule.key()).cloned() else {
                continue;
            };
            let date = original.date();

            let on_trigger_day = policy.trigger.triggers(date.weekday(), weekend);
            let clashes = collection.iter().any(|other| {
                other.key() != original.key()
                    && other.date() == date
                    && policy.collision.clashes_with(other.original_key())
            });
            if !on_trigger_day && !clashes {
                continue;
            }

            let taken = |d: Date| collection.is_holiday(&d);
            let moved = policy.shift.apply(date, weekend, taken)?;
            let substitute =
                Holiday::substitute(&original, Translations::new(), moved, locale.as_str(), None)?;

            tracing::trace!(
                key = original.key(),
                from = %date,
                to = %moved,
                "placed substitute holiday"
            );
            collection.add(substitute);
        }
        Ok(())
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            config: Arc::new(EngineConfig::default()),
            fallback: Locale::default(),
            translations: Arc::new(TranslationCatalog::new()),
        }
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("config", &self.config)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}
