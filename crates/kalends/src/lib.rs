//! # Kalends
//!
//! Public holidays, substitute days and working days for named regions.
//!
//! This crate re-exports the engine from `kalends-core` and the region data
//! from `kalends-regions`, and adds entry points that take a region name:
//!
//! ```rust
//! use kalends::Date;
//!
//! let holidays = kalends::create("Netherlands", 2010, "nl_NL").unwrap();
//! assert_eq!(
//!     holidays.get("easter").unwrap().date(),
//!     Date::from_ymd(2010, 4, 4).unwrap()
//! );
//! assert_eq!(holidays.get("kingsDay"), None);
//!
//! let start = Date::from_ymd(2020, 1, 1).unwrap();
//! let end = Date::from_ymd(2020, 1, 31).unwrap();
//! assert_eq!(kalends::workdays("NL", &start, &end).unwrap().len(), 22);
//! ```
//!
//! Configured engines (locale fallback, year range, extra translation
//! files) are built with [`Kalends::new`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

use std::path::Path;
use std::sync::{Arc, OnceLock};

pub use kalends_core::calendars::{compute_easter, LunarFestival, WeekendType};
pub use kalends_core::rules::{
    Collision, DateRule, HolidayRule, Region, RegionProvider, RuleSet, Substitution,
};
pub use kalends_core::{
    CalendarDate, Date, EngineConfig, Holiday, HolidayCollection, HolidayError, HolidayResult,
    HolidayType, HolidayView, Locale, Resolver, Shift, TranslationCatalog, TranslationProvider,
    Translations, Validate, WorkdayCalculator,
};
pub use kalends_regions::{helpers, regions, ProviderRegistry};

/// Resolves holidays for regions looked up by name.
#[derive(Debug, Clone)]
pub struct Kalends {
    resolver: Resolver,
    registry: &'static ProviderRegistry,
}

impl Kalends {
    /// Creates an engine using the embedded names, extended with the
    /// configured translation directory if any.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::Config` for an invalid configuration and
    /// `HolidayError::TranslationLoad` or `HolidayError::UnknownLocale` if
    /// the translation directory cannot be loaded.
    pub fn new(config: EngineConfig) -> HolidayResult<Self> {
        let embedded = kalends_regions::translations::embedded()?;
        let translations: Arc<dyn TranslationProvider> = match &config.translations_dir {
            Some(dir) => {
                let mut catalog = (*embedded).clone();
                catalog.merge(&*TranslationCatalog::cached(dir)?);
                tracing::debug!(dir = %dir.display(), keys = catalog.len(), "merged translation directory");
                Arc::new(catalog)
            }
            None => embedded,
        };

        let resolver = Resolver::new(config)?.with_translations(translations);
        Ok(Self {
            resolver,
            registry: ProviderRegistry::global(),
        })
    }

    /// Creates an engine from a TOML configuration file.
    ///
    /// # Errors
    ///
    /// As for [`Kalends::new`], plus `HolidayError::Config` if the file
    /// cannot be read or parsed.
    pub fn from_config_file(path: impl AsRef<Path>) -> HolidayResult<Self> {
        Self::new(EngineConfig::from_file(path)?)
    }

    /// The shared engine with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns the embedded translation table's parse error, if any.
    pub fn global() -> HolidayResult<&'static Self> {
        static GLOBAL: OnceLock<HolidayResult<Kalends>> = OnceLock::new();
        GLOBAL
            .get_or_init(|| Self::new(EngineConfig::default()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        self.resolver.config()
    }

    /// The provider registered under `region` (code or name).
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::ProviderNotFound` for an unknown region.
    pub fn provider(&self, region: &str) -> HolidayResult<Arc<dyn RegionProvider>> {
        self.registry.provider(region)
    }

    /// Every available region.
    pub fn providers(&self) -> Vec<Arc<dyn RegionProvider>> {
        self.registry.providers().cloned().collect()
    }

    /// Resolves the holidays of `region` for `year`, named in `locale`.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::ProviderNotFound`, `HolidayError::InvalidYear`
    /// or `HolidayError::UnknownLocale` for bad input.
    pub fn create(&self, region: &str, year: i32, locale: &str) -> HolidayResult<HolidayCollection> {
        self.resolver.resolve(self.provider(region)?, year, locale)
    }

    /// Resolves `region` for `year` in the configured default locale.
    pub fn create_default(&self, region: &str, year: i32) -> HolidayResult<HolidayCollection> {
        let locale = self.config().default_locale.clone();
        self.create(region, year, &locale)
    }

    /// A workday calculator for `region`.
    pub fn workday_calculator(&self, region: &str) -> HolidayResult<WorkdayCalculator> {
        Ok(WorkdayCalculator::new(self.resolver.clone(), self.provider(region)?))
    }

    /// Returns true if `date` is a holiday in `region`.
    pub fn is_holiday<D: CalendarDate>(&self, region: &str, date: &D) -> HolidayResult<bool> {
        self.workday_calculator(region)?.is_holiday(date)
    }

    /// Returns true if `date` is a working day in `region`.
    pub fn is_working_day<D: CalendarDate>(&self, region: &str, date: &D) -> HolidayResult<bool> {
        self.workday_calculator(region)?.is_working_day(date)
    }

    /// The `n`th working day after `date` in `region`.
    pub fn next_working_day<D: CalendarDate>(&self, region: &str, date: &D, n: u32) -> HolidayResult<D> {
        self.workday_calculator(region)?.next_working_day(date, n)
    }

    /// The `n`th working day before `date` in `region`.
    pub fn prev_working_day<D: CalendarDate>(&self, region: &str, date: &D, n: u32) -> HolidayResult<D> {
        self.workday_calculator(region)?.prev_working_day(date, n)
    }

    /// Every working day of `region` from `start` to `end`, inclusive.
    pub fn workdays<S, E>(&self, region: &str, start: &S, end: &E) -> HolidayResult<Vec<Date>>
    where
        S: CalendarDate,
        E: CalendarDate,
    {
        self.workday_calculator(region)?.workdays(start, end)
    }
}

/// Resolves `region` for `year` with the shared engine.
pub fn create(region: &str, year: i32, locale: &str) -> HolidayResult<HolidayCollection> {
    Kalends::global()?.create(region, year, locale)
}

/// Returns true if `date` is a holiday in `region`.
pub fn is_holiday<D: CalendarDate>(region: &str, date: &D) -> HolidayResult<bool> {
    Kalends::global()?.is_holiday(region, date)
}

/// Returns true if `date` is a working day in `region`.
pub fn is_working_day<D: CalendarDate>(region: &str, date: &D) -> HolidayResult<bool> {
    Kalends::global()?.is_working_day(region, date)
}

/// The `n`th working day after `date` in `region`.
pub fn next_working_day<D: CalendarDate>(region: &str, date: &D, n: u32) -> HolidayResult<D> {
    Kalends::global()?.next_working_day(region, date, n)
}

/// The `n`th working day before `date` in `region`.
pub fn prev_working_day<D: CalendarDate>(region: &str, date: &D, n: u32) -> HolidayResult<D> {
    Kalends::global()?.prev_working_day(region, date, n)
}

/// Every working day of `region` from `start` to `end`, inclusive.
pub fn workdays<S, E>(region: &str, start: &S, end: &E) -> HolidayResult<Vec<Date>>
where
    S: CalendarDate,
    E: CalendarDate,
{
    Kalends::global()?.workdays(region, start, end)
}

/// Every available region.
pub fn providers() -> Vec<Arc<dyn RegionProvider>> {
    kalends_regions::providers()
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{Kalends, ProviderRegistry};
    pub use kalends_core::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_engine_is_shared() {
        let first = Kalends::global().unwrap();
        let second = Kalends::global().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.config(), &EngineConfig::default());
    }

    #[test]
    fn test_create_default_uses_configured_locale() {
        let engine = Kalends::new(EngineConfig::default().with_default_locale("nl_NL")).unwrap();
        let holidays = engine.create_default("NL", 2023).unwrap();
        assert_eq!(holidays.locale().as_str(), "nl_NL");
        assert_eq!(holidays.get("kingsDay").unwrap().name(), "Koningsdag");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig::default().with_year_range(2000, 1999);
        assert!(matches!(Kalends::new(config), Err(HolidayError::Config { .. })));
    }
}
