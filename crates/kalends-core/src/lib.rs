//! # Kalends Core
//!
//! Holiday resolution for the Kalends library.
//!
//! This crate provides the engine that turns a region's holiday rules into
//! dated, typed and named holidays for a year:
//!
//! - **Calendars**: Easter computus, lunisolar festival table, weekend layouts
//! - **Rules**: date rules, year windows and substitution policies per region
//! - **Resolver**: evaluates rules, places substitutes, merges translations
//! - **Collections**: ordered, key-unique holidays with type and date views
//! - **Workdays**: working day predicates and traversal across years
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use kalends_core::prelude::*;
//!
//! fn rules(_year: i32) -> HolidayResult<RuleSet> {
//!     Ok(RuleSet::new()
//!         .with(HolidayRule::fixed("newYearsDay", 1, 1))
//!         .with(
//!             HolidayRule::fixed("christmasDay", 12, 25)
//!                 .with_substitution(Substitution::weekend(Shift::NextWorkingDay)),
//!         ))
//! }
//!
//! let region = Arc::new(Region::new("XX", "Example", chrono_tz::UTC, rules));
//! let holidays = Resolver::default().resolve(region, 2022, "en_US").unwrap();
//!
//! assert!(holidays.contains("substituteHoliday:christmasDay"));
//! assert_eq!(holidays.count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::unnecessary_map_or)]

pub mod calendars;
pub mod collection;
pub mod config;
pub mod error;
pub mod holiday;
pub mod resolver;
pub mod rules;
pub mod shift;
pub mod translations;
pub mod types;
pub mod workday;

pub use collection::{HolidayCollection, HolidayView};
pub use config::{EngineConfig, Validate};
pub use error::{HolidayError, HolidayResult};
pub use holiday::{Holiday, SUBSTITUTE_KEY_PREFIX, SUBSTITUTE_PATTERN_KEY};
pub use resolver::Resolver;
pub use rules::{RegionProvider, RuleSet};
pub use shift::Shift;
pub use translations::{TranslationCatalog, TranslationProvider};
pub use types::{CalendarDate, Date, HolidayType, Locale, Translations};
pub use workday::WorkdayCalculator;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{compute_easter, WeekendType};
    pub use crate::collection::{HolidayCollection, HolidayView};
    pub use crate::config::EngineConfig;
    pub use crate::error::{HolidayError, HolidayResult};
    pub use crate::holiday::Holiday;
    pub use crate::resolver::Resolver;
    pub use crate::rules::{
        Collision, DateRule, HolidayRule, Region, RegionProvider, RuleSet, Substitution,
    };
    pub use crate::shift::Shift;
    pub use crate::translations::{TranslationCatalog, TranslationProvider};
    pub use crate::types::{CalendarDate, Date, HolidayType, Locale, Translations};
    pub use crate::workday::WorkdayCalculator;
}
