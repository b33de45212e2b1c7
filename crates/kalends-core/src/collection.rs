//! Resolved holidays of one region and year.
//!
//! A [`HolidayCollection`] owns its holidays in date order, ties kept in
//! the order the resolver added them. Read-only subsets are exposed as
//! [`HolidayView`]s, which support the same queries and can be chained.

use chrono_tz::Tz;
use std::collections::HashSet;
use std::sync::Arc;

use crate::calendars::WeekendType;
use crate::error::{HolidayError, HolidayResult};
use crate::holiday::Holiday;
use crate::resolver::Resolver;
use crate::rules::RegionProvider;
use crate::translations::TranslationProvider;
use crate::types::{CalendarDate, Date, HolidayType, Locale};

/// The holidays of a region for one year.
///
/// Keys are unique: adding a holiday whose key is already present is a
/// no-op. A substitute (`substituteHoliday:<key>`) is a separate entry next
/// to its unmoved original.
///
/// Entries are fixed once the resolver hands the collection out:
///
/// ```compile_fail
/// use kalends_core::prelude::*;
/// use std::sync::Arc;
///
/// fn rules(_year: i32) -> HolidayResult<RuleSet> {
///     Ok(RuleSet::new().with(HolidayRule::fixed("christmasDay", 12, 25)))
/// }
///
/// let region = Arc::new(Region::new("XX", "Example", chrono_tz::UTC, rules));
/// let mut holidays = Resolver::default().resolve(region, 2022, "en_US").unwrap();
/// let christmas = holidays.get("christmasDay").unwrap().clone();
/// holidays.add(christmas);
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCollection {
    resolver: Resolver,
    region: Arc<dyn RegionProvider>,
    year: i32,
    locale: Locale,
    entries: Vec<Holiday>,
}

impl HolidayCollection {
    pub(crate) fn new(resolver: Resolver, region: Arc<dyn RegionProvider>, year: i32, locale: Locale) -> Self {
        Self {
            resolver,
            region,
            year,
            locale,
            entries: Vec::new(),
        }
    }

    /// Adds `holiday` unless an entry with the same key exists.
    pub(crate) fn add(&mut self, holiday: Holiday) -> bool {
        if self.contains(holiday.key()) {
            return false;
        }
        let index = self.entries.partition_point(|h| h.date() <= holiday.date());
        self.entries.insert(index, holiday);
        true
    }

    pub(crate) fn merge_translations(&mut self, source: &dyn TranslationProvider) {
        for holiday in &mut self.entries {
            holiday.merge_global_translations(source);
        }
    }

    /// The region these holidays belong to.
    pub fn region(&self) -> &dyn RegionProvider {
        self.region.as_ref()
    }

    /// The resolved year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The display locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The region's timezone.
    pub fn timezone(&self) -> Tz {
        self.region.timezone()
    }

    /// The region's weekend.
    pub fn weekend(&self) -> WeekendType {
        self.region.weekend()
    }

    /// A view over every entry.
    pub fn view(&self) -> HolidayView<'_> {
        HolidayView {
            entries: self.entries.iter().collect(),
        }
    }

    /// The entry for `key`.
    pub fn get(&self, key: &str) -> Option<&Holiday> {
        self.entries.iter().find(|h| h.key() == key)
    }

    /// Returns true if an entry for `key` exists.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.entries.iter()
    }

    /// Keys in date order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(Holiday::key).collect()
    }

    /// Dates in date order; a date shared by several holidays repeats.
    pub fn dates(&self) -> Vec<Date> {
        self.entries.iter().map(Holiday::date).collect()
    }

    /// Names in the display locale, in date order.
    pub fn holiday_names(&self) -> Vec<String> {
        self.entries.iter().map(Holiday::name).collect()
    }

    /// Number of entries, substitutes included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct holidays: a substitute counts together with its
    /// original.
    pub fn count(&self) -> usize {
        self.view().count()
    }

    /// Substitute entries only.
    pub fn substitutes(&self) -> HolidayView<'_> {
        self.view().substitutes()
    }

    /// Entries of `holiday_type`.
    pub fn filter(&self, holiday_type: HolidayType) -> HolidayView<'_> {
        self.view().filter(holiday_type)
    }

    /// Official holidays.
    pub fn official(&self) -> HolidayView<'_> {
        self.filter(HolidayType::Official)
    }

    /// Observances.
    pub fn observances(&self) -> HolidayView<'_> {
        self.filter(HolidayType::Observance)
    }

    /// Bank holidays.
    pub fn bank(&self) -> HolidayView<'_> {
        self.filter(HolidayType::Bank)
    }

    /// Seasons.
    pub fn seasons(&self) -> HolidayView<'_> {
        self.filter(HolidayType::Season)
    }

    /// Other holidays.
    pub fn others(&self) -> HolidayView<'_> {
        self.filter(HolidayType::Other)
    }

    /// Entries dated between `start` and `end`.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidArgument` if `start` is after `end`.
    pub fn between<S, E>(&self, start: S, end: E, inclusive: bool) -> HolidayResult<HolidayView<'_>>
    where
        S: CalendarDate,
        E: CalendarDate,
    {
        self.view().between(start, end, inclusive)
    }

    /// Entries dated on `date`.
    pub fn on<D: CalendarDate>(&self, date: D) -> HolidayView<'_> {
        self.view().on(date)
    }

    /// Returns true if `date` falls on the region's weekend.
    pub fn is_weekend_day<D: CalendarDate>(&self, date: &D) -> bool {
        self.weekend().is_weekend_date(date.calendar_date())
    }

    /// Returns true if any entry, substitutes included, is dated `date`.
    pub fn is_holiday<D: CalendarDate>(&self, date: &D) -> bool {
        let date = date.calendar_date();
        self.entries.iter().any(|h| h.date() == date)
    }

    /// Returns true if `date` is neither a weekend day nor a holiday.
    pub fn is_working_day<D: CalendarDate>(&self, date: &D) -> bool {
        !self.is_weekend_day(date) && !self.is_holiday(date)
    }

    /// The holiday for `key` in the following year.
    ///
    /// Only the adjacent year is consulted. Returns `Ok(None)` when that
    /// year lies outside the supported range or has no such holiday.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidArgument` if `key` is blank, and any
    /// error raised while resolving the adjacent year.
    pub fn next(&self, key: &str) -> HolidayResult<Option<Holiday>> {
        self.adjacent(key, 1)
    }

    /// The holiday for `key` in the preceding year.
    ///
    /// # Errors
    ///
    /// As for [`HolidayCollection::next`].
    pub fn previous(&self, key: &str) -> HolidayResult<Option<Holiday>> {
        self.adjacent(key, -1)
    }

    fn adjacent(&self, key: &str, step: i32) -> HolidayResult<Option<Holiday>> {
        if key.trim().is_empty() {
            return Err(HolidayError::invalid_argument("holiday key must not be blank"));
        }
        let Some(year) = self.year.checked_add(step) else {
            return Ok(None);
        };
        if self.resolver.config().check_year(year).is_err() {
            return Ok(None);
        }

        let other = self
            .resolver
            .resolve(Arc::clone(&self.region), year, self.locale.as_str())?;
        Ok(other.get(key).cloned())
    }
}

impl<'a> IntoIterator for &'a HolidayCollection {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A read-only, order-preserving subset of a collection.
#[derive(Debug, Clone)]
pub struct HolidayView<'a> {
    entries: Vec<&'a Holiday>,
}

impl<'a> HolidayView<'a> {
    fn retain<F>(&self, keep: F) -> HolidayView<'a>
    where
        F: Fn(&Holiday) -> bool,
    {
        HolidayView {
            entries: self.entries.iter().copied().filter(|h| keep(h)).collect(),
        }
    }

    /// Entries of `holiday_type`.
    pub fn filter(&self, holiday_type: HolidayType) -> HolidayView<'a> {
        self.retain(|h| h.holiday_type() == holiday_type)
    }

    /// Official holidays.
    pub fn official(&self) -> HolidayView<'a> {
        self.filter(HolidayType::Official)
    }

    /// Observances.
    pub fn observances(&self) -> HolidayView<'a> {
        self.filter(HolidayType::Observance)
    }

    /// Bank holidays.
    pub fn bank(&self) -> HolidayView<'a> {
        self.filter(HolidayType::Bank)
    }

    /// Seasons.
    pub fn seasons(&self) -> HolidayView<'a> {
        self.filter(HolidayType::Season)
    }

    /// Other holidays.
    pub fn others(&self) -> HolidayView<'a> {
        self.filter(HolidayType::Other)
    }

    /// Substitute entries only.
    pub fn substitutes(&self) -> HolidayView<'a> {
        self.retain(Holiday::is_substitute)
    }

    /// Entries dated between `start` and `end`, by calendar date only.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidArgument` if `start` is after `end`.
    pub fn between<S, E>(&self, start: S, end: E, inclusive: bool) -> HolidayResult<HolidayView<'a>>
    where
        S: CalendarDate,
        E: CalendarDate,
    {
        let (start, end) = (start.calendar_date(), end.calendar_date());
        if start > end {
            return Err(HolidayError::invalid_argument(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(self.retain(|h| {
            let date = h.date();
            if inclusive {
                start <= date && date <= end
            } else {
                start < date && date < end
            }
        }))
    }

    /// Entries dated on `date`, by calendar date only.
    pub fn on<D: CalendarDate>(&self, date: D) -> HolidayView<'a> {
        let date = date.calendar_date();
        self.retain(|h| h.date() == date)
    }

    /// The entry for `key`.
    pub fn get(&self, key: &str) -> Option<&'a Holiday> {
        self.entries.iter().copied().find(|h| h.key() == key)
    }

    /// Returns true if an entry for `key` exists.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Holiday> + '_ {
        self.entries.iter().copied()
    }

    /// Keys in order.
    pub fn keys(&self) -> Vec<&'a str> {
        self.entries.iter().map(|h| h.key()).collect()
    }

    /// Dates in order.
    pub fn dates(&self) -> Vec<Date> {
        self.entries.iter().map(|h| h.date()).collect()
    }

    /// Names in each holiday's display locale.
    pub fn holiday_names(&self) -> Vec<String> {
        self.entries.iter().map(|h| h.name()).collect()
    }

    /// Number of entries, substitutes included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the view is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct holidays: a substitute and its original count once.
    pub fn count(&self) -> usize {
        self.entries
            .iter()
            .map(|h| h.original_key())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Copies the entries out of the view.
    pub fn to_vec(&self) -> Vec<Holiday> {
        self.entries.iter().map(|h| (*h).clone()).collect()
    }
}

impl<'a> IntoIterator for HolidayView<'a> {
    type Item = &'a Holiday;
    type IntoIter = std::vec::IntoIter<&'a Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Region, RuleSet};
    use crate::types::Translations;
    use chrono::{NaiveDate, TimeZone};

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn no_rules(_year: i32) -> HolidayResult<RuleSet> {
        Ok(RuleSet::new())
    }

    fn holiday(key: &str, date: Date, holiday_type: HolidayType) -> Holiday {
        Holiday::new(key, Translations::new(), date, "en_US", holiday_type).unwrap()
    }

    /// A hand-built 2022 collection: Christmas on a Sunday with its substitute.
    fn sample() -> HolidayCollection {
        let region: Arc<dyn RegionProvider> =
            Arc::new(Region::new("XX", "Testland", chrono_tz::UTC, no_rules));
        let mut collection = HolidayCollection::new(
            Resolver::default(),
            region,
            2022,
            Locale::default(),
        );
        let christmas = holiday("christmasDay", ymd(2022, 12, 25), HolidayType::Official);
        let substitute =
            Holiday::substitute(&christmas, Translations::new(), ymd(2022, 12, 27), "en_US", None)
                .unwrap();
        collection.add(holiday("valentinesDay", ymd(2022, 2, 14), HolidayType::Other));
        collection.add(christmas);
        collection.add(holiday("newYearsDay", ymd(2022, 1, 1), HolidayType::Official));
        collection.add(holiday("boxingDay", ymd(2022, 12, 26), HolidayType::Bank));
        collection.add(substitute);
        collection.add(holiday("stStephensDay", ymd(2022, 12, 26), HolidayType::Observance));
        collection
    }

    #[test]
    fn test_date_order_with_insertion_ties() {
        let collection = sample();
        assert_eq!(
            collection.keys(),
            vec![
                "newYearsDay",
                "valentinesDay",
                "christmasDay",
                "boxingDay",
                "stStephensDay",
                "substituteHoliday:christmasDay",
            ]
        );
    }

    #[test]
    fn test_add_dedupes_by_key() {
        let mut collection = sample();
        let before = collection.len();
        assert!(!collection.add(holiday("christmasDay", ymd(2022, 12, 24), HolidayType::Other)));
        assert_eq!(collection.len(), before);
        assert_eq!(collection.get("christmasDay").unwrap().date(), ymd(2022, 12, 25));
    }

    #[test]
    fn test_len_and_count() {
        let collection = sample();
        assert_eq!(collection.len(), 6);
        assert_eq!(collection.count(), 5);
        assert_eq!(collection.substitutes().len(), 1);
        assert_eq!(collection.official().count(), 2);
        assert_eq!(collection.official().len(), 3);
    }

    #[test]
    fn test_type_views() {
        let collection = sample();
        assert_eq!(collection.bank().keys(), vec!["boxingDay"]);
        assert_eq!(collection.observances().keys(), vec!["stStephensDay"]);
        assert_eq!(collection.others().keys(), vec!["valentinesDay"]);
        assert!(collection.seasons().is_empty());
    }

    #[test]
    fn test_between() {
        let collection = sample();
        let start = ymd(2022, 12, 25);
        let end = ymd(2022, 12, 27);

        let inclusive = collection.between(start, end, true).unwrap();
        assert_eq!(inclusive.len(), 4);
        let exclusive = collection.between(start, end, false).unwrap();
        assert_eq!(exclusive.keys(), vec!["boxingDay", "stStephensDay"]);

        let chained = collection.between(start, end, true).unwrap().official();
        assert_eq!(
            chained.keys(),
            vec!["christmasDay", "substituteHoliday:christmasDay"]
        );
        assert_eq!(chained.count(), 1);

        assert!(matches!(
            collection.between(end, start, true),
            Err(HolidayError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_on_ignores_time_and_zone() {
        let collection = sample();
        let date = NaiveDate::from_ymd_opt(2022, 12, 26).unwrap();
        let honolulu = chrono_tz::Pacific::Honolulu
            .from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
            .unwrap();
        let tokyo = chrono_tz::Asia::Tokyo
            .from_local_datetime(&date.and_hms_opt(23, 59, 0).unwrap())
            .unwrap();

        assert_eq!(collection.on(honolulu).keys(), collection.on(tokyo).keys());
        assert_eq!(collection.on(date).keys(), vec!["boxingDay", "stStephensDay"]);
    }

    #[test]
    fn test_workday_predicates() {
        let collection = sample();
        let substitute_day = ymd(2022, 12, 27);
        assert!(collection.is_holiday(&substitute_day));
        assert!(!collection.is_working_day(&substitute_day));
        assert!(collection.is_weekend_day(&ymd(2022, 12, 25)));
        assert!(collection.is_working_day(&ymd(2022, 12, 28)));
    }

    #[test]
    fn test_next_rejects_blank_key() {
        let collection = sample();
        assert!(matches!(
            collection.next(" "),
            Err(HolidayError::InvalidArgument { .. })
        ));
        assert!(matches!(
            collection.previous(""),
            Err(HolidayError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_duplicate_key_is_ignored() {
        let mut collection = sample();
        let before = collection.len();
        assert!(!collection.add(holiday("christmasDay", ymd(2022, 12, 24), HolidayType::Other)));
        assert_eq!(collection.len(), before);
        assert_eq!(collection.get("christmasDay").unwrap().date(), ymd(2022, 12, 25));
    }
}
