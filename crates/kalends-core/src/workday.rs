//! Working day arithmetic over resolved holidays.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::collection::HolidayCollection;
use crate::error::{HolidayError, HolidayResult};
use crate::resolver::Resolver;
use crate::rules::RegionProvider;
use crate::types::{CalendarDate, Date};

/// Working day queries for one region.
///
/// Holidays are resolved per year on first use and kept for the lifetime
/// of the calculator, so traversals that cross a year boundary resolve
/// the new year once.
///
/// A date is a working day when it is neither a weekend day of the region
/// nor the date of a holiday (original or substitute) of its own year.
#[derive(Debug)]
pub struct WorkdayCalculator {
    resolver: Resolver,
    region: Arc<dyn RegionProvider>,
    years: Mutex<HashMap<i32, Arc<HolidayCollection>>>,
}

impl WorkdayCalculator {
    /// Creates a calculator for `region`.
    pub fn new(resolver: Resolver, region: Arc<dyn RegionProvider>) -> Self {
        Self {
            resolver,
            region,
            years: Mutex::new(HashMap::new()),
        }
    }

    /// The region being calculated.
    pub fn region(&self) -> &dyn RegionProvider {
        self.region.as_ref()
    }

    /// The holidays of `year`, resolved in the configured default locale.
    ///
    /// # Errors
    ///
    /// Returns any resolution error, e.g. `HolidayError::InvalidYear`.
    pub fn holidays(&self, year: i32) -> HolidayResult<Arc<HolidayCollection>> {
        if let Some(collection) = self.years.lock().get(&year) {
            return Ok(Arc::clone(collection));
        }

        let locale = self.resolver.config().default_locale.clone();
        let collection = Arc::new(self.resolver.resolve(Arc::clone(&self.region), year, &locale)?);
        Ok(Arc::clone(self.years.lock().entry(year).or_insert(collection)))
    }

    /// Returns true if `date` falls on the region's weekend.
    pub fn is_weekend_day<D: CalendarDate>(&self, date: &D) -> bool {
        self.region.weekend().is_weekend_date(date.calendar_date())
    }

    /// Returns true if `date` is a holiday of its year.
    ///
    /// # Errors
    ///
    /// Returns any error raised while resolving the date's year.
    pub fn is_holiday<D: CalendarDate>(&self, date: &D) -> HolidayResult<bool> {
        let date = date.calendar_date();
        Ok(self.holidays(date.year())?.is_holiday(&date))
    }

    /// Returns true if `date` is neither a weekend day nor a holiday.
    ///
    /// # Errors
    ///
    /// Returns any error raised while resolving the date's year.
    pub fn is_working_day<D: CalendarDate>(&self, date: &D) -> HolidayResult<bool> {
        if self.is_weekend_day(date) {
            return Ok(false);
        }
        Ok(!self.is_holiday(date)?)
    }

    /// The `n`th working day after `date`.
    ///
    /// The result is the same kind of value as `date`, keeping its timezone
    /// and time of day. With `n == 0` the date is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns any error raised while resolving a crossed year, or
    /// `HolidayError::InvalidDate` when the landing time does not exist.
    pub fn next_working_day<D: CalendarDate>(&self, date: &D, n: u32) -> HolidayResult<D> {
        self.step(date, n, 1)
    }

    /// The `n`th working day before `date`.
    ///
    /// # Errors
    ///
    /// As for [`WorkdayCalculator::next_working_day`].
    pub fn prev_working_day<D: CalendarDate>(&self, date: &D, n: u32) -> HolidayResult<D> {
        self.step(date, n, -1)
    }

    fn step<D: CalendarDate>(&self, date: &D, n: u32, direction: i64) -> HolidayResult<D> {
        let mut current = date.calendar_date();
        let mut remaining = n;
        while remaining > 0 {
            current = current.checked_add_days(direction)?;
            if self.is_working_day(&current)? {
                remaining -= 1;
            }
        }
        date.with_calendar_date(current)
    }

    /// Every working day from `start` to `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidArgument` if `start` is after `end`,
    /// and any error raised while resolving a covered year.
    pub fn workdays<S, E>(&self, start: &S, end: &E) -> HolidayResult<Vec<Date>>
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

        let mut days = Vec::new();
        let mut current = start;
        while current <= end {
            if self.is_working_day(&current)? {
                days.push(current);
            }
            current = current.checked_add_days(1)?;
        }
        Ok(days)
    }
}
