//! Calendar date type and wall-clock date extraction.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{HolidayError, HolidayResult};

/// A calendar date with day granularity.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Holidays never
/// carry a time of day; the timezone they belong to is tracked by the
/// holiday itself.
///
/// # Example
///
/// ```rust
/// use kalends_core::types::Date;
///
/// let date = Date::from_ymd(2025, 12, 25).unwrap();
/// assert_eq!(date.add_days(1).day(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> HolidayResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| HolidayError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> HolidayResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| HolidayError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Adds a number of days to the date.
    ///
    /// # Panics
    ///
    /// Panics if the result leaves chrono's date range; use
    /// [`Date::checked_add_days`] for unbounded offsets.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of days, failing instead of overflowing.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidDate` when the result leaves chrono's range.
    pub fn checked_add_days(&self, days: i64) -> HolidayResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| HolidayError::invalid_date(format!("{self} + {days} days")))
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

/// Day arithmetic; panics on overflow like [`Date::add_days`].
impl Add<i64> for Date {
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

/// Day arithmetic; panics on overflow like [`Date::add_days`].
impl Sub<i64> for Date {
    type Output = Self;

    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// A value that carries a wall-clock calendar date.
///
/// Queries compare by calendar date only: the timezone and time of day of
/// the argument never change which holidays match. Workday traversal uses
/// [`CalendarDate::with_calendar_date`] to hand back the same kind of value
/// the caller passed in.
pub trait CalendarDate: Clone {
    /// The wall-clock date (Y-M-D) of this value.
    fn calendar_date(&self) -> Date;

    /// Returns a copy of this value moved to `date`, keeping its timezone
    /// and time of day.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidDate` when the local time does not exist
    /// on the target date.
    fn with_calendar_date(&self, date: Date) -> HolidayResult<Self>;
}

impl CalendarDate for Date {
    fn calendar_date(&self) -> Date {
        *self
    }

    fn with_calendar_date(&self, date: Date) -> HolidayResult<Self> {
        Ok(date)
    }
}

impl CalendarDate for NaiveDate {
    fn calendar_date(&self) -> Date {
        Date(*self)
    }

    fn with_calendar_date(&self, date: Date) -> HolidayResult<Self> {
        Ok(date.0)
    }
}

impl CalendarDate for NaiveDateTime {
    fn calendar_date(&self) -> Date {
        Date(self.date())
    }

    fn with_calendar_date(&self, date: Date) -> HolidayResult<Self> {
        Ok(date.0.and_time(self.time()))
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    fn calendar_date(&self) -> Date {
        Date(self.date_naive())
    }

    fn with_calendar_date(&self, date: Date) -> HolidayResult<Self> {
        let local = date.0.and_time(self.time());
        self.timezone()
            .from_local_datetime(&local)
            .earliest()
            .ok_or_else(|| HolidayError::invalid_date(format!("{local} does not exist locally")))
    }
}
