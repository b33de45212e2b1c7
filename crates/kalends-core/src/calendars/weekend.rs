//! Weekend layouts and weekday arithmetic.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::types::Date;

/// Weekend layouts for different regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeekendType {
    /// Saturday and Sunday (most regions)
    #[default]
    SaturdaySunday,
    /// Friday and Saturday (Middle East)
    FridaySaturday,
    /// Thursday and Friday
    ThursdayFriday,
    /// Friday only
    FridayOnly,
    /// Sunday only
    SundayOnly,
    /// No weekends
    None,
}

impl WeekendType {
    /// Check if a weekday is a weekend day for this type.
    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        match self {
            WeekendType::SaturdaySunday => matches!(weekday, Weekday::Sat | Weekday::Sun),
            WeekendType::FridaySaturday => matches!(weekday, Weekday::Fri | Weekday::Sat),
            WeekendType::ThursdayFriday => matches!(weekday, Weekday::Thu | Weekday::Fri),
            WeekendType::FridayOnly => matches!(weekday, Weekday::Fri),
            WeekendType::SundayOnly => matches!(weekday, Weekday::Sun),
            WeekendType::None => false,
        }
    }

    /// Check if a date falls on a weekend day.
    #[inline]
    pub fn is_weekend_date(&self, date: Date) -> bool {
        self.is_weekend(date.weekday())
    }

    /// The weekend days, Monday first.
    pub fn days(&self) -> Vec<Weekday> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .filter(|day| self.is_weekend(*day))
        .collect()
    }
}

/// Calculate the nth occurrence of a weekday in a month.
///
/// Returns `None` when the month has fewer than `n` such weekdays.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    if n == 0 {
        return None;
    }
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let first_weekday = first_of_month.weekday();

    let days_until = (weekday.num_days_from_monday() as i32
        - first_weekday.num_days_from_monday() as i32)
        .rem_euclid(7) as u32;

    let day = 1 + days_until + (n - 1) * 7;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Calculate the last occurrence of a weekday in a month.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last_day = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?.pred_opt()?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()?
    };

    let days_back = (last_day.weekday().num_days_from_monday() as i32
        - weekday.num_days_from_monday() as i32)
        .rem_euclid(7);

    last_day.checked_sub_signed(chrono::Duration::days(days_back as i64))
}

/// The first `weekday` on or after `year-month-day`.
pub fn weekday_on_or_after(year: i32, month: u32, day: u32, weekday: Weekday) -> Option<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(year, month, day)?;
    let days_ahead = (weekday.num_days_from_monday() as i32
        - start.weekday().num_days_from_monday() as i32)
        .rem_euclid(7);
    start.checked_add_signed(chrono::Duration::days(days_ahead as i64))
}
