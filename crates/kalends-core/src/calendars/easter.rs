//! Easter computus.
//!
//! Easter Sunday is found from the Paschal full moon and the Dominical
//! number. Years up to and including 1752 use the Julian coefficients,
//! later years the Gregorian ones with solar and lunar corrections.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{HolidayError, HolidayResult};
use crate::types::Date;

/// Last year computed with Julian coefficients.
pub const LAST_JULIAN_YEAR: i32 = 1752;

/// Days after March 21st on which Easter Sunday falls.
#[allow(clippy::many_single_char_names)]
fn easter_offset(year: i32) -> i64 {
    let golden = year % 19 + 1;

    let (dominical, mut pfm) = if year <= LAST_JULIAN_YEAR {
        let dominical = (year + year / 4 + 5) % 7;
        let pfm = (3 - 11 * golden - 7) % 30;
        (dominical, pfm)
    } else {
        let dominical = (year + year / 4 - year / 100 + year / 400) % 7;
        let solar = (year - 1600) / 100 - (year - 1600) / 400;
        let lunar = ((year - 1400) / 100) * 8 / 25;
        let pfm = (3 - 11 * golden + solar - lunar) % 30;
        (dominical, pfm)
    };
    let dominical = if dominical < 0 { dominical + 7 } else { dominical };
    if pfm < 0 {
        pfm += 30;
    }

    // Corrected Paschal full moon, in days after March 21st
    if pfm == 29 || (pfm == 28 && golden > 11) {
        pfm -= 1;
    }

    let mut to_sunday = (4 - pfm - dominical) % 7;
    if to_sunday < 0 {
        to_sunday += 7;
    }

    i64::from(pfm + to_sunday + 1)
}

/// Easter Sunday of `year`.
///
/// # Errors
///
/// Returns `HolidayError::InvalidDate` if March 21st of `year` cannot be
/// represented.
pub fn easter_sunday(year: i32) -> HolidayResult<Date> {
    Date::from_ymd(year, 3, 21)?.checked_add_days(easter_offset(year))
}

/// Orthodox Easter Sunday of `year`, expressed in the Gregorian calendar.
///
/// Uses the Julian computus for every year and shifts the result by the
/// Julian/Gregorian calendar drift.
///
/// # Errors
///
/// Returns `HolidayError::InvalidDate` if the date cannot be represented.
#[allow(clippy::many_single_char_names)]
pub fn orthodox_easter_sunday(year: i32) -> HolidayResult<Date> {
    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;

    let julian = Date::from_ymd(year, month as u32, day as u32)?;
    let drift = if year > 1582 {
        year / 100 - year / 400 - 2
    } else {
        0
    };
    julian.checked_add_days(i64::from(drift))
}

/// Easter Sunday of `year` at local midnight in the named timezone.
///
/// # Errors
///
/// Returns `HolidayError::InvalidArgument` for an unknown timezone name and
/// `HolidayError::InvalidDate` if midnight does not exist locally.
///
/// # Example
///
/// ```rust
/// use kalends_core::calendars::compute_easter;
///
/// let easter = compute_easter(2010, "Europe/Amsterdam").unwrap();
/// assert_eq!(easter.date_naive().to_string(), "2010-04-04");
/// ```
pub fn compute_easter(year: i32, timezone: &str) -> HolidayResult<DateTime<Tz>> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| HolidayError::invalid_argument(format!("unknown timezone '{timezone}'")))?;
    local_midnight(easter_sunday(year)?, tz)
}

/// The first instant of `date` in `tz`.
///
/// # Errors
///
/// Returns `HolidayError::InvalidDate` if the whole day is skipped locally.
pub fn local_midnight(date: Date, tz: Tz) -> HolidayResult<DateTime<Tz>> {
    // When midnight is skipped by a DST jump, the first hour that exists wins.
    (0..=3)
        .filter_map(|hour| date.as_naive_date().and_hms_opt(hour, 0, 0))
        .find_map(|naive| tz.from_local_datetime(&naive).earliest())
        .ok_or_else(|| HolidayError::invalid_date(format!("{date} has no local midnight in {tz}")))
}
