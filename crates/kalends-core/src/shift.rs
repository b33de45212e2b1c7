//! Substitute day placement.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::calendars::WeekendType;
use crate::error::{HolidayError, HolidayResult};
use crate::types::Date;

/// Longest distance a substitute may move before placement gives up.
const MAX_SHIFT_DAYS: i64 = 366;

/// Where a substitute holiday is placed relative to the original.
///
/// "Free" means neither a weekend day nor a date already taken by another
/// holiday of the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Shift {
    /// First free day after the original.
    #[default]
    NextWorkingDay,

    /// First day after the original not taken by a holiday; weekend days
    /// count as free.
    NextNonHoliday,

    /// The Monday after the original, or the first free day after that
    /// Monday when it is taken.
    FollowingMonday,

    /// Saturday moves back to Friday and Sunday forward to Monday; other
    /// trigger days behave like `NextWorkingDay`. A taken target falls
    /// through to the next free day.
    NearestWeekday,

    /// Last free day before the original.
    PreviousWorkingDay,
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Shift::NextWorkingDay => "Next Working Day",
            Shift::NextNonHoliday => "Next Non-Holiday",
            Shift::FollowingMonday => "Following Monday",
            Shift::NearestWeekday => "Nearest Weekday",
            Shift::PreviousWorkingDay => "Previous Working Day",
        };
        write!(f, "{name}")
    }
}

impl Shift {
    /// Places a substitute for a holiday on `date`.
    ///
    /// `is_taken` reports dates already occupied by holidays or earlier
    /// substitutes. The returned date never equals `date`.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidDate` if no free day exists within a
    /// year of `date`.
    pub fn apply<F>(&self, date: Date, weekend: WeekendType, is_taken: F) -> HolidayResult<Date>
    where
        F: Fn(Date) -> bool,
    {
        let free = |d: Date| !weekend.is_weekend_date(d) && !is_taken(d);

        match self {
            Shift::NextWorkingDay => scan(date, 1, free),

            Shift::NextNonHoliday => scan(date, 1, |d| !is_taken(d)),

            Shift::FollowingMonday => {
                let ahead = 7 - i64::from(date.weekday().num_days_from_monday());
                let monday = date.checked_add_days(ahead)?;
                if free(monday) {
                    Ok(monday)
                } else {
                    scan(monday, 1, free)
                }
            }

            Shift::NearestWeekday => {
                let target = match date.weekday() {
                    Weekday::Sat => date.checked_add_days(-1)?,
                    Weekday::Sun => date.checked_add_days(1)?,
                    _ => return scan(date, 1, free),
                };
                if free(target) {
                    Ok(target)
                } else {
                    scan(target, 1, |d| d != date && free(d))
                }
            }

            Shift::PreviousWorkingDay => scan(date, -1, free),
        }
    }
}

/// Steps from `from` in `step` increments until `accept` holds.
fn scan<F>(from: Date, step: i64, accept: F) -> HolidayResult<Date>
where
    F: Fn(Date) -> bool,
{
    let mut candidate = from;
    for _ in 0..MAX_SHIFT_DAYS {
        candidate = candidate.checked_add_days(step)?;
        if accept(candidate) {
            return Ok(candidate);
        }
    }
    Err(HolidayError::invalid_date(format!(
        "no free day within {MAX_SHIFT_DAYS} days of {from}"
    )))
}
