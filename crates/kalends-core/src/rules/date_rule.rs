//! How a holiday's date is computed for a year.

use chrono::Weekday;

use crate::calendars::{
    easter_sunday, last_weekday_of_month, lunar_date, nth_weekday_of_month,
    orthodox_easter_sunday, weekday_on_or_after, LunarFestival,
};
use crate::error::{HolidayError, HolidayResult};
use crate::types::Date;

/// Date computation of a holiday rule.
///
/// Evaluation yields `Ok(None)` when the holiday simply has no date this
/// year (a one-off date in another year, a gap in the lunar table) and an
/// error when the rule asks for a date that cannot exist.
#[derive(Debug, Clone, Copy)]
pub enum DateRule {
    /// The same month and day every year.
    Fixed {
        /// Month (1-12).
        month: u32,
        /// Day of month.
        day: u32,
    },

    /// The `n`th `weekday` of `month` (e.g. third Monday of January).
    NthWeekday {
        /// Month (1-12).
        month: u32,
        /// Weekday to count.
        weekday: Weekday,
        /// Occurrence, starting at 1.
        n: u32,
    },

    /// The last `weekday` of `month`.
    LastWeekday {
        /// Month (1-12).
        month: u32,
        /// Weekday to find.
        weekday: Weekday,
    },

    /// The first `weekday` on or after `month`/`day`.
    WeekdayOnOrAfter {
        /// Month (1-12).
        month: u32,
        /// Day the search starts on.
        day: u32,
        /// Weekday to find.
        weekday: Weekday,
    },

    /// Western Easter Sunday plus `offset` days.
    Easter {
        /// Days after Easter Sunday (negative for before).
        offset: i64,
    },

    /// Orthodox Easter Sunday plus `offset` days.
    OrthodoxEaster {
        /// Days after Orthodox Easter Sunday.
        offset: i64,
    },

    /// A lunisolar festival plus `offset` days.
    Lunar {
        /// The anchoring festival.
        festival: LunarFestival,
        /// Days after the festival (e.g. -1 for the eve).
        offset: i64,
    },

    /// A single date; only observed in that date's year.
    On(Date),

    /// Region-specific computation.
    Computed(fn(i32) -> HolidayResult<Option<Date>>),
}

impl DateRule {
    /// Shorthand for [`DateRule::Fixed`].
    #[must_use]
    pub const fn fixed(month: u32, day: u32) -> Self {
        DateRule::Fixed { month, day }
    }

    /// Shorthand for [`DateRule::Easter`].
    #[must_use]
    pub const fn easter(offset: i64) -> Self {
        DateRule::Easter { offset }
    }

    /// Computes the date for `year`.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidDate` if the rule describes a date that
    /// does not exist in `year`.
    pub fn evaluate(&self, year: i32) -> HolidayResult<Option<Date>> {
        match *self {
            DateRule::Fixed { month, day } => Date::from_ymd(year, month, day).map(Some),

            DateRule::NthWeekday { month, weekday, n } => {
                nth_weekday_of_month(year, month, weekday, n)
                    .map(|d| Some(Date::from(d)))
                    .ok_or_else(|| {
                        HolidayError::invalid_date(format!(
                            "no occurrence {n} of {weekday} in {year}-{month:02}"
                        ))
                    })
            }

            DateRule::LastWeekday { month, weekday } => last_weekday_of_month(year, month, weekday)
                .map(|d| Some(Date::from(d)))
                .ok_or_else(|| {
                    HolidayError::invalid_date(format!("invalid month {year}-{month:02}"))
                }),

            DateRule::WeekdayOnOrAfter {
                month,
                day,
                weekday,
            } => weekday_on_or_after(year, month, day, weekday)
                .map(|d| Some(Date::from(d)))
                .ok_or_else(|| {
                    HolidayError::invalid_date(format!("invalid date {year}-{month:02}-{day:02}"))
                }),

            DateRule::Easter { offset } => easter_sunday(year)?.checked_add_days(offset).map(Some),

            DateRule::OrthodoxEaster { offset } => {
                orthodox_easter_sunday(year)?.checked_add_days(offset).map(Some)
            }

            DateRule::Lunar { festival, offset } => match lunar_date(festival, year) {
                Some(date) => date.checked_add_days(offset).map(Some),
                None => Ok(None),
            },

            DateRule::On(date) => Ok((date.year() == year).then_some(date)),

            DateRule::Computed(compute) => compute(year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_fixed() {
        assert_eq!(DateRule::fixed(12, 25).evaluate(2022).unwrap(), Some(ymd(2022, 12, 25)));
        assert!(matches!(
            DateRule::fixed(2, 30).evaluate(2022),
            Err(HolidayError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_weekday_rules() {
        let mlk = DateRule::NthWeekday {
            month: 1,
            weekday: Weekday::Mon,
            n: 3,
        };
        assert_eq!(mlk.evaluate(2025).unwrap(), Some(ymd(2025, 1, 20)));

        let memorial = DateRule::LastWeekday {
            month: 5,
            weekday: Weekday::Mon,
        };
        assert_eq!(memorial.evaluate(2025).unwrap(), Some(ymd(2025, 5, 26)));

        let fifth = DateRule::NthWeekday {
            month: 2,
            weekday: Weekday::Mon,
            n: 5,
        };
        assert!(fifth.evaluate(2025).is_err());

        let midsummer = DateRule::WeekdayOnOrAfter {
            month: 6,
            day: 20,
            weekday: Weekday::Sat,
        };
        assert_eq!(midsummer.evaluate(2024).unwrap(), Some(ymd(2024, 6, 22)));
    }

    #[test]
    fn test_easter_offsets() {
        assert_eq!(DateRule::easter(-2).evaluate(2010).unwrap(), Some(ymd(2010, 4, 2)));
        assert_eq!(DateRule::easter(39).evaluate(2010).unwrap(), Some(ymd(2010, 5, 13)));
        assert_eq!(
            DateRule::OrthodoxEaster { offset: 1 }.evaluate(2024).unwrap(),
            Some(ymd(2024, 5, 6))
        );
    }

    #[test]
    fn test_lunar_gap_is_absent() {
        let eve = DateRule::Lunar {
            festival: LunarFestival::LunarNewYear,
            offset: -1,
        };
        assert_eq!(eve.evaluate(2025).unwrap(), Some(ymd(2025, 1, 28)));
        assert_eq!(eve.evaluate(1990).unwrap(), None);
    }

    #[test]
    fn test_one_off() {
        let rule = DateRule::On(ymd(2022, 9, 19));
        assert_eq!(rule.evaluate(2022).unwrap(), Some(ymd(2022, 9, 19)));
        assert_eq!(rule.evaluate(2023).unwrap(), None);
    }

    #[test]
    fn test_computed() {
        fn leap_day(year: i32) -> HolidayResult<Option<Date>> {
            Ok(Date::from_ymd(year, 2, 29).ok())
        }
        let rule = DateRule::Computed(leap_day);
        assert_eq!(rule.evaluate(2024).unwrap(), Some(ymd(2024, 2, 29)));
        assert_eq!(rule.evaluate(2023).unwrap(), None);
    }
}
