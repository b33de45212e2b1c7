//! United States federal holidays.
//!
//! A holiday on a Saturday is observed on the preceding Friday and one on
//! a Sunday on the following Monday. The observed day of a New Year's Day
//! falling on a Saturday is 31 December of the previous year.

use chrono::Weekday;
use kalends_core::rules::{DateRule, HolidayRule, Region, RuleSet, Substitution};
use kalends_core::{Date, HolidayResult, Shift};

use crate::helpers;

/// The United States.
pub const UNITED_STATES: Region = Region::new("US", "United States", chrono_tz::America::New_York, rules);

fn observed() -> Substitution {
    Substitution::weekend(Shift::NearestWeekday)
}

/// United States rules for `year`.
pub fn rules(_year: i32) -> HolidayResult<RuleSet> {
    let rules = RuleSet::new()
        .with(helpers::new_years_day().since(1870))
        .with(helpers::nth_weekday("martinLutherKingDay", 1, Weekday::Mon, 3).since(1986))
        .with(HolidayRule::new("washingtonsBirthday", DateRule::Computed(washingtons_birthday)).since(1879))
        .with(HolidayRule::new("memorialDay", DateRule::Computed(memorial_day)).since(1868))
        .with(HolidayRule::fixed("juneteenth", 6, 19).since(2021))
        .with(HolidayRule::fixed("independenceDay", 7, 4).since(1776))
        .with(helpers::nth_weekday("labourDay", 9, Weekday::Mon, 1).since(1887))
        .with(HolidayRule::new("columbusDay", DateRule::Computed(columbus_day)).since(1937))
        .with(HolidayRule::new("veteransDay", DateRule::Computed(veterans_day)).since(1919))
        .with(helpers::nth_weekday("thanksgivingDay", 11, Weekday::Thu, 4).since(1863))
        .with(helpers::christmas_day().since(1870));

    Ok(rules
        .iter()
        .cloned()
        .map(|rule| rule.with_substitution(observed()))
        .collect())
}

/// 22 February until 1970, third Monday of February since 1971.
fn washingtons_birthday(year: i32) -> HolidayResult<Option<Date>> {
    if year <= 1970 {
        return Date::from_ymd(year, 2, 22).map(Some);
    }
    DateRule::NthWeekday {
        month: 2,
        weekday: Weekday::Mon,
        n: 3,
    }
    .evaluate(year)
}

/// 30 May until 1967, last Monday of May since 1968.
fn memorial_day(year: i32) -> HolidayResult<Option<Date>> {
    if year <= 1967 {
        return Date::from_ymd(year, 5, 30).map(Some);
    }
    DateRule::LastWeekday {
        month: 5,
        weekday: Weekday::Mon,
    }
    .evaluate(year)
}

/// 12 October until 1969, second Monday of October since 1970.
fn columbus_day(year: i32) -> HolidayResult<Option<Date>> {
    if year <= 1969 {
        return Date::from_ymd(year, 10, 12).map(Some);
    }
    DateRule::NthWeekday {
        month: 10,
        weekday: Weekday::Mon,
        n: 2,
    }
    .evaluate(year)
}

/// 11 November, except the fourth Monday of October from 1971 to 1977.
fn veterans_day(year: i32) -> HolidayResult<Option<Date>> {
    if (1971..=1977).contains(&year) {
        return DateRule::NthWeekday {
            month: 10,
            weekday: Weekday::Mon,
            n: 4,
        }
        .evaluate(year);
    }
    Date::from_ymd(year, 11, 11).map(Some)
}
