//! Japan national holidays.
//!
//! National holidays exist since the 1948 holiday law. From 1973 a holiday
//! falling on a Sunday is substituted by the next day that is not itself a
//! holiday.
//!
//! The equinox days follow the astronomical approximation published by the
//! National Astronomical Observatory; years after 2150 have no equinox
//! holiday.

use chrono::Weekday;
use kalends_core::rules::{DateRule, HolidayRule, Region, RuleSet, Substitution};
use kalends_core::{Date, HolidayResult, Shift};

use crate::helpers;

/// Japan.
pub const JAPAN: Region = Region::new("JP", "Japan", chrono_tz::Asia::Tokyo, rules);

const HOLIDAY_LAW_YEAR: i32 = 1948;
const SUBSTITUTION_YEAR: i32 = 1973;

/// Japan rules for `year`.
pub fn rules(year: i32) -> HolidayResult<RuleSet> {
    if year < HOLIDAY_LAW_YEAR {
        return Ok(RuleSet::new());
    }

    let mut rules = RuleSet::new()
        .with(helpers::new_years_day())
        .with(HolidayRule::new("comingOfAgeDay", DateRule::Computed(coming_of_age_day)))
        .with(HolidayRule::fixed("nationalFoundationDay", 2, 11).since(1967))
        .with(HolidayRule::new("emperorsBirthday", DateRule::Computed(emperors_birthday)))
        .with(HolidayRule::new("vernalEquinoxDay", DateRule::Computed(vernal_equinox_day)))
        .with(HolidayRule::fixed("showaDay", 4, 29).since(2007))
        .with(HolidayRule::fixed("constitutionMemorialDay", 5, 3))
        .with(HolidayRule::new("greeneryDay", DateRule::Computed(greenery_day)).since(1989))
        .with(HolidayRule::fixed("childrensDay", 5, 5))
        .with(HolidayRule::new("marineDay", DateRule::Computed(marine_day)).since(1996))
        .with(HolidayRule::new("mountainDay", DateRule::Computed(mountain_day)).since(2016))
        .with(
            HolidayRule::new("respectForTheAgedDay", DateRule::Computed(respect_for_the_aged_day))
                .since(1966),
        )
        .with(HolidayRule::new("autumnalEquinoxDay", DateRule::Computed(autumnal_equinox_day)))
        .with(HolidayRule::new("sportsDay", DateRule::Computed(sports_day)).since(1966))
        .with(HolidayRule::fixed("cultureDay", 11, 3))
        .with(HolidayRule::fixed("laborThanksgivingDay", 11, 23));

    if year == 2019 {
        rules.extend([
            HolidayRule::new("abdicationDay", DateRule::On(Date::from_ymd(2019, 4, 30)?)),
            HolidayRule::new("enthronementDay", DateRule::On(Date::from_ymd(2019, 5, 1)?)),
            HolidayRule::new("citizensHoliday", DateRule::On(Date::from_ymd(2019, 5, 2)?)),
            HolidayRule::new(
                "enthronementProclamationCeremony",
                DateRule::On(Date::from_ymd(2019, 10, 22)?),
            ),
        ]);
    }

    if year < SUBSTITUTION_YEAR {
        return Ok(rules);
    }
    let substitution = Substitution::on_days([Weekday::Sun], Shift::NextNonHoliday);
    Ok(rules
        .iter()
        .cloned()
        .map(|rule| rule.with_substitution(substitution.clone()))
        .collect())
}

fn nth_monday(year: i32, month: u32, n: u32) -> HolidayResult<Option<Date>> {
    DateRule::NthWeekday {
        month,
        weekday: Weekday::Mon,
        n,
    }
    .evaluate(year)
}

/// 15 January until 1999, second Monday of January since 2000.
fn coming_of_age_day(year: i32) -> HolidayResult<Option<Date>> {
    if year < 2000 {
        return Date::from_ymd(year, 1, 15).map(Some);
    }
    nth_monday(year, 1, 2)
}

/// The reigning emperor's birthday. None was held in 2019.
fn emperors_birthday(year: i32) -> HolidayResult<Option<Date>> {
    match year {
        ..=1988 => Date::from_ymd(year, 4, 29).map(Some),
        1989..=2018 => Date::from_ymd(year, 12, 23).map(Some),
        2019 => Ok(None),
        _ => Date::from_ymd(year, 2, 23).map(Some),
    }
}

/// 29 April until 2006, then 4 May once Showa Day took 29 April.
fn greenery_day(year: i32) -> HolidayResult<Option<Date>> {
    if year < 2007 {
        return Date::from_ymd(year, 4, 29).map(Some);
    }
    Date::from_ymd(year, 5, 4).map(Some)
}

fn marine_day(year: i32) -> HolidayResult<Option<Date>> {
    match year {
        ..=2002 => Date::from_ymd(year, 7, 20).map(Some),
        2020 => Date::from_ymd(year, 7, 23).map(Some),
        2021 => Date::from_ymd(year, 7, 22).map(Some),
        _ => nth_monday(year, 7, 3),
    }
}

fn mountain_day(year: i32) -> HolidayResult<Option<Date>> {
    match year {
        2020 => Date::from_ymd(year, 8, 10).map(Some),
        2021 => Date::from_ymd(year, 8, 8).map(Some),
        _ => Date::from_ymd(year, 8, 11).map(Some),
    }
}

fn respect_for_the_aged_day(year: i32) -> HolidayResult<Option<Date>> {
    if year <= 2002 {
        return Date::from_ymd(year, 9, 15).map(Some);
    }
    nth_monday(year, 9, 3)
}

/// Health and Sports Day until 2019, Sports Day since.
fn sports_day(year: i32) -> HolidayResult<Option<Date>> {
    match year {
        ..=1999 => Date::from_ymd(year, 10, 10).map(Some),
        2020 => Date::from_ymd(year, 7, 24).map(Some),
        2021 => Date::from_ymd(year, 7, 23).map(Some),
        _ => nth_monday(year, 10, 2),
    }
}

fn vernal_equinox_day(year: i32) -> HolidayResult<Option<Date>> {
    let day = match year {
        ..=1979 => equinox(year, 20.8357, 1983),
        1980..=2099 => equinox(year, 20.8431, 1980),
        2100..=2150 => equinox(year, 21.8510, 1980),
        _ => return Ok(None),
    };
    Date::from_ymd(year, 3, day).map(Some)
}

fn autumnal_equinox_day(year: i32) -> HolidayResult<Option<Date>> {
    let day = match year {
        ..=1979 => equinox(year, 23.2588, 1983),
        1980..=2099 => equinox(year, 23.2488, 1980),
        2100..=2150 => equinox(year, 24.2488, 1980),
        _ => return Ok(None),
    };
    Date::from_ymd(year, 9, day).map(Some)
}

/// Day of month for an equinox: `base + 0.242194 (year - 1980) - (year - leap_base) / 4`,
/// with the leap term truncated toward zero.
fn equinox(year: i32, base: f64, leap_base: i32) -> u32 {
    let drift = 0.242_194 * f64::from(year - 1980);
    let leap = f64::from((year - leap_base) / 4);
    (base + drift - leap).floor() as u32
}
