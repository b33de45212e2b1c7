//! South Korea public holidays.
//!
//! Seollal, Buddha's Birthday and Chuseok follow the lunisolar calendar
//! and exist only for the years covered by the lunar table.
//!
//! Substitute holidays were introduced in 2014 for Seollal, Chuseok (when
//! a day falls on a Sunday or another holiday) and Children's Day (on a
//! weekend or Buddha's Birthday). The national days followed in 2021,
//! Buddha's Birthday and Christmas in 2023.

use chrono::Weekday;
use kalends_core::calendars::LunarFestival;
use kalends_core::rules::{Collision, DateRule, HolidayRule, Region, RuleSet, Substitution};
use kalends_core::{Date, HolidayResult, Shift};

use crate::helpers;

/// South Korea.
pub const SOUTH_KOREA: Region = Region::new("KR", "South Korea", chrono_tz::Asia::Seoul, rules);

const ESTABLISHMENT_YEAR: i32 = 1949;

fn weekend() -> Substitution {
    Substitution::weekend(Shift::NextWorkingDay)
}

fn sunday_or_collision() -> Substitution {
    Substitution::on_days([Weekday::Sun], Shift::NextWorkingDay).on_collision(Collision::Any)
}

/// Attaches `substitution` to `rule` from `since` onwards.
fn substituted_from(year: i32, since: i32, rule: HolidayRule, substitution: Substitution) -> HolidayRule {
    if year >= since {
        rule.with_substitution(substitution)
    } else {
        rule
    }
}

/// South Korea rules for `year`.
pub fn rules(year: i32) -> HolidayResult<RuleSet> {
    if year < ESTABLISHMENT_YEAR {
        return Ok(RuleSet::new());
    }

    let mut rules = RuleSet::new().with(helpers::new_years_day());
    rules.extend(lunar_triple(year, LunarFestival::LunarNewYear, "Seollal", "seollal"));

    rules.extend([
        substituted_from(
            year,
            2021,
            HolidayRule::fixed("independenceMovementDay", 3, 1),
            weekend(),
        ),
        HolidayRule::fixed("arborDay", 4, 5).removed_in(2006),
        substituted_from(
            year,
            2014,
            HolidayRule::fixed("childrensDay", 5, 5).since(1970),
            weekend().on_collision(Collision::With(vec!["buddhasBirthday".to_string()])),
        ),
        substituted_from(
            year,
            2023,
            helpers::lunar("buddhasBirthday", LunarFestival::BuddhasBirthday, 0).since(1975),
            weekend(),
        ),
        HolidayRule::fixed("memorialDay", 6, 6).since(1956),
        HolidayRule::fixed("constitutionDay", 7, 17).removed_in(2008),
        substituted_from(year, 2021, HolidayRule::fixed("liberationDay", 8, 15), weekend()),
    ]);

    rules.extend(lunar_triple(year, LunarFestival::MidAutumn, "Chuseok", "chuseok"));

    rules.extend([
        substituted_from(
            year,
            2021,
            HolidayRule::fixed("nationalFoundationDay", 10, 3),
            weekend(),
        ),
        substituted_from(
            year,
            2021,
            HolidayRule::new("hangulDay", DateRule::Computed(hangul_day)),
            weekend(),
        ),
        substituted_from(year, 2023, helpers::christmas_day(), weekend()),
    ]);

    Ok(rules)
}

/// The eve, the day itself and the day after a lunar festival.
fn lunar_triple(year: i32, festival: LunarFestival, suffix: &str, key: &str) -> [HolidayRule; 3] {
    [
        (format!("dayBefore{suffix}"), -1),
        (key.to_string(), 0),
        (format!("dayAfter{suffix}"), 1),
    ]
    .map(|(key, offset)| {
        substituted_from(
            year,
            2014,
            helpers::lunar(&key, festival, offset),
            sunday_or_collision(),
        )
    })
}

/// Hangul Day lost its holiday status from 1991 to 2012.
fn hangul_day(year: i32) -> HolidayResult<Option<Date>> {
    if (1991..=2012).contains(&year) {
        return Ok(None);
    }
    Date::from_ymd(year, 10, 9).map(Some)
}
