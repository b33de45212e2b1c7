//! United Kingdom bank holidays.
//!
//! [`UNITED_KINGDOM`] carries the holidays common to the whole kingdom.
//! [`ENGLAND`] uses them unchanged and [`SCOTLAND`] builds on them: it
//! adds 2 January and St Andrew's Day, observes the summer holiday on the
//! first Monday of August and drops Easter Monday.
//!
//! Weekend holidays are substituted by the next working day.

use chrono::Weekday;
use kalends_core::rules::{DateRule, HolidayRule, Region, RuleSet, Substitution};
use kalends_core::{Date, HolidayResult, HolidayType, Shift};

use crate::helpers;

/// The United Kingdom.
pub const UNITED_KINGDOM: Region = Region::new("GB", "United Kingdom", chrono_tz::Europe::London, rules);

/// England.
pub const ENGLAND: Region = Region::new("GB-ENG", "England", chrono_tz::Europe::London, england_rules);

/// Scotland.
pub const SCOTLAND: Region = Region::new("GB-SCT", "Scotland", chrono_tz::Europe::London, scotland_rules);

fn substitutable() -> Substitution {
    Substitution::weekend(Shift::NextWorkingDay)
}

/// United Kingdom rules for `year`.
pub fn rules(year: i32) -> HolidayResult<RuleSet> {
    let mut rules = RuleSet::new()
        .with(
            helpers::new_years_day()
                .with_type(HolidayType::Bank)
                .since(1974)
                .with_substitution(substitutable()),
        )
        .with(helpers::good_friday())
        .with(helpers::easter_monday().with_type(HolidayType::Bank))
        .with(
            HolidayRule::new("mayDayBankHoliday", DateRule::Computed(may_day))
                .with_type(HolidayType::Bank)
                .since(1978),
        )
        .with(
            HolidayRule::new("springBankHoliday", DateRule::Computed(spring_bank_holiday))
                .with_type(HolidayType::Bank)
                .since(1965),
        )
        .with(
            helpers::pentecost_monday()
                .with_type(HolidayType::Bank)
                .until(1964),
        )
        .with(
            HolidayRule::new("summerBankHoliday", DateRule::Computed(summer_bank_holiday))
                .with_type(HolidayType::Bank),
        )
        .with(helpers::christmas_day().with_substitution(substitutable()))
        .with(
            helpers::boxing_day()
                .with_type(HolidayType::Bank)
                .with_substitution(substitutable()),
        )
        .with(
            HolidayRule::new("royalWedding", DateRule::Computed(royal_wedding))
                .with_type(HolidayType::Bank),
        );

    for (key, date) in one_off_holidays()? {
        rules.add(HolidayRule::new(key, DateRule::On(date)).with_type(HolidayType::Bank));
    }

    tracing::trace!(year, rules = rules.len(), "built United Kingdom rules");
    Ok(rules)
}

/// England rules for `year`.
pub fn england_rules(year: i32) -> HolidayResult<RuleSet> {
    rules(year)
}

/// Scotland rules for `year`.
pub fn scotland_rules(year: i32) -> HolidayResult<RuleSet> {
    let mut rules = rules(year)?;
    rules.remove("easterMonday");
    rules.replace(
        helpers::nth_weekday("summerBankHoliday", 8, Weekday::Mon, 1).with_type(HolidayType::Bank),
    );
    rules.add(
        HolidayRule::fixed("secondNewYearsDay", 1, 2)
            .with_type(HolidayType::Bank)
            .with_substitution(substitutable()),
    );
    rules.add(
        HolidayRule::fixed("stAndrewsDay", 11, 30)
            .with_type(HolidayType::Bank)
            .since(2007)
            .with_substitution(Substitution::weekend(Shift::FollowingMonday)),
    );
    Ok(rules)
}

/// First Monday of May, moved to 8 May for the VE Day anniversaries.
fn may_day(year: i32) -> HolidayResult<Option<Date>> {
    match year {
        1995 | 2020 => Date::from_ymd(year, 5, 8).map(Some),
        _ => DateRule::NthWeekday {
            month: 5,
            weekday: Weekday::Mon,
            n: 1,
        }
        .evaluate(year),
    }
}

/// Last Monday of May, except in the jubilee years.
fn spring_bank_holiday(year: i32) -> HolidayResult<Option<Date>> {
    match year {
        1977 => Date::from_ymd(year, 6, 6).map(Some),
        2002 | 2012 => Date::from_ymd(year, 6, 4).map(Some),
        2022 => Date::from_ymd(year, 6, 2).map(Some),
        _ => DateRule::LastWeekday {
            month: 5,
            weekday: Weekday::Mon,
        }
        .evaluate(year),
    }
}

/// First Monday of August until 1964, last Monday since 1965.
fn summer_bank_holiday(year: i32) -> HolidayResult<Option<Date>> {
    let rule = if year < 1965 {
        DateRule::NthWeekday {
            month: 8,
            weekday: Weekday::Mon,
            n: 1,
        }
    } else {
        DateRule::LastWeekday {
            month: 8,
            weekday: Weekday::Mon,
        }
    };
    rule.evaluate(year)
}

fn royal_wedding(year: i32) -> HolidayResult<Option<Date>> {
    match year {
        1973 => Date::from_ymd(1973, 11, 14).map(Some),
        1981 => Date::from_ymd(1981, 7, 29).map(Some),
        2011 => Date::from_ymd(2011, 4, 29).map(Some),
        _ => Ok(None),
    }
}

fn one_off_holidays() -> HolidayResult<[(&'static str, Date); 7]> {
    Ok([
        ("queensSilverJubilee", Date::from_ymd(1977, 6, 7)?),
        ("millenniumDay", Date::from_ymd(1999, 12, 31)?),
        ("queensGoldenJubilee", Date::from_ymd(2002, 6, 3)?),
        ("queensDiamondJubilee", Date::from_ymd(2012, 6, 5)?),
        ("queensPlatinumJubilee", Date::from_ymd(2022, 6, 3)?),
        ("queenElizabethFuneral", Date::from_ymd(2022, 9, 19)?),
        ("kingCharlesCoronation", Date::from_ymd(2023, 5, 8)?),
    ])
}
