//! Netherlands.
//!
//! ## Holidays
//!
//! - New Year's Day, Easter, Easter Monday, Ascension Day, Pentecost,
//!   Pentecost Monday, Christmas Day, Second Christmas Day (official)
//! - King's Day (27 April since 2014) and Queen's Day (before 2014)
//! - Liberation Day (5 May; official since 1990, observance before)
//! - Good Friday, St. Nicholas' Day (observances)
//! - Summer and winter time (seasons)
//!
//! Dutch holidays falling on a weekend are not substituted; King's and
//! Queen's Day move off Sunday instead.

use chrono::Weekday;
use kalends_core::rules::{DateRule, HolidayRule, Region, RuleSet};
use kalends_core::{Date, HolidayResult, HolidayType};

use crate::helpers;

/// The Netherlands.
pub const NETHERLANDS: Region = Region::new("NL", "Netherlands", chrono_tz::Europe::Amsterdam, rules);

/// Netherlands rules for `year`.
pub fn rules(year: i32) -> HolidayResult<RuleSet> {
    let liberation_type = if year >= 1990 {
        HolidayType::Official
    } else {
        HolidayType::Observance
    };

    Ok(RuleSet::new()
        .with(helpers::new_years_day())
        .with(helpers::valentines_day().with_type(HolidayType::Other))
        .with(helpers::good_friday().with_type(HolidayType::Observance))
        .with(helpers::easter())
        .with(helpers::easter_monday())
        .with(
            HolidayRule::new("queensDay", DateRule::Computed(queens_day))
                .since(1891)
                .until(2013),
        )
        .with(HolidayRule::new("kingsDay", DateRule::Computed(kings_day)).since(2014))
        .with(
            HolidayRule::fixed("liberationDay", 5, 5)
                .with_type(liberation_type)
                .since(1947),
        )
        .with(helpers::ascension_day())
        .with(helpers::pentecost())
        .with(helpers::pentecost_monday())
        .with(
            helpers::nth_weekday("princesDay", 9, Weekday::Tue, 3)
                .with_type(HolidayType::Other)
                .since(1815),
        )
        .with(
            helpers::last_weekday("summerTime", 3, Weekday::Sun)
                .with_type(HolidayType::Season)
                .since(1977),
        )
        .with(
            HolidayRule::new("winterTime", DateRule::Computed(winter_time))
                .with_type(HolidayType::Season)
                .since(1977),
        )
        .with(helpers::st_nicholas_day().with_type(HolidayType::Observance))
        .with(helpers::christmas_day())
        .with(helpers::second_christmas_day()))
}

/// 27 April, or Saturday 26 April when the 27th is a Sunday.
fn kings_day(year: i32) -> HolidayResult<Option<Date>> {
    let date = Date::from_ymd(year, 4, 27)?;
    if date.weekday() == Weekday::Sun {
        return Ok(Some(date.checked_add_days(-1)?));
    }
    Ok(Some(date))
}

/// 31 August until 1948, 30 April afterwards.
///
/// A Sunday date moved to Monday before 1980 and to Saturday from 1980.
fn queens_day(year: i32) -> HolidayResult<Option<Date>> {
    let date = if year <= 1948 {
        Date::from_ymd(year, 8, 31)?
    } else {
        Date::from_ymd(year, 4, 30)?
    };
    if date.weekday() != Weekday::Sun {
        return Ok(Some(date));
    }
    let offset = if year < 1980 { 1 } else { -1 };
    Ok(Some(date.checked_add_days(offset)?))
}

/// Last Sunday of September until 1995, of October since 1996.
fn winter_time(year: i32) -> HolidayResult<Option<Date>> {
    let month = if year <= 1995 { 9 } else { 10 };
    DateRule::LastWeekday {
        month,
        weekday: Weekday::Sun,
    }
    .evaluate(year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalends_core::rules::RegionProvider;
    use kalends_core::Resolver;
    use std::sync::Arc;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn resolve(year: i32) -> kalends_core::HolidayCollection {
        Resolver::default()
            .resolve(Arc::new(NETHERLANDS), year, "nl_NL")
            .unwrap()
    }

    #[test]
    fn test_region_metadata() {
        assert_eq!(NETHERLANDS.code(), "NL");
        assert_eq!(NETHERLANDS.timezone(), chrono_tz::Europe::Amsterdam);
    }

    #[test]
    fn test_easter_2010() {
        let holidays = resolve(2010);
        assert_eq!(holidays.get("easter").unwrap().date(), ymd(2010, 4, 4));
        assert_eq!(holidays.get("easterMonday").unwrap().date(), ymd(2010, 4, 5));
        assert_eq!(holidays.get("ascensionDay").unwrap().date(), ymd(2010, 5, 13));
    }

    #[test]
    fn test_kings_and_queens_day() {
        assert_eq!(resolve(2014).get("kingsDay").unwrap().date(), ymd(2014, 4, 26));
        assert_eq!(resolve(2023).get("kingsDay").unwrap().date(), ymd(2023, 4, 27));
        assert!(resolve(2014).get("queensDay").is_none());

        assert_eq!(resolve(2006).get("queensDay").unwrap().date(), ymd(2006, 4, 29));
        assert_eq!(resolve(1978).get("queensDay").unwrap().date(), ymd(1978, 5, 1));
        assert_eq!(resolve(1900).get("queensDay").unwrap().date(), ymd(1900, 8, 31));
        assert!(resolve(2013).get("kingsDay").is_none());
    }

    #[test]
    fn test_liberation_day_type_history() {
        assert!(resolve(1946).get("liberationDay").is_none());
        assert_eq!(
            resolve(1985).get("liberationDay").unwrap().holiday_type(),
            HolidayType::Observance
        );
        assert_eq!(
            resolve(1990).get("liberationDay").unwrap().holiday_type(),
            HolidayType::Official
        );
    }

    #[test]
    fn test_no_substitutes_and_types() {
        let holidays = resolve(2022);
        assert!(holidays.substitutes().is_empty());
        assert_eq!(
            holidays.official().keys(),
            vec![
                "newYearsDay",
                "easter",
                "easterMonday",
                "kingsDay",
                "liberationDay",
                "ascensionDay",
                "pentecost",
                "pentecostMonday",
                "christmasDay",
                "secondChristmasDay",
            ]
        );
        assert_eq!(holidays.seasons().len(), 2);
        assert_eq!(
            holidays.get("winterTime").unwrap().date(),
            ymd(2022, 10, 30)
        );
    }
}
