//! Holiday rules shared by many regions.
//!
//! Each function returns an official, always-active rule under the
//! canonical key; regions adjust type, window and substitution with the
//! rule builder methods.

use chrono::Weekday;
use kalends_core::calendars::LunarFestival;
use kalends_core::rules::{DateRule, HolidayRule};

/// New Year's Day, 1 January.
pub fn new_years_day() -> HolidayRule {
    HolidayRule::fixed("newYearsDay", 1, 1)
}

/// Valentine's Day, 14 February.
pub fn valentines_day() -> HolidayRule {
    HolidayRule::fixed("valentinesDay", 2, 14)
}

/// Christmas Day, 25 December.
pub fn christmas_day() -> HolidayRule {
    HolidayRule::fixed("christmasDay", 12, 25)
}

/// Boxing Day, 26 December.
pub fn boxing_day() -> HolidayRule {
    HolidayRule::fixed("boxingDay", 12, 26)
}

/// Second Christmas Day, 26 December.
pub fn second_christmas_day() -> HolidayRule {
    HolidayRule::fixed("secondChristmasDay", 12, 26)
}

/// St. Nicholas' Day, 5 December.
pub fn st_nicholas_day() -> HolidayRule {
    HolidayRule::fixed("stNicholasDay", 12, 5)
}

/// Maundy Thursday, three days before Easter.
pub fn maundy_thursday() -> HolidayRule {
    HolidayRule::easter("maundyThursday", -3)
}

/// Good Friday, two days before Easter.
pub fn good_friday() -> HolidayRule {
    HolidayRule::easter("goodFriday", -2)
}

/// Easter Sunday.
pub fn easter() -> HolidayRule {
    HolidayRule::easter("easter", 0)
}

/// Easter Monday.
pub fn easter_monday() -> HolidayRule {
    HolidayRule::easter("easterMonday", 1)
}

/// Ascension Day, 39 days after Easter.
pub fn ascension_day() -> HolidayRule {
    HolidayRule::easter("ascensionDay", 39)
}

/// Pentecost (Whit Sunday), 49 days after Easter.
pub fn pentecost() -> HolidayRule {
    HolidayRule::easter("pentecost", 49)
}

/// Pentecost Monday (Whit Monday), 50 days after Easter.
pub fn pentecost_monday() -> HolidayRule {
    HolidayRule::easter("pentecostMonday", 50)
}

/// Corpus Christi, 60 days after Easter.
pub fn corpus_christi() -> HolidayRule {
    HolidayRule::easter("corpusChristi", 60)
}

/// A lunisolar holiday `offset` days from `festival`.
pub fn lunar(key: &str, festival: LunarFestival, offset: i64) -> HolidayRule {
    HolidayRule::new(key, DateRule::Lunar { festival, offset })
}

/// The `n`th `weekday` of `month`.
pub fn nth_weekday(key: &str, month: u32, weekday: Weekday, n: u32) -> HolidayRule {
    HolidayRule::new(key, DateRule::NthWeekday { month, weekday, n })
}

/// The last `weekday` of `month`.
pub fn last_weekday(key: &str, month: u32, weekday: Weekday) -> HolidayRule {
    HolidayRule::new(key, DateRule::LastWeekday { month, weekday })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalends_core::types::Date;

    fn date_of(rule: &HolidayRule, year: i32) -> Option<Date> {
        rule.date_rule().evaluate(year).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_easter_family_2024() {
        assert_eq!(date_of(&maundy_thursday(), 2024), Some(ymd(2024, 3, 28)));
        assert_eq!(date_of(&good_friday(), 2024), Some(ymd(2024, 3, 29)));
        assert_eq!(date_of(&easter(), 2024), Some(ymd(2024, 3, 31)));
        assert_eq!(date_of(&easter_monday(), 2024), Some(ymd(2024, 4, 1)));
        assert_eq!(date_of(&ascension_day(), 2024), Some(ymd(2024, 5, 9)));
        assert_eq!(date_of(&pentecost(), 2024), Some(ymd(2024, 5, 19)));
        assert_eq!(date_of(&pentecost_monday(), 2024), Some(ymd(2024, 5, 20)));
        assert_eq!(date_of(&corpus_christi(), 2024), Some(ymd(2024, 5, 30)));
    }

    #[test]
    fn test_keys() {
        assert_eq!(christmas_day().key(), "christmasDay");
        assert_eq!(second_christmas_day().key(), "secondChristmasDay");
        assert_eq!(
            lunar("chuseok", LunarFestival::MidAutumn, 0).key(),
            "chuseok"
        );
    }
}
