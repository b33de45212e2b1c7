//! Lunisolar festival lookup.
//!
//! Festivals that follow the lunisolar calendar cannot be derived from a
//! closed-form formula, so their Gregorian dates come from a precomputed
//! table (Korean reckoning, UTC+9). Years outside the table have no entry;
//! callers treat that as "not observed", never as an error.

use serde::{Deserialize, Serialize};

use crate::types::Date;

/// First year covered by the table.
pub const LUNAR_FIRST_YEAR: i32 = 2000;
/// Last year covered by the table.
pub const LUNAR_LAST_YEAR: i32 = 2030;

/// Festivals available from the lunisolar table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarFestival {
    /// First day of the first lunar month (Seollal, Chunjie).
    LunarNewYear,
    /// Eighth day of the fourth lunar month.
    BuddhasBirthday,
    /// Fifteenth day of the eighth lunar month (Chuseok, Zhongqiu).
    MidAutumn,
}

impl LunarFestival {
    /// Maps a holiday key onto the festival it is anchored to.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "lunarNewYear" | "seollal" => Some(Self::LunarNewYear),
            "buddhasBirthday" => Some(Self::BuddhasBirthday),
            "midAutumnFestival" | "chuseok" => Some(Self::MidAutumn),
            _ => None,
        }
    }

    fn table(&self) -> &'static [(u32, u32)] {
        match self {
            Self::LunarNewYear => &LUNAR_NEW_YEAR,
            Self::BuddhasBirthday => &BUDDHAS_BIRTHDAY,
            Self::MidAutumn => &MID_AUTUMN,
        }
    }
}

const TABLE_LEN: usize = (LUNAR_LAST_YEAR - LUNAR_FIRST_YEAR + 1) as usize;

/// (month, day) per year from `LUNAR_FIRST_YEAR`.
const LUNAR_NEW_YEAR: [(u32, u32); TABLE_LEN] = [
    (2, 5), (1, 24), (2, 12), (2, 1), (1, 22), (2, 9), (1, 29), (2, 18), (2, 7), (1, 26),
    (2, 14), (2, 3), (1, 23), (2, 10), (1, 31), (2, 19), (2, 8), (1, 28), (2, 16), (2, 5),
    (1, 25), (2, 12), (2, 1), (1, 22), (2, 10), (1, 29), (2, 17), (2, 7), (1, 26), (2, 13),
    (2, 3),
];

const BUDDHAS_BIRTHDAY: [(u32, u32); TABLE_LEN] = [
    (5, 11), (5, 1), (5, 19), (5, 8), (5, 26), (5, 15), (5, 5), (5, 24), (5, 12), (5, 2),
    (5, 21), (5, 10), (5, 28), (5, 17), (5, 6), (5, 25), (5, 14), (5, 3), (5, 22), (5, 12),
    (4, 30), (5, 19), (5, 8), (5, 27), (5, 15), (5, 5), (5, 24), (5, 13), (5, 2), (5, 20),
    (5, 9),
];

const MID_AUTUMN: [(u32, u32); TABLE_LEN] = [
    (9, 12), (10, 1), (9, 21), (9, 11), (9, 28), (9, 18), (10, 6), (9, 25), (9, 14), (10, 3),
    (9, 22), (9, 12), (9, 30), (9, 19), (9, 8), (9, 27), (9, 15), (10, 4), (9, 24), (9, 13),
    (10, 1), (9, 21), (9, 10), (9, 29), (9, 17), (10, 6), (9, 25), (9, 15), (10, 3), (9, 22),
    (9, 12),
];

/// Gregorian date of `festival` in `year`, or `None` outside the table.
pub fn lunar_date(festival: LunarFestival, year: i32) -> Option<Date> {
    if !(LUNAR_FIRST_YEAR..=LUNAR_LAST_YEAR).contains(&year) {
        return None;
    }
    let (month, day) = festival.table()[(year - LUNAR_FIRST_YEAR) as usize];
    Date::from_ymd(year, month, day).ok()
}

/// Lookup by holiday key, as used by region rules.
pub fn lunar_date_for_key(key: &str, year: i32) -> Option<Date> {
    LunarFestival::from_key(key).and_then(|festival| lunar_date(festival, year))
}
