//! Date computations used by holiday rules.
//!
//! This module provides:
//! - Easter computus (Julian up to 1752, Gregorian after) and Orthodox Easter
//! - Lunisolar festival lookup from a static table
//! - Weekend layouts and weekday-of-month arithmetic

mod easter;
mod lunar;
mod weekend;

pub use easter::{
    compute_easter, easter_sunday, local_midnight, orthodox_easter_sunday, LAST_JULIAN_YEAR,
};
pub use lunar::{
    lunar_date, lunar_date_for_key, LunarFestival, LUNAR_FIRST_YEAR, LUNAR_LAST_YEAR,
};
pub use weekend::{last_weekday_of_month, nth_weekday_of_month, weekday_on_or_after, WeekendType};
