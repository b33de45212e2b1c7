//! Domain value types.
//!
//! - [`Date`]: calendar date with day granularity
//! - [`CalendarDate`]: anything that carries a wall-clock date
//! - [`HolidayType`]: filter classification of a holiday
//! - [`Locale`]: validated locale tag with explicit fallback order
//! - [`Translations`]: locale to display-name mapping

mod date;
mod holiday_type;
mod locale;
mod translations;

pub use date::{CalendarDate, Date};
pub use holiday_type::HolidayType;
pub use locale::Locale;
pub use translations::Translations;
