//! Region holiday rules.
//!
//! Each region is a [`Region`] constant pairing its metadata with a rule
//! function. Subdivisions compose by calling their parent's rule function.

pub mod japan;
pub mod netherlands;
pub mod south_korea;
pub mod united_kingdom;
pub mod united_states;

use kalends_core::rules::Region;

pub use japan::JAPAN;
pub use netherlands::NETHERLANDS;
pub use south_korea::SOUTH_KOREA;
pub use united_kingdom::{ENGLAND, SCOTLAND, UNITED_KINGDOM};
pub use united_states::UNITED_STATES;

/// Every region shipped with the library.
pub const ALL_REGIONS: [Region; 7] = [
    NETHERLANDS,
    UNITED_KINGDOM,
    ENGLAND,
    SCOTLAND,
    UNITED_STATES,
    JAPAN,
    SOUTH_KOREA,
];
