//! # Kalends Regions
//!
//! Holiday rules for the regions shipped with Kalends, the shared holiday
//! helpers they are built from, the embedded translation table and the
//! provider registry.
//!
//! | Code     | Region         |
//! |----------|----------------|
//! | `NL`     | Netherlands    |
//! | `GB`     | United Kingdom |
//! | `GB-ENG` | England        |
//! | `GB-SCT` | Scotland       |
//! | `US`     | United States  |
//! | `JP`     | Japan          |
//! | `KR`     | South Korea    |
//!
//! ## Example
//!
//! ```rust
//! use kalends_core::Resolver;
//! use kalends_regions::registry;
//!
//! let scotland = registry::provider("Scotland").unwrap();
//! let holidays = Resolver::default().resolve(scotland, 2022, "en_GB").unwrap();
//!
//! assert!(holidays.contains("stAndrewsDay"));
//! assert!(!holidays.contains("easterMonday"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]

pub mod helpers;
pub mod regions;
pub mod registry;
pub mod translations;

pub use regions::{
    ALL_REGIONS, ENGLAND, JAPAN, NETHERLANDS, SCOTLAND, SOUTH_KOREA, UNITED_KINGDOM, UNITED_STATES,
};
pub use registry::{provider, providers, ProviderRegistry};
