//! CLI command implementations.

pub mod holidays;
pub mod regions;
pub mod workdays;

pub use holidays::HolidaysArgs;
pub use workdays::{CheckArgs, StepArgs, WorkdaysArgs};

use std::path::Path;

use kalends::{Date, EngineConfig, Kalends};

use crate::error::{CliError, CliResult};

/// Builds the engine from an optional configuration file.
pub fn engine(config: Option<&Path>) -> CliResult<Kalends> {
    let engine = match config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading engine configuration");
            Kalends::from_config_file(path)?
        }
        None => Kalends::new(EngineConfig::default())?,
    };
    Ok(engine)
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}
