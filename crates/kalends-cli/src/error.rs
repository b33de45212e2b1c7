//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid number of days to step.
    #[error("Invalid day count: {0}. Must be at least 1.")]
    InvalidDays(u32),

    /// Error raised by the holiday engine.
    #[error(transparent)]
    Holiday(#[from] kalends::HolidayError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
