//! Error types for the Kalends library.
//!
//! Every failure is a local validation failure raised at the point of
//! construction or query. Nothing here is transient, so there is no retry
//! taxonomy: callers either fix their input or propagate.

use thiserror::Error;

/// A specialized Result type for Kalends operations.
pub type HolidayResult<T> = Result<T, HolidayError>;

/// The main error type for Kalends operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HolidayError {
    /// An argument failed validation (blank key, inverted range, ...).
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of what was wrong.
        reason: String,
    },

    /// The locale tag is not part of the recognised set.
    #[error("Unknown locale: {locale}")]
    UnknownLocale {
        /// The offending tag, as supplied.
        locale: String,
    },

    /// No provider is registered under the requested name.
    #[error("Holiday provider not found: {region}")]
    ProviderNotFound {
        /// Region name or code that was requested.
        region: String,
    },

    /// The year lies outside the supported bound.
    #[error("Invalid year {year}: supported range is [{min}, {max}]")]
    InvalidYear {
        /// Requested year.
        year: i32,
        /// Lowest supported year.
        min: i32,
        /// Highest supported year.
        max: i32,
    },

    /// A date could not be constructed (e.g. February 30).
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A translation file could not be read or parsed.
    #[error("Failed to load translations from {path}: {reason}")]
    TranslationLoad {
        /// File or directory that failed.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// Configuration could not be parsed or failed validation.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration error.
        reason: String,
    },
}

impl HolidayError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an unknown locale error.
    #[must_use]
    pub fn unknown_locale(locale: impl Into<String>) -> Self {
        Self::UnknownLocale {
            locale: locale.into(),
        }
    }

    /// Creates a provider not found error.
    #[must_use]
    pub fn provider_not_found(region: impl Into<String>) -> Self {
        Self::ProviderNotFound {
            region: region.into(),
        }
    }

    /// Creates an invalid year error.
    #[must_use]
    pub fn invalid_year(year: i32, min: i32, max: i32) -> Self {
        Self::InvalidYear { year, min, max }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a translation load error.
    #[must_use]
    pub fn translation_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TranslationLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
