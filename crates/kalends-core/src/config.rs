//! Engine configuration.
//!
//! ```toml
//! default_locale = "nl_NL"
//! min_year = 1900
//! max_year = 2200
//! translations_dir = "/usr/share/kalends/translations"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HolidayError, HolidayResult};
use crate::types::Locale;

/// Lowest year any configuration may allow.
pub const MIN_SUPPORTED_YEAR: i32 = 1000;
/// Highest year any configuration may allow.
pub const MAX_SUPPORTED_YEAR: i32 = 9999;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Field that failed validation.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Returns every problem found, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationIssue>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and folds all problems into one error.
    fn validate_or_error(&self) -> HolidayResult<()> {
        let issues = self.validate();
        if issues.is_empty() {
            return Ok(());
        }
        let reason = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(HolidayError::config(reason))
    }
}

/// Settings shared by every resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Locale consulted when a holiday has no name in the requested one.
    pub default_locale: String,
    /// First year that may be resolved.
    pub min_year: i32,
    /// Last year that may be resolved.
    pub max_year: i32,
    /// Directory of `<key>.json` translation files merged over the
    /// built-in names.
    pub translations_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_locale: "en_US".to_string(),
            min_year: MIN_SUPPORTED_YEAR,
            max_year: MAX_SUPPORTED_YEAR,
            translations_dir: None,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::Config` if the document does not parse or
    /// fails validation.
    pub fn from_toml_str(text: &str) -> HolidayResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| HolidayError::config(e.to_string()))?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::Config` if the file cannot be read, parsed or
    /// validated.
    pub fn from_file(path: impl AsRef<Path>) -> HolidayResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| HolidayError::config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Builder method to set the fallback locale.
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Builder method to set the supported year range.
    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Builder method to set the translation directory.
    pub fn with_translations_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.translations_dir = Some(dir.into());
        self
    }

    /// The fallback locale.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::UnknownLocale` if the configured tag is not
    /// recognised.
    pub fn fallback_locale(&self) -> HolidayResult<Locale> {
        Locale::parse(&self.default_locale)
    }

    /// Checks `year` against the configured range.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::InvalidYear` outside the range.
    pub fn check_year(&self, year: i32) -> HolidayResult<()> {
        if (self.min_year..=self.max_year).contains(&year) {
            Ok(())
        } else {
            Err(HolidayError::invalid_year(year, self.min_year, self.max_year))
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if Locale::parse(&self.default_locale).is_err() {
            issues.push(ValidationIssue::new(
                "default_locale",
                format!("unrecognised locale '{}'", self.default_locale),
            ));
        }

        if self.min_year > self.max_year {
            issues.push(ValidationIssue::new(
                "min_year",
                "min_year must not exceed max_year",
            ));
        }

        if self.min_year < MIN_SUPPORTED_YEAR || self.max_year > MAX_SUPPORTED_YEAR {
            issues.push(ValidationIssue::new(
                "max_year",
                format!("year range must lie within {MIN_SUPPORTED_YEAR}..={MAX_SUPPORTED_YEAR}"),
            ));
        }

        issues
    }
}
