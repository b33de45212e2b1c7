//! Holiday classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a holiday.
///
/// The type only decides filter membership; it never influences how a
/// date is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HolidayType {
    /// Official public holiday (day off by law).
    #[default]
    Official,
    /// Observed day without a legal day off.
    Observance,
    /// Seasonal marker (start of summer time, solstice, ...).
    Season,
    /// Bank holiday.
    Bank,
    /// Anything else.
    Other,
}

impl HolidayType {
    /// All holiday types in declaration order.
    pub const ALL: [HolidayType; 5] = [
        HolidayType::Official,
        HolidayType::Observance,
        HolidayType::Season,
        HolidayType::Bank,
        HolidayType::Other,
    ];

    /// Returns the string identifier for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Observance => "observance",
            Self::Season => "season",
            Self::Bank => "bank",
            Self::Other => "other",
        }
    }

    /// Parses a holiday type from its string identifier.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "official" => Some(Self::Official),
            "observance" => Some(Self::Observance),
            "season" => Some(Self::Season),
            "bank" => Some(Self::Bank),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
