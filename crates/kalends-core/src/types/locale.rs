//! Locale tags and fallback order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{HolidayError, HolidayResult};

/// Locale tags recognised by the library (`language_REGION`).
///
/// A bare language tag (`nl`, `en`) is accepted when at least one entry
/// here uses that language.
const KNOWN_LOCALES: &[&str] = &[
    "ar_AE", "ar_SA", "bg_BG", "bs_BA", "ca_ES", "cs_CZ", "cy_GB", "da_DK", "de_AT", "de_BE",
    "de_CH", "de_DE", "de_LI", "de_LU", "el_CY", "el_GR", "en_AU", "en_CA", "en_GB", "en_IE",
    "en_NZ", "en_US", "en_ZA", "es_AR", "es_CO", "es_ES", "es_MX", "es_US", "et_EE", "eu_ES",
    "fi_FI", "fr_BE", "fr_CA", "fr_CH", "fr_FR", "fr_LU", "ga_IE", "gd_GB", "gl_ES", "he_IL",
    "hr_HR", "hu_HU", "id_ID", "is_IS", "it_CH", "it_IT", "ja_JP", "ko_KR", "lb_LU", "lt_LT",
    "lv_LV", "mt_MT", "nb_NO", "nl_BE", "nl_NL", "nn_NO", "pl_PL", "pt_BR", "pt_PT", "ro_RO",
    "ru_RU", "ru_UA", "sk_SK", "sl_SI", "sr_Latn_RS", "sv_FI", "sv_SE", "th_TH", "tr_TR",
    "uk_UA", "vi_VN", "zh_CN", "zh_TW",
];

/// A validated locale tag such as `en_US` or `nl`.
///
/// Hyphenated input (`en-US`) is normalised to the underscore form.
///
/// # Example
///
/// ```rust
/// use kalends_core::types::Locale;
///
/// let locale = Locale::parse("nl-NL").unwrap();
/// assert_eq!(locale.as_str(), "nl_NL");
/// assert_eq!(locale.language(), "nl");
/// assert!(Locale::parse("xx_YY").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parses and validates a locale tag.
    ///
    /// # Errors
    ///
    /// Returns `HolidayError::UnknownLocale` if the tag is not recognised.
    pub fn parse(tag: &str) -> HolidayResult<Self> {
        let normalised = tag.trim().replace('-', "_");
        if is_known(&normalised) {
            Ok(Locale(normalised))
        } else {
            Err(HolidayError::unknown_locale(tag))
        }
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the language part of the tag (`nl` for `nl_NL`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('_').next().unwrap_or(&self.0)
    }

    /// Returns true if the tag has no region part.
    #[must_use]
    pub fn is_language_only(&self) -> bool {
        !self.0.contains('_')
    }

    /// The ordered lookup chain for this locale: the exact tag, then the
    /// bare language when it differs.
    #[must_use]
    pub fn fallback_chain(&self) -> Vec<&str> {
        let mut chain = vec![self.as_str()];
        if !self.is_language_only() {
            chain.push(self.language());
        }
        chain
    }

    /// All recognised full tags.
    #[must_use]
    pub fn known() -> &'static [&'static str] {
        KNOWN_LOCALES
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale("en_US".to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = HolidayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Locale::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

fn is_known(tag: &str) -> bool {
    if tag.is_empty() {
        return false;
    }
    if KNOWN_LOCALES.contains(&tag) {
        return true;
    }
    !tag.contains('_')
        && KNOWN_LOCALES
            .iter()
            .any(|known| known.split('_').next() == Some(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_and_language_tags() {
        assert_eq!(Locale::parse("en_US").unwrap().as_str(), "en_US");
        assert_eq!(Locale::parse("pl").unwrap().as_str(), "pl");
        assert_eq!(Locale::parse("ko-KR").unwrap().as_str(), "ko_KR");
    }

    #[test]
    fn test_unknown_locale() {
        for tag in ["", "xx", "en_XX", "english", "nl_NL_x"] {
            assert!(
                matches!(Locale::parse(tag), Err(HolidayError::UnknownLocale { .. })),
                "{tag} should be rejected"
            );
        }
    }

    #[test]
    fn test_fallback_chain() {
        let pl = Locale::parse("pl_PL").unwrap();
        assert_eq!(pl.fallback_chain(), vec!["pl_PL", "pl"]);

        let nl = Locale::parse("nl").unwrap();
        assert_eq!(nl.fallback_chain(), vec!["nl"]);
    }

    #[test]
    fn test_serde_validates() {
        let locale: Locale = serde_json::from_str("\"fr_FR\"").unwrap();
        assert_eq!(locale.language(), "fr");
        assert!(serde_json::from_str::<Locale>("\"zz_ZZ\"").is_err());
    }
}
