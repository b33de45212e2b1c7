//! Invariants that every shipped region must satisfy for every year.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

use kalends_core::{HolidayCollection, Resolver};
use kalends_regions::{providers, translations};

fn resolve_all(year: i32) -> Vec<(String, HolidayCollection)> {
    let resolver = Resolver::default().with_translations(translations::embedded().unwrap());
    providers()
        .into_iter()
        .map(|region| {
            let code = region.code().to_string();
            let holidays = resolver.resolve(Arc::clone(&region), year, "en_US").unwrap();
            (code, holidays)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_region_resolves_with_unique_keys(year in 1000i32..=9999) {
        for (code, holidays) in resolve_all(year) {
            let keys: HashSet<&str> = holidays.keys().into_iter().collect();
            prop_assert_eq!(keys.len(), holidays.len(), "{} {}", code, year);
        }
    }

    #[test]
    fn substitutes_never_share_their_original_date(year in 1900i32..=2100) {
        for (code, holidays) in resolve_all(year) {
            for substitute in holidays.substitutes() {
                let original = substitute.substituted_holiday().unwrap();
                prop_assert_ne!(substitute.date(), original.date(), "{} {}", code, year);
                prop_assert!(holidays.contains(original.key()));
            }
        }
    }

    #[test]
    fn holidays_have_resolved_names(year in 1950i32..=2030) {
        for (code, holidays) in resolve_all(year) {
            for holiday in &holidays {
                prop_assert_ne!(holiday.name(), holiday.key().to_string(), "{} {}", code, year);
            }
        }
    }
}

#[test]
fn substitute_names_use_the_locale_pattern() {
    let resolver = Resolver::default().with_translations(translations::embedded().unwrap());
    let uk = kalends_regions::provider("GB").unwrap();

    let holidays = resolver.resolve(Arc::clone(&uk), 2022, "en_GB").unwrap();
    let substitute = holidays.get("substituteHoliday:christmasDay").unwrap();
    assert_eq!(substitute.name(), "Christmas Day (substitute day)");

    let holidays = resolver.resolve(uk, 2022, "en_US").unwrap();
    let substitute = holidays.get("substituteHoliday:christmasDay").unwrap();
    assert_eq!(substitute.name(), "Christmas observed");
}

#[test]
fn names_follow_the_requested_locale() {
    let resolver = Resolver::default().with_translations(translations::embedded().unwrap());
    let japan = kalends_regions::provider("JP").unwrap();
    let holidays = resolver.resolve(japan, 2023, "ja_JP").unwrap();
    assert_eq!(holidays.get("newYearsDay").unwrap().name(), "元日");
    assert_eq!(
        holidays.get("substituteHoliday:newYearsDay").unwrap().name(),
        "振替休日（元日）"
    );

    let korea = kalends_regions::provider("KR").unwrap();
    let holidays = resolver.resolve(korea, 2025, "nl_NL").unwrap();
    // No Dutch name: falls back to the default locale.
    assert_eq!(holidays.get("chuseok").unwrap().name(), "Chuseok");
    assert_eq!(
        holidays.get("substituteHoliday:childrensDay").unwrap().name(),
        "Children's Day (vervangende dag)"
    );

    let korea = kalends_regions::provider("KR").unwrap();
    let holidays = resolver.resolve(korea, 2025, "de_DE").unwrap();
    assert_eq!(
        holidays.get("substituteHoliday:childrensDay").unwrap().name(),
        "Children's Day observed"
    );
}
