//! End-to-end scenarios through the name-based API.

use chrono::{NaiveDate, TimeZone};
use std::fs;

use kalends::prelude::*;

fn ymd(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// =============================================================================
// EASTER
// =============================================================================

#[test]
fn easter_2010_in_amsterdam() {
    let easter = kalends::compute_easter(2010, "Europe/Amsterdam").unwrap();
    assert_eq!(easter.date_naive(), NaiveDate::from_ymd_opt(2010, 4, 4).unwrap());
    assert_eq!(easter.timezone(), chrono_tz::Europe::Amsterdam);

    let holidays = kalends::create("Netherlands", 2010, "nl_NL").unwrap();
    assert_eq!(holidays.get("easter").unwrap().date(), ymd(2010, 4, 4));
    assert_eq!(holidays.get("easter").unwrap().start().unwrap(), easter);
}

#[test]
fn unknown_timezone_is_rejected() {
    assert!(matches!(
        kalends::compute_easter(2010, "Mars/Olympus_Mons"),
        Err(HolidayError::InvalidArgument { .. })
    ));
}

// =============================================================================
// SUBSTITUTES
// =============================================================================

#[test]
fn christmas_on_sunday_is_substituted() {
    let holidays = kalends::create("GB", 2022, "en_GB").unwrap();

    let christmas = holidays.get("christmasDay").unwrap();
    assert_eq!(christmas.date(), ymd(2022, 12, 25));
    assert!(!christmas.is_substitute());

    let substitute = holidays.get("substituteHoliday:christmasDay").unwrap();
    assert!(substitute.is_substitute());
    assert_eq!(substitute.substituted_holiday(), Some(christmas));
    assert_eq!(substitute.holiday_type(), christmas.holiday_type());

    assert_eq!(holidays.count(), holidays.len() - holidays.substitutes().len());
}

#[test]
fn substitutes_count_with_their_original() {
    let holidays = kalends::create("US", 2021, "en_US").unwrap();
    let substitutes = holidays.substitutes();
    assert!(!substitutes.is_empty());
    assert_eq!(holidays.count() + substitutes.len(), holidays.len());
}

// =============================================================================
// ESTABLISHMENT
// =============================================================================

#[test]
fn holiday_absent_before_establishment() {
    // Martin Luther King Jr. Day is observed since 1986.
    assert!(kalends::create("US", 1985, "en_US")
        .unwrap()
        .get("martinLutherKingDay")
        .is_none());
    assert!(kalends::create("US", 1986, "en_US")
        .unwrap()
        .get("martinLutherKingDay")
        .is_some());
}

#[test]
fn rule_established_in_1980() {
    fn rules(_year: i32) -> HolidayResult<RuleSet> {
        Ok(RuleSet::new().with(HolidayRule::fixed("foundersDay", 6, 1).since(1980)))
    }
    let region = std::sync::Arc::new(Region::new("FD", "Foundria", chrono_tz::UTC, rules));
    let resolver = Resolver::default();

    assert!(resolver
        .resolve(region.clone(), 1979, "en_US")
        .unwrap()
        .get("foundersDay")
        .is_none());
    assert_eq!(
        resolver
            .resolve(region, 1980, "en_US")
            .unwrap()
            .get("foundersDay")
            .unwrap()
            .date(),
        ymd(1980, 6, 1)
    );
}

// =============================================================================
// WORKDAYS
// =============================================================================

#[test]
fn january_2020_workdays() {
    let days = kalends::workdays("NL", &ymd(2020, 1, 1), &ymd(2020, 1, 31)).unwrap();
    assert_eq!(days.len(), 22);
    for excluded in [1, 4, 5, 11, 12, 18, 19, 25, 26] {
        assert!(!days.contains(&ymd(2020, 1, excluded)), "{excluded}");
    }
}

#[test]
fn working_day_traversal() {
    // Thursday before Easter 2024 in the UK: Good Friday and Easter Monday
    // are holidays.
    assert_eq!(
        kalends::next_working_day("GB", &ymd(2024, 3, 28), 1).unwrap(),
        ymd(2024, 4, 2)
    );
    assert_eq!(
        kalends::prev_working_day("GB", &ymd(2024, 4, 2), 1).unwrap(),
        ymd(2024, 3, 28)
    );
    assert!(kalends::is_holiday("GB", &ymd(2024, 4, 1)).unwrap());
    assert!(!kalends::is_working_day("GB", &ymd(2024, 4, 1)).unwrap());
    assert!(kalends::is_working_day("GB", &ymd(2024, 4, 2)).unwrap());
}

#[test]
fn workdays_rejects_inverted_range() {
    assert!(matches!(
        kalends::workdays("NL", &ymd(2020, 2, 1), &ymd(2020, 1, 1)),
        Err(HolidayError::InvalidArgument { .. })
    ));
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn unknown_region_and_year() {
    assert!(matches!(
        kalends::create("Atlantis", 2020, "en_US"),
        Err(HolidayError::ProviderNotFound { .. })
    ));
    assert!(matches!(
        kalends::create("NL", 10100, "en_US"),
        Err(HolidayError::InvalidYear { year: 10100, .. })
    ));
    assert!(matches!(
        kalends::create("NL", 2020, "xx_XX"),
        Err(HolidayError::UnknownLocale { .. })
    ));
}

// =============================================================================
// TIMEZONE-INDEPENDENT QUERIES
// =============================================================================

#[test]
fn wall_clock_date_decides_membership() {
    let holidays = kalends::create("JP", 2023, "ja_JP").unwrap();
    let wall = NaiveDate::from_ymd_opt(2023, 5, 3)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let honolulu = chrono_tz::Pacific::Honolulu.from_local_datetime(&wall).unwrap();
    let tokyo = chrono_tz::Asia::Tokyo.from_local_datetime(&wall).unwrap();

    assert_eq!(holidays.on(honolulu).keys(), vec!["constitutionMemorialDay"]);
    assert_eq!(holidays.on(honolulu).keys(), holidays.on(tokyo).keys());
    assert_eq!(holidays.is_holiday(&honolulu), holidays.is_holiday(&tokyo));
}

#[test]
fn range_and_type_views_chain() {
    let holidays = kalends::create("NL", 2023, "en_US").unwrap();
    let spring = holidays.between(ymd(2023, 4, 1), ymd(2023, 5, 31), true).unwrap();
    assert_eq!(
        spring.official().keys(),
        vec![
            "easter",
            "easterMonday",
            "kingsDay",
            "liberationDay",
            "ascensionDay",
            "pentecost",
            "pentecostMonday",
        ]
    );
    assert_eq!(spring.observances().keys(), vec!["goodFriday"]);

    let exclusive = holidays.between(ymd(2023, 4, 9), ymd(2023, 4, 27), false).unwrap();
    assert_eq!(exclusive.keys(), vec!["easterMonday"]);
}

#[test]
fn next_and_previous_cross_years() {
    let holidays = kalends::create("GB", 2022, "en_GB").unwrap();
    let next = holidays.next("christmasDay").unwrap().unwrap();
    assert_eq!(next.date(), ymd(2023, 12, 25));
    let previous = holidays.previous("easterMonday").unwrap().unwrap();
    assert_eq!(previous.date(), ymd(2021, 4, 5));
    assert_eq!(holidays.next("noSuchHoliday").unwrap(), None);
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn translation_directory_overrides_names() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("kingsDay.json"),
        r#"{"en": "Kingsday", "nl_NL": "Koningsdag!"}"#,
    )
    .unwrap();

    let config_path = dir.path().join("kalends.toml");
    fs::write(
        &config_path,
        format!(
            "default_locale = \"en_US\"\nmin_year = 1900\nmax_year = 2100\ntranslations_dir = {:?}\n",
            dir.path().display().to_string()
        ),
    )
    .unwrap();

    let engine = Kalends::from_config_file(&config_path).unwrap();
    let holidays = engine.create("NL", 2023, "en_US").unwrap();
    assert_eq!(holidays.get("kingsDay").unwrap().name(), "Kingsday");
    assert_eq!(holidays.get("liberationDay").unwrap().name(), "Liberation Day");

    assert!(matches!(
        engine.create("NL", 2101, "en_US"),
        Err(HolidayError::InvalidYear { max: 2100, .. })
    ));
}

#[test]
fn invalid_translation_file_fails_loading() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("kingsDay.json"), r#"{"xx_YY": "?"}"#).unwrap();

    let config = EngineConfig::default().with_translations_dir(dir.path());
    assert!(matches!(
        Kalends::new(config),
        Err(HolidayError::UnknownLocale { .. })
    ));
}

#[test]
fn every_region_is_listed() {
    let codes: Vec<String> = kalends::providers()
        .iter()
        .map(|p| p.code().to_string())
        .collect();
    assert_eq!(codes, ["NL", "GB", "GB-ENG", "GB-SCT", "US", "JP", "KR"]);
}

// =============================================================================
// WORKDAY PROPERTIES
// =============================================================================

mod workday_properties {
    use super::*;
    use proptest::prelude::*;

    fn region_code() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["NL", "GB", "GB-SCT", "US", "JP", "KR"])
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn stepping_forward_counts_working_days(
            region in region_code(),
            offset in 0i64..(365 * 20),
            n in 1u32..15,
        ) {
            let start = ymd(2005, 1, 1).add_days(offset);
            let landed = kalends::next_working_day(region, &start, n).unwrap();

            prop_assert!(kalends::is_working_day(region, &landed).unwrap());
            let between = kalends::workdays(region, &start.add_days(1), &landed).unwrap();
            prop_assert_eq!(between.len(), n as usize);
        }

        #[test]
        fn stepping_back_undoes_one_step(
            region in region_code(),
            offset in 0i64..(365 * 20),
        ) {
            let start = ymd(2005, 1, 1).add_days(offset);
            let landed = kalends::next_working_day(region, &start, 1).unwrap();
            let back = kalends::prev_working_day(region, &landed, 1).unwrap();

            prop_assert!(back <= start);
            if kalends::is_working_day(region, &start).unwrap() {
                prop_assert_eq!(back, start);
            }
        }
    }
}
