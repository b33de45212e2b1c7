//! Holidays command implementation.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use kalends::{Holiday, HolidayType, Kalends};

use crate::cli::OutputFormat;
use crate::output::{print_header, print_info, print_output};

/// Arguments for the holidays command.
#[derive(Args, Debug)]
pub struct HolidaysArgs {
    /// Region code or name (e.g. NL, GB-SCT, Japan)
    pub region: String,

    /// Year to resolve
    pub year: i32,

    /// Locale for holiday names (defaults to the configured locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Only list holidays of this type
    #[arg(short = 't', long = "type", value_enum)]
    pub holiday_type: Option<TypeFilter>,
}

/// Holiday type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeFilter {
    /// Official public holidays
    Official,
    /// Observances
    Observance,
    /// Bank holidays
    Bank,
    /// Seasons
    Season,
    /// Other days
    Other,
}

impl From<TypeFilter> for HolidayType {
    fn from(filter: TypeFilter) -> Self {
        match filter {
            TypeFilter::Official => HolidayType::Official,
            TypeFilter::Observance => HolidayType::Observance,
            TypeFilter::Bank => HolidayType::Bank,
            TypeFilter::Season => HolidayType::Season,
            TypeFilter::Other => HolidayType::Other,
        }
    }
}

/// One holiday row.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct HolidayRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Day")]
    pub weekday: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "type")]
    pub holiday_type: String,
}

impl From<&Holiday> for HolidayRow {
    fn from(holiday: &Holiday) -> Self {
        Self {
            date: holiday.date().to_string(),
            weekday: holiday.date().weekday().to_string(),
            name: holiday.name(),
            key: holiday.key().to_string(),
            holiday_type: holiday.holiday_type().to_string(),
        }
    }
}

/// Executes the holidays command.
pub fn execute(engine: &Kalends, args: HolidaysArgs, format: OutputFormat) -> Result<()> {
    let locale = args
        .locale
        .unwrap_or_else(|| engine.config().default_locale.clone());
    let holidays = engine.create(&args.region, args.year, &locale)?;

    let view = match args.holiday_type {
        Some(filter) => holidays.filter(filter.into()),
        None => holidays.view(),
    };
    let rows: Vec<HolidayRow> = view.iter().map(HolidayRow::from).collect();

    if format == OutputFormat::Table {
        print_header(&format!(
            "{} holidays {} ({})",
            holidays.region().name(),
            args.year,
            holidays.locale()
        ));
    }
    print_output(&rows, format)?;
    if format == OutputFormat::Table {
        print_info(&format!(
            "{} holidays, {} substitute days",
            view.count(),
            view.substitutes().len()
        ));
    }
    Ok(())
}
