//! Working day commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use kalends::{Date, Kalends};

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::error::CliError;
use crate::output::{print_info, print_output, print_single};

/// Arguments for the workdays command.
#[derive(Args, Debug)]
pub struct WorkdaysArgs {
    /// Region code or name
    pub region: String,

    /// First date (YYYY-MM-DD)
    pub start: String,

    /// Last date (YYYY-MM-DD)
    pub end: String,
}

/// Arguments for the next-workday and prev-workday commands.
#[derive(Args, Debug)]
pub struct StepArgs {
    /// Region code or name
    pub region: String,

    /// Date to start from (YYYY-MM-DD)
    pub date: String,

    /// Number of working days to step
    #[arg(short, long, default_value_t = 1)]
    pub days: u32,
}

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Region code or name
    pub region: String,

    /// Date to check (YYYY-MM-DD)
    pub date: String,
}

/// One working day row.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct WorkdayRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Day")]
    pub weekday: String,
}

impl From<Date> for WorkdayRow {
    fn from(date: Date) -> Self {
        Self {
            date: date.to_string(),
            weekday: date.weekday().to_string(),
        }
    }
}

/// Classification of a single date.
#[derive(Debug, Clone, Serialize)]
pub struct DayStatus {
    pub date: Date,
    pub weekend: bool,
    pub holidays: Vec<String>,
    pub working_day: bool,
}

/// Executes the workdays command.
pub fn execute(engine: &Kalends, args: WorkdaysArgs, format: OutputFormat) -> Result<()> {
    let start = parse_date(&args.start)?;
    let end = parse_date(&args.end)?;
    let days = engine.workdays(&args.region, &start, &end)?;

    let rows: Vec<WorkdayRow> = days.iter().copied().map(WorkdayRow::from).collect();
    print_output(&rows, format)?;
    if format == OutputFormat::Table {
        print_info(&format!("{} working days", rows.len()));
    }
    Ok(())
}

/// Executes next-workday (`direction` 1) or prev-workday (`direction` -1).
pub fn execute_step(engine: &Kalends, args: StepArgs, direction: i8, format: OutputFormat) -> Result<()> {
    if args.days == 0 {
        return Err(CliError::InvalidDays(args.days).into());
    }
    let date = parse_date(&args.date)?;
    let landed = if direction > 0 {
        engine.next_working_day(&args.region, &date, args.days)?
    } else {
        engine.prev_working_day(&args.region, &date, args.days)?
    };

    match format {
        OutputFormat::Table => println!("{landed}"),
        _ => print_single(&WorkdayRow::from(landed), format)?,
    }
    Ok(())
}

/// Executes the check command.
pub fn execute_check(engine: &Kalends, args: CheckArgs, format: OutputFormat) -> Result<()> {
    let date = parse_date(&args.date)?;
    let calculator = engine.workday_calculator(&args.region)?;
    let holidays = calculator.holidays(date.year())?;

    let status = DayStatus {
        date,
        weekend: calculator.is_weekend_day(&date),
        holidays: holidays.on(date).iter().map(|h| h.name()).collect(),
        working_day: calculator.is_working_day(&date)?,
    };

    match format {
        OutputFormat::Table => {
            let verdict = if status.working_day {
                "working day"
            } else if status.holidays.is_empty() {
                "weekend"
            } else {
                "holiday"
            };
            println!("{date} ({}): {verdict}", date.weekday());
            for name in &status.holidays {
                println!("  {name}");
            }
        }
        _ => print_single(&status, format)?,
    }
    Ok(())
}
