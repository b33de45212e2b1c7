//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{CheckArgs, HolidaysArgs, StepArgs, WorkdaysArgs};

/// Kalends - public holidays and working days per region
#[derive(Parser)]
#[command(name = "kalends")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Engine configuration file (TOML)
    #[arg(short, long, env = "KALENDS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the holidays of a region for a year
    Holidays(HolidaysArgs),

    /// List the working days between two dates (inclusive)
    Workdays(WorkdaysArgs),

    /// Find the working day a number of days after a date
    NextWorkday(StepArgs),

    /// Find the working day a number of days before a date
    PrevWorkday(StepArgs),

    /// Tell whether a date is a holiday, weekend day or working day
    Check(CheckArgs),

    /// List the available regions
    Regions,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
