//! Kalends CLI - holidays and working days from the command line.
//!
//! # Usage
//!
//! ```bash
//! # List the holidays of a region
//! kalends holidays NL 2024 --locale nl_NL
//!
//! # Only bank holidays, as JSON
//! kalends holidays GB-SCT 2022 --type bank --format json
//!
//! # Working days in a range
//! kalends workdays US 2024-07-01 2024-07-31
//!
//! # Step over holidays and weekends
//! kalends next-workday JP 2024-04-26 --days 3
//!
//! # Known regions
//! kalends regions
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("kalends=debug,kalends_core=debug,kalends_regions=debug")
    } else {
        EnvFilter::try_from_env("KALENDS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let engine = commands::engine(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Holidays(args) => commands::holidays::execute(&engine, args, format)?,
        Commands::Workdays(args) => commands::workdays::execute(&engine, args, format)?,
        Commands::NextWorkday(args) => commands::workdays::execute_step(&engine, args, 1, format)?,
        Commands::PrevWorkday(args) => commands::workdays::execute_step(&engine, args, -1, format)?,
        Commands::Check(args) => commands::workdays::execute_check(&engine, args, format)?,
        Commands::Regions => commands::regions::execute(&engine, format)?,
    }

    Ok(())
}
