//! Rendering of command results.
//!
//! CSV rows are written from the JSON form of each record, so nested lists
//! (the holidays on a checked date, for instance) land in a single cell.

use anyhow::{bail, Result};
use colored::Colorize;
use serde::Serialize;
use serde_json::{Map, Value};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Separator between list items inside one CSV cell.
const CSV_LIST_SEPARATOR: &str = "; ";

/// Prints a list of rows.
pub fn print_output<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table if rows.is_empty() => println!("No holidays or working days match."),
        OutputFormat::Table => {
            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Columns::first()).with(Alignment::left()))
                .to_string();
            println!("{table}");
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => write_csv(rows)?,
    }
    Ok(())
}

/// Prints one record; tables fall back to JSON.
pub fn print_single<T: Serialize>(record: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        OutputFormat::Csv => write_csv(std::slice::from_ref(record))?,
    }
    Ok(())
}

fn write_csv<T: Serialize>(records: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for (index, record) in records.iter().enumerate() {
        let fields = csv_fields(record)?;
        if index == 0 {
            writer.write_record(fields.keys())?;
        }
        writer.write_record(fields.values().map(csv_cell))?;
    }
    writer.flush()?;
    Ok(())
}

fn csv_fields<T: Serialize>(record: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(fields),
        other => bail!("cannot write {other} as a CSV row"),
    }
}

fn csv_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(csv_cell)
            .collect::<Vec<_>>()
            .join(CSV_LIST_SEPARATOR),
        other => other.to_string(),
    }
}

/// Prints a section title.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints a one-line summary after a table.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}
