//! Regions command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use kalends::Kalends;

use crate::cli::OutputFormat;
use crate::output::print_output;

/// One region row.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct RegionRow {
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Timezone")]
    pub timezone: String,
}

/// Executes the regions command.
pub fn execute(engine: &Kalends, format: OutputFormat) -> Result<()> {
    let rows: Vec<RegionRow> = engine
        .providers()
        .iter()
        .map(|region| RegionRow {
            code: region.code().to_string(),
            name: region.name().to_string(),
            timezone: region.timezone().name().to_string(),
        })
        .collect();
    print_output(&rows, format)
}
