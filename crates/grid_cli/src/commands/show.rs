//! Show command implementation
//!
//! Prints a table file as a maturity x termination matrix.

use grid_core::market_data::tables::DataTable;
use std::path::Path;
use tracing::info;

use crate::table_file::load_table;
use crate::{CliError, Result};

/// Run the show command
pub fn run(table: &Path, unit: f64) -> Result<String> {
    if !(unit.is_finite() && unit != 0.0) {
        return Err(CliError::InvalidArgument(format!(
            "Unit must be finite and non-zero, got {}",
            unit
        )));
    }

    let table = load_table(table)?;
    info!(
        table = %table.name(),
        size = table.size(),
        unit,
        "showing table"
    );
    Ok(table.to_string_with_unit(unit))
}
