//! Value commands implementation
//!
//! Integer (`value`) and continuous (`value-at`) table queries.

use grid_core::market_data::tables::DataTable;
use std::path::Path;
use tracing::info;

use crate::table_file::load_table;
use crate::Result;

/// Run the value command: query at integer grid offsets
pub fn run(table: &Path, maturity: i32, termination: i32) -> Result<String> {
    let table = load_table(table)?;
    info!(table = %table.name(), maturity, termination, "integer query");

    let value = table.value(maturity, termination)?;
    Ok(format!("{}", value))
}

/// Run the value-at command: query at year fractions
pub fn run_continuous(table: &Path, maturity: f64, termination: f64) -> Result<String> {
    let table = load_table(table)?;
    info!(table = %table.name(), maturity, termination, "continuous query");

    let value = table.value_continuous(maturity, termination)?;
    Ok(format!("{}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table_file::tests::{write_temp, SAMPLE};
    use crate::CliError;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_value() {
        let tmp = write_temp(SAMPLE);
        assert_eq!(run(tmp.path(), 12, 24).unwrap(), "0.22");
    }

    #[test]
    fn test_interpolated_value() {
        let tmp = write_temp(SAMPLE);
        let out: f64 = run(tmp.path(), 18, 18).unwrap().parse().unwrap();
        assert_relative_eq!(out, 0.23, epsilon = 1e-12);
    }

    #[test]
    fn test_continuous_value_rounds_to_months() {
        let tmp = write_temp(SAMPLE);
        assert_eq!(run_continuous(tmp.path(), 1.04, 2.0).unwrap(), "0.2");
    }

    #[test]
    fn test_query_error_is_propagated() {
        let content = SAMPLE.replace(
            "maturity = 24\n        termination = 24",
            "maturity = 36\n        termination = 24",
        );
        let tmp = write_temp(&content);
        assert!(matches!(run(tmp.path(), 18, 18), Err(CliError::Table(_))));
    }
}
