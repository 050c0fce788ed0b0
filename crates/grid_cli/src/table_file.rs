//! TOML table files.
//!
//! ```toml
//! name = "EUR swaption vols"
//! convention = "MONTHS"
//! reference_date = "2024-01-02"
//!
//! [schedule]
//! fixed_period_months = 12
//! float_period_months = 6
//! day_count = "30E/360"
//! business_day = "MF"
//!
//! [[entries]]
//! maturity = 12
//! termination = 24
//! value = 0.21
//! ```

use grid_core::market_data::tables::{
    DataTableBasic, DataTableLinear, ScheduleMetaData, TableConvention, TenorPoint,
};
use grid_core::market_data::TableError;
use grid_core::types::Date;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::{CliError, Result};

/// On-disk form of a table.
#[derive(Debug, Clone, Deserialize)]
pub struct TableFile {
    pub name: String,
    pub convention: TableConvention,
    pub reference_date: Date,
    #[serde(default)]
    pub schedule: ScheduleMetaData,
    #[serde(default)]
    pub entries: Vec<EntryRecord>,
}

/// One stored value.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EntryRecord {
    pub maturity: i32,
    pub termination: i32,
    pub value: f64,
}

impl TableFile {
    /// Parse a table file from TOML text; `origin` names the source in errors.
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::TableFile {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Build the interpolating table.
    pub fn into_table(self) -> std::result::Result<DataTableLinear, TableError> {
        let entries = self
            .entries
            .iter()
            .map(|e| (TenorPoint::new(e.maturity, e.termination), e.value));
        let base = DataTableBasic::from_entries(
            self.name,
            self.convention,
            self.reference_date,
            self.schedule,
            entries,
        )?;
        DataTableLinear::from_table(&base)
    }
}

/// Read and build the table stored at `path`.
pub fn load_table(path: &Path) -> Result<DataTableLinear> {
    let path_display = path.display().to_string();
    if !path.exists() {
        return Err(CliError::FileNotFound(path_display));
    }

    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path_display.clone(),
        source,
    })?;
    let file = TableFile::parse(&content, &path_display)?;
    debug!(path = %path_display, entries = file.entries.len(), "loaded table file");

    Ok(file.into_table()?)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use grid_core::market_data::tables::DataTable;
    use grid_core::market_data::ConstructionError;
    use grid_core::types::DayCountConvention;
    use std::io::Write;

    pub(crate) const SAMPLE: &str = r#"
        name = "sample"
        convention = "MONTHS"
        reference_date = "2024-01-02"

        [schedule]
        day_count = "ACT/360"

        [[entries]]
        maturity = 12
        termination = 12
        value = 0.20

        [[entries]]
        maturity = 12
        termination = 24
        value = 0.22

        [[entries]]
        maturity = 24
        termination = 12
        value = 0.24

        [[entries]]
        maturity = 24
        termination = 24
        value = 0.26
    "#;

    /// Write `content` to a temporary file kept alive by the returned handle.
    pub(crate) fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_sample() {
        let file = TableFile::parse(SAMPLE, "sample").unwrap();
        assert_eq!(file.convention, TableConvention::Months);
        assert_eq!(file.reference_date, Date::from_ymd(2024, 1, 2).unwrap());
        assert_eq!(file.schedule.day_count, DayCountConvention::Actual360);
        assert_eq!(file.schedule.fixed_period_months, 12);
        assert_eq!(file.entries.len(), 4);
    }

    #[test]
    fn test_load_table() {
        let tmp = write_temp(SAMPLE);
        let table = load_table(tmp.path()).unwrap();
        assert_eq!(table.name(), "sample");
        assert_eq!(table.size(), 4);
        assert_eq!(table.value(24, 12).unwrap(), 0.24);
    }

    #[test]
    fn test_missing_file() {
        let result = load_table(Path::new("/nonexistent/table.toml"));
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_unknown_convention_is_reported() {
        let content = SAMPLE.replace("MONTHS", "QUARTERS");
        match TableFile::parse(&content, "bad.toml") {
            Err(CliError::TableFile { path, message }) => {
                assert_eq!(path, "bad.toml");
                assert!(message.contains("QUARTERS"));
            }
            other => panic!("Expected TableFile error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_entry_is_rejected() {
        let content = format!(
            "{}\n[[entries]]\nmaturity = 12\ntermination = 12\nvalue = 0.5\n",
            SAMPLE
        );
        let file = TableFile::parse(&content, "dup").unwrap();
        assert_eq!(
            file.into_table().unwrap_err(),
            TableError::Construction(ConstructionError::DuplicateTenorPoint {
                maturity: 12,
                termination: 12
            })
        );
    }
}
