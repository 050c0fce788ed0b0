//! The tenor table contract.

use super::{ScheduleMetaData, TableConvention};
use crate::market_data::error::TableError;
use crate::types::Date;
use std::collections::BTreeSet;

/// A table of values keyed by (maturity, termination) tenor offsets.
///
/// Implementations are immutable after construction: no query adds or
/// removes entries. Axis views are returned in ascending order.
///
/// # Coordinates
///
/// Integer queries use offsets in the table's convention units, with the
/// termination measured from the maturity. Continuous queries take both
/// coordinates in years from the reference date (the termination being the
/// absolute end of the instrument), and are mapped to grid units by the
/// convention's scale.
pub trait DataTable {
    /// Table name.
    fn name(&self) -> &str;

    /// Unit of the tenor offsets.
    fn convention(&self) -> TableConvention;

    /// Date from which maturity offsets are measured.
    fn reference_date(&self) -> Date;

    /// Schedule description carried with the table.
    fn schedule_metadata(&self) -> &ScheduleMetaData;

    /// Value at integer coordinates.
    fn value(&self, maturity: i32, termination: i32) -> Result<f64, TableError>;

    /// Value at continuous coordinates given in years.
    fn value_continuous(&self, maturity: f64, termination: f64) -> Result<f64, TableError>;

    /// Whether a value is stored at exactly these integer coordinates.
    fn contains_entry_for(&self, maturity: i32, termination: i32) -> bool;

    /// Whether a value is stored at exactly these continuous coordinates.
    fn contains_entry_for_continuous(&self, maturity: f64, termination: f64) -> bool;

    /// Number of stored entries.
    fn size(&self) -> usize;

    /// Whether the table stores no entries.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Distinct maturities.
    fn maturities(&self) -> &BTreeSet<i32>;

    /// Distinct terminations.
    fn terminations(&self) -> &BTreeSet<i32>;

    /// Terminations stored for one maturity (empty if none).
    fn terminations_for_maturity(&self, maturity: i32) -> BTreeSet<i32>;

    /// Maturities stored for one termination (empty if none).
    fn maturities_for_termination(&self, termination: i32) -> BTreeSet<i32>;

    /// Human-readable dump with every value divided by `unit`.
    fn to_string_with_unit(&self, unit: f64) -> String;
}
