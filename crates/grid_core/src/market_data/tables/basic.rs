//! Exact-match tenor table.

use super::{DataTable, ScheduleMetaData, TableConvention, TenorPoint};
use crate::market_data::error::{ConstructionError, QueryError, TableError};
use crate::types::Date;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Distance from an integer below which a scaled continuous coordinate
/// counts as lying on the grid.
const GRID_TOLERANCE: f64 = 1e-9;

/// Sparse table answering exact lookups only.
///
/// Entries are kept in a `BTreeMap` keyed by [`TenorPoint`], so iteration is
/// maturity-major and ascending. The distinct axes are computed once at
/// construction.
///
/// # Example
///
/// ```
/// use grid_core::market_data::tables::{DataTable, DataTableBasic, TableConvention};
/// use grid_core::types::Date;
///
/// let table = DataTableBasic::new(
///     "atm vols",
///     TableConvention::Years,
///     Date::from_ymd(2024, 1, 2).unwrap(),
///     Default::default(),
///     &[1, 1, 2],
///     &[5, 10, 5],
///     &[0.21, 0.23, 0.22],
/// )
/// .unwrap();
///
/// assert_eq!(table.value(1, 10).unwrap(), 0.23);
/// assert!(table.value(2, 10).is_err());
/// // One year into a trade ending three years later: (1, 2) in grid units
/// assert!(!table.contains_entry_for_continuous(1.0, 3.0));
/// assert!(table.contains_entry_for_continuous(1.0, 6.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DataTableBasic {
    name: String,
    convention: TableConvention,
    reference_date: Date,
    schedule_metadata: ScheduleMetaData,
    entries: BTreeMap<TenorPoint, f64>,
    maturities: BTreeSet<i32>,
    terminations: BTreeSet<i32>,
}

impl DataTableBasic {
    /// Create a table without entries.
    pub fn empty(
        name: impl Into<String>,
        convention: TableConvention,
        reference_date: Date,
        schedule_metadata: ScheduleMetaData,
    ) -> Self {
        Self {
            name: name.into(),
            convention,
            reference_date,
            schedule_metadata,
            entries: BTreeMap::new(),
            maturities: BTreeSet::new(),
            terminations: BTreeSet::new(),
        }
    }

    /// Create a table from parallel slices.
    ///
    /// Element `i` of each slice describes one entry: maturity offset,
    /// termination offset (relative to the maturity) and value.
    ///
    /// # Errors
    ///
    /// * `ConstructionError::LengthMismatch` - Slices differ in length
    /// * `ConstructionError::DuplicateTenorPoint` - A coordinate occurs twice
    pub fn new(
        name: impl Into<String>,
        convention: TableConvention,
        reference_date: Date,
        schedule_metadata: ScheduleMetaData,
        maturities: &[i32],
        terminations: &[i32],
        values: &[f64],
    ) -> Result<Self, ConstructionError> {
        if maturities.len() != terminations.len() || maturities.len() != values.len() {
            return Err(ConstructionError::LengthMismatch {
                maturities: maturities.len(),
                terminations: terminations.len(),
                values: values.len(),
            });
        }

        let entries = maturities
            .iter()
            .zip(terminations)
            .zip(values)
            .map(|((&m, &t), &v)| (TenorPoint::new(m, t), v));

        Self::from_entries(name, convention, reference_date, schedule_metadata, entries)
    }

    /// Create a table from owned lists; same contract as [`new`](Self::new).
    pub fn from_vecs(
        name: impl Into<String>,
        convention: TableConvention,
        reference_date: Date,
        schedule_metadata: ScheduleMetaData,
        maturities: Vec<i32>,
        terminations: Vec<i32>,
        values: Vec<f64>,
    ) -> Result<Self, ConstructionError> {
        Self::new(
            name,
            convention,
            reference_date,
            schedule_metadata,
            &maturities,
            &terminations,
            &values,
        )
    }

    /// Create a table from (coordinate, value) pairs.
    ///
    /// # Errors
    ///
    /// `ConstructionError::DuplicateTenorPoint` if a coordinate occurs twice.
    pub fn from_entries<I>(
        name: impl Into<String>,
        convention: TableConvention,
        reference_date: Date,
        schedule_metadata: ScheduleMetaData,
        entries: I,
    ) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = (TenorPoint, f64)>,
    {
        let mut table = Self::empty(name, convention, reference_date, schedule_metadata);

        for (point, value) in entries {
            if table.entries.insert(point, value).is_some() {
                return Err(ConstructionError::DuplicateTenorPoint {
                    maturity: point.maturity,
                    termination: point.termination,
                });
            }
            table.maturities.insert(point.maturity);
            table.terminations.insert(point.termination);
        }

        Ok(table)
    }

    /// Stored value at exact integer coordinates.
    #[inline]
    pub fn get(&self, maturity: i32, termination: i32) -> Option<f64> {
        self.entries
            .get(&TenorPoint::new(maturity, termination))
            .copied()
    }

    /// Stored value at exact continuous coordinates.
    pub fn get_continuous(&self, maturity: f64, termination: f64) -> Option<f64> {
        self.continuous_point(maturity, termination)
            .and_then(|p| self.get(p.maturity, p.termination))
    }

    /// All entries in maturity-major order.
    pub fn entries(&self) -> impl Iterator<Item = (TenorPoint, f64)> + '_ {
        self.entries.iter().map(|(&p, &v)| (p, v))
    }

    /// Grid cell addressed by continuous coordinates, if both land on the grid.
    fn continuous_point(&self, maturity: f64, termination: f64) -> Option<TenorPoint> {
        let scale = f64::from(self.convention.scale());
        let m = maturity * scale;
        let t = termination * scale;
        let on_grid = |x: f64| x.is_finite() && (x - x.round()).abs() <= GRID_TOLERANCE;
        if !(on_grid(m) && on_grid(t)) {
            return None;
        }
        let m = self.convention.to_grid_units(maturity);
        let t = self.convention.to_grid_units(termination);
        Some(TenorPoint::new(m, t.saturating_sub(m)))
    }

    fn fmt_with_unit(&self, f: &mut fmt::Formatter<'_>, unit: f64) -> fmt::Result {
        writeln!(
            f,
            "Name: {}, Convention: {}, Reference date: {}",
            self.name, self.convention, self.reference_date
        )?;

        write!(f, "Maturity \\ Termination")?;
        for termination in &self.terminations {
            write!(f, "\t{}", termination)?;
        }
        writeln!(f)?;

        for &maturity in &self.maturities {
            write!(f, "{}", maturity)?;
            for &termination in &self.terminations {
                match self.get(maturity, termination) {
                    Some(value) => write!(f, "\t{}", value / unit)?,
                    None => write!(f, "\t")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Display adapter scaling every value by `1 / unit`.
pub(crate) struct UnitScaled<'a>(pub(crate) &'a DataTableBasic, pub(crate) f64);

impl fmt::Display for UnitScaled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_with_unit(f, self.1)
    }
}

impl fmt::Display for DataTableBasic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_unit(f, 1.0)
    }
}

impl DataTable for DataTableBasic {
    fn name(&self) -> &str {
        &self.name
    }

    fn convention(&self) -> TableConvention {
        self.convention
    }

    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn schedule_metadata(&self) -> &ScheduleMetaData {
        &self.schedule_metadata
    }

    fn value(&self, maturity: i32, termination: i32) -> Result<f64, TableError> {
        self.get(maturity, termination).ok_or_else(|| {
            QueryError::NoEntry {
                maturity,
                termination,
            }
            .into()
        })
    }

    fn value_continuous(&self, maturity: f64, termination: f64) -> Result<f64, TableError> {
        self.get_continuous(maturity, termination).ok_or_else(|| {
            QueryError::NoContinuousEntry {
                maturity,
                termination,
            }
            .into()
        })
    }

    fn contains_entry_for(&self, maturity: i32, termination: i32) -> bool {
        self.entries
            .contains_key(&TenorPoint::new(maturity, termination))
    }

    fn contains_entry_for_continuous(&self, maturity: f64, termination: f64) -> bool {
        self.get_continuous(maturity, termination).is_some()
    }

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn maturities(&self) -> &BTreeSet<i32> {
        &self.maturities
    }

    fn terminations(&self) -> &BTreeSet<i32> {
        &self.terminations
    }

    fn terminations_for_maturity(&self, maturity: i32) -> BTreeSet<i32> {
        self.entries
            .range(TenorPoint::new(maturity, i32::MIN)..=TenorPoint::new(maturity, i32::MAX))
            .map(|(p, _)| p.termination)
            .collect()
    }

    fn maturities_for_termination(&self, termination: i32) -> BTreeSet<i32> {
        self.entries
            .keys()
            .filter(|p| p.termination == termination)
            .map(|p| p.maturity)
            .collect()
    }

    fn to_string_with_unit(&self, unit: f64) -> String {
        UnitScaled(self, unit).to_string()
    }
}
