//! Tenor table with linear and bilinear interpolation between grid nodes.

use super::basic::UnitScaled;
use super::{DataTable, DataTableBasic, ScheduleMetaData, TableConvention, TenorPoint};
use crate::market_data::error::{ConstructionError, GridAxis, QueryError, TableError};
use crate::math::interpolators::{BilinearInterpolator, Interpolator, LinearInterpolator};
use crate::types::Date;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;
use tracing::{debug, trace, warn};

/// Tenor table answering queries between grid nodes.
///
/// Every query is resolved in this order:
///
/// 1. A stored value at the exact coordinate is returned unchanged.
/// 2. If the table has a single maturity and the query is on it, the
///    terminations of that row are interpolated linearly (and extrapolated
///    along the outer segments).
/// 3. Symmetrically for a single termination column.
/// 4. Otherwise the table must be a regular grid (every maturity x
///    termination cell populated) and the value is read from a bilinear
///    surface over the full axes. Outside the axes the surface is flat.
///
/// The surface is built on first use and shared by later queries; it is
/// never serialised or cloned, only rebuilt from the entries.
///
/// Continuous queries are rounded to the table's convention before step 1
/// is re-applied, so queries rounding to the same cell return the same value.
///
/// # Example
///
/// ```
/// use grid_core::market_data::tables::{DataTable, DataTableLinear, TableConvention};
/// use grid_core::types::Date;
///
/// let table = DataTableLinear::new(
///     "swaption vols",
///     TableConvention::Years,
///     Date::from_ymd(2024, 1, 2).unwrap(),
///     Default::default(),
///     &[1, 1, 5, 5],
///     &[2, 10, 2, 10],
///     &[0.30, 0.26, 0.24, 0.20],
/// )
/// .unwrap();
///
/// assert_eq!(table.value(5, 2).unwrap(), 0.24);
/// assert!((table.value(3, 6).unwrap() - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct DataTableLinear {
    base: DataTableBasic,
    surface: OnceLock<BilinearInterpolator<f64>>,
}

impl DataTableLinear {
    /// Create a table without entries. Every value query on it fails.
    pub fn empty(
        name: impl Into<String>,
        convention: TableConvention,
        reference_date: Date,
        schedule_metadata: ScheduleMetaData,
    ) -> Self {
        Self::from_base(DataTableBasic::empty(
            name,
            convention,
            reference_date,
            schedule_metadata,
        ))
    }

    /// Create a table from parallel slices of maturities, terminations and values.
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
        DataTableBasic::new(
            name,
            convention,
            reference_date,
            schedule_metadata,
            maturities,
            terminations,
            values,
        )
        .map(Self::from_base)
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
        DataTableBasic::from_vecs(
            name,
            convention,
            reference_date,
            schedule_metadata,
            maturities,
            terminations,
            values,
        )
        .map(Self::from_base)
    }

    /// Materialise any table into an interpolating one.
    ///
    /// Every stored (maturity, termination) value of `table` is copied, so
    /// the result answers identically at those points and only interpolates
    /// elsewhere.
    ///
    /// # Errors
    ///
    /// Propagates failures of `table` when reading its stored values.
    pub fn from_table<D: DataTable + ?Sized>(table: &D) -> Result<Self, TableError> {
        let mut entries = Vec::with_capacity(table.size());
        for &maturity in table.maturities() {
            for termination in table.terminations_for_maturity(maturity) {
                let value = table.value(maturity, termination)?;
                entries.push((TenorPoint::new(maturity, termination), value));
            }
        }

        let base = DataTableBasic::from_entries(
            table.name(),
            table.convention(),
            table.reference_date(),
            table.schedule_metadata().clone(),
            entries,
        )?;
        Ok(Self::from_base(base))
    }

    fn from_base(base: DataTableBasic) -> Self {
        Self {
            base,
            surface: OnceLock::new(),
        }
    }

    /// The exact-match table holding the entries.
    #[inline]
    pub fn base(&self) -> &DataTableBasic {
        &self.base
    }

    /// Whether the bilinear surface has been built.
    #[inline]
    pub fn has_surface(&self) -> bool {
        self.surface.get().is_some()
    }

    /// Interpolate along the only row or column of a degenerate table.
    ///
    /// `fixed` is the coordinate on the single-valued axis, `query` the
    /// coordinate along `axis`.
    fn slice_value(&self, axis: GridAxis, fixed: i32, query: i32) -> Result<f64, TableError> {
        let knots = match axis {
            GridAxis::Termination => self.base.terminations_for_maturity(fixed),
            GridAxis::Maturity => self.base.maturities_for_termination(fixed),
        };
        if knots.len() < 2 {
            return Err(QueryError::InsufficientData {
                axis,
                got: knots.len(),
                need: 2,
            }
            .into());
        }

        let mut xs = Vec::with_capacity(knots.len());
        let mut ys = Vec::with_capacity(knots.len());
        for knot in knots {
            let (maturity, termination) = match axis {
                GridAxis::Termination => (fixed, knot),
                GridAxis::Maturity => (knot, fixed),
            };
            xs.push(f64::from(knot));
            ys.push(self.base.value(maturity, termination)?);
        }

        trace!(table = %self.base.name(), %axis, fixed, query, "slice interpolation");
        let curve = LinearInterpolator::new(&xs, &ys)?.with_extrapolation();
        Ok(curve.interpolate(f64::from(query))?)
    }

    fn check_regular(&self) -> Result<(), QueryError> {
        let size = self.base.size();
        let maturities = self.base.maturities().len();
        let terminations = self.base.terminations().len();
        if size != maturities * terminations {
            warn!(
                table = %self.base.name(),
                size,
                maturities,
                terminations,
                "surface interpolation rejected: grid is not regular"
            );
            return Err(QueryError::IrregularGrid {
                table: self.base.name().to_string(),
                size,
                maturities,
                terminations,
            });
        }
        Ok(())
    }

    /// The bilinear surface, built on first call.
    ///
    /// Concurrent first callers may each build a surface; only the first one
    /// published is kept and all callers read that one.
    fn surface(&self) -> Result<&BilinearInterpolator<f64>, TableError> {
        if let Some(surface) = self.surface.get() {
            return Ok(surface);
        }
        let built = self.build_surface()?;
        Ok(self.surface.get_or_init(|| built))
    }

    fn build_surface(&self) -> Result<BilinearInterpolator<f64>, TableError> {
        let maturities = self.base.maturities();
        let terminations = self.base.terminations();

        for (axis, len) in [
            (GridAxis::Maturity, maturities.len()),
            (GridAxis::Termination, terminations.len()),
        ] {
            if len < 2 {
                return Err(QueryError::InsufficientData { axis, got: len, need: 2 }.into());
            }
        }

        let mut rows = Vec::with_capacity(maturities.len());
        for &maturity in maturities {
            let row = terminations
                .iter()
                .map(|&termination| self.base.value(maturity, termination))
                .collect::<Result<Vec<f64>, TableError>>()?;
            rows.push(row);
        }

        let xs: Vec<f64> = maturities.iter().map(|&m| f64::from(m)).collect();
        let ys: Vec<f64> = terminations.iter().map(|&t| f64::from(t)).collect();
        let zs: Vec<&[f64]> = rows.iter().map(Vec::as_slice).collect();

        debug!(
            table = %self.base.name(),
            maturities = xs.len(),
            terminations = ys.len(),
            "building bilinear surface"
        );
        Ok(BilinearInterpolator::new(&xs, &ys, &zs)?)
    }
}

impl Clone for DataTableLinear {
    /// Rebuilds the table from its entries; the surface is not carried over
    /// and is rebuilt on the clone's first surface query.
    fn clone(&self) -> Self {
        Self::from_base(self.base.clone())
    }
}

impl fmt::Display for DataTableLinear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataTableLinear with base table: {}", self.base)
    }
}

impl DataTable for DataTableLinear {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn convention(&self) -> TableConvention {
        self.base.convention()
    }

    fn reference_date(&self) -> Date {
        self.base.reference_date()
    }

    fn schedule_metadata(&self) -> &ScheduleMetaData {
        self.base.schedule_metadata()
    }

    fn value(&self, maturity: i32, termination: i32) -> Result<f64, TableError> {
        if let Some(value) = self.base.get(maturity, termination) {
            return Ok(value);
        }

        let maturities = self.base.maturities();
        if maturities.len() == 1 && maturities.contains(&maturity) {
            return self.slice_value(GridAxis::Termination, maturity, termination);
        }

        let terminations = self.base.terminations();
        if terminations.len() == 1 && terminations.contains(&termination) {
            return self.slice_value(GridAxis::Maturity, termination, maturity);
        }

        self.check_regular()?;
        let surface = self.surface()?;
        Ok(surface.interpolate_clamped(f64::from(maturity), f64::from(termination)))
    }

    fn value_continuous(&self, maturity: f64, termination: f64) -> Result<f64, TableError> {
        if let Some(value) = self.base.get_continuous(maturity, termination) {
            return Ok(value);
        }

        let convention = self.base.convention();
        let rounded_maturity = convention.to_grid_units(maturity);
        let rounded_termination = convention
            .to_grid_units(termination)
            .saturating_sub(rounded_maturity);

        self.value(rounded_maturity, rounded_termination)
    }

    fn contains_entry_for(&self, maturity: i32, termination: i32) -> bool {
        self.base.contains_entry_for(maturity, termination)
    }

    fn contains_entry_for_continuous(&self, maturity: f64, termination: f64) -> bool {
        self.base.contains_entry_for_continuous(maturity, termination)
    }

    fn size(&self) -> usize {
        self.base.size()
    }

    fn maturities(&self) -> &BTreeSet<i32> {
        self.base.maturities()
    }

    fn terminations(&self) -> &BTreeSet<i32> {
        self.base.terminations()
    }

    fn terminations_for_maturity(&self, maturity: i32) -> BTreeSet<i32> {
        self.base.terminations_for_maturity(maturity)
    }

    fn maturities_for_termination(&self, termination: i32) -> BTreeSet<i32> {
        self.base.maturities_for_termination(termination)
    }

    fn to_string_with_unit(&self, unit: f64) -> String {
        format!(
            "DataTableLinear with base table: {}",
            UnitScaled(&self.base, unit)
        )
    }
}
