//! Market data table error types.
//!
//! Two families of failures exist:
//!
//! - [`ConstructionError`]: the input data cannot form a table
//! - [`QueryError`]: a lookup cannot be answered from the stored data
//!
//! [`TableError`] wraps both so that operations that construct and query
//! (such as [`DataTableLinear::from_table`](crate::market_data::tables::DataTableLinear::from_table))
//! can use `?` throughout. None of these errors are transient.

use crate::types::InterpolationError;
use std::fmt;
use thiserror::Error;

/// Axis of a tenor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridAxis {
    /// Maturity offsets (rows)
    Maturity,
    /// Termination offsets relative to maturity (columns)
    Termination,
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridAxis::Maturity => write!(f, "maturity"),
            GridAxis::Termination => write!(f, "termination"),
        }
    }
}

/// Errors raised while building a table.
///
/// # Examples
///
/// ```
/// use grid_core::market_data::ConstructionError;
///
/// let err = ConstructionError::DuplicateTenorPoint { maturity: 12, termination: 24 };
/// assert_eq!(format!("{}", err), "Duplicate tenor point (12, 24)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    /// Parallel inputs have different lengths.
    #[error("Mismatched input lengths: {maturities} maturities, {terminations} terminations, {values} values")]
    LengthMismatch {
        /// Number of maturities supplied
        maturities: usize,
        /// Number of terminations supplied
        terminations: usize,
        /// Number of values supplied
        values: usize,
    },

    /// The same (maturity, termination) pair was supplied twice.
    #[error("Duplicate tenor point ({maturity}, {termination})")]
    DuplicateTenorPoint {
        /// Maturity offset
        maturity: i32,
        /// Termination offset
        termination: i32,
    },

    /// Convention label outside YEARS, MONTHS, WEEKS, DAYS.
    #[error("Unknown table convention: {0}")]
    UnknownConvention(String),
}

/// Errors raised while answering a value query.
///
/// # Examples
///
/// ```
/// use grid_core::market_data::QueryError;
///
/// let err = QueryError::IrregularGrid {
///     table: "swaption vols".to_string(),
///     size: 7,
///     maturities: 3,
///     terminations: 3,
/// };
/// assert!(format!("{}", err).contains("requires a regular grid"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// No stored value at an exact grid point.
    #[error("No entry for ({maturity}, {termination})")]
    NoEntry {
        /// Maturity offset
        maturity: i32,
        /// Termination offset
        termination: i32,
    },

    /// No stored value at a continuous coordinate.
    #[error("No entry for continuous coordinate ({maturity}, {termination})")]
    NoContinuousEntry {
        /// Maturity in years
        maturity: f64,
        /// Termination in years
        termination: f64,
    },

    /// Surface interpolation needs every cell of maturities x terminations.
    #[error("Interpolation of {table} requires a regular grid: {size} entries for {maturities} maturities x {terminations} terminations")]
    IrregularGrid {
        /// Table name
        table: String,
        /// Number of stored entries
        size: usize,
        /// Number of distinct maturities
        maturities: usize,
        /// Number of distinct terminations
        terminations: usize,
    },

    /// Too few points along an axis to interpolate.
    #[error("Insufficient data along {axis} axis: got {got}, need {need}")]
    InsufficientData {
        /// Axis being interpolated
        axis: GridAxis,
        /// Points available
        got: usize,
        /// Points required
        need: usize,
    },

    /// Underlying interpolator rejected the data or query.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}

/// Any table failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Table could not be built.
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// Value could not be resolved.
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl From<InterpolationError> for TableError {
    fn from(err: InterpolationError) -> Self {
        TableError::Query(QueryError::Interpolation(err))
    }
}
