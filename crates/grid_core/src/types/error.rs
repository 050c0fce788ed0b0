//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `InterpolationError`: Errors from interpolation operations
//! - `DiscretizationError`: Errors from time grid construction
//!
//! Table-specific errors live in [`crate::market_data::error`].

use std::fmt;
use thiserror::Error;

/// Errors building a reference [`Date`](crate::types::Date).
///
/// # Examples
/// ```
/// use grid_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

/// Errors from building or evaluating a linear or bilinear interpolant.
///
/// Table queries wrap these in
/// [`QueryError::Interpolation`](crate::market_data::QueryError::Interpolation).
///
/// # Examples
/// ```
/// use grid_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside knot range"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query outside the knots of a non-extrapolating interpolant.
    #[error("Query point {x} outside knot range [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Fewer knots than the interpolant needs.
    #[error("Too few knots: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Knots are not strictly increasing.
    #[error("Knots are not strictly increasing at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Inconsistent dimensions of knots and values.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Time discretisation errors.
///
/// Raised when a time grid cannot be constructed. Queries on an existing
/// grid never fail: searches report misses through sentinel indices.
///
/// # Examples
/// ```
/// use grid_core::types::DiscretizationError;
///
/// let err = DiscretizationError::InvalidTickSize { tick_size: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid tick size 0: must be positive and finite");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiscretizationError {
    /// Tick size is zero, negative or not finite.
    #[error("Invalid tick size {tick_size}: must be positive and finite")]
    InvalidTickSize {
        /// The rejected tick size
        tick_size: f64,
    },

    /// A time point is NaN or infinite.
    #[error("Non-finite time {time} at position {index}")]
    NonFiniteTime {
        /// Position in the input
        index: usize,
        /// The offending value
        time: f64,
    },

    /// Equidistant step is zero, negative or not finite.
    #[error("Invalid time step {delta}: must be positive and finite")]
    InvalidStep {
        /// The rejected step
        delta: f64,
    },
}
