//! Core calendar and error types.
//!
//! This module provides:
//! - `time`: Reference dates and schedule conventions (Date, DayCountConvention, BusinessDayConvention)
//! - `error`: Structured error types for dates, interpolation and time discretisation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`DayCountConvention`], [`BusinessDayConvention`] from `time`
//! - [`DateError`], [`InterpolationError`], [`DiscretizationError`] from `error`

pub mod error;
pub mod time;

pub use error::{DateError, DiscretizationError, InterpolationError};
pub use time::{BusinessDayConvention, Date, DayCountConvention};
