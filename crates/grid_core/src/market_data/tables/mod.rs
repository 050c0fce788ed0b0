//! Tenor-indexed data tables.
//!
//! A table stores values at integer (maturity, termination) offsets counted
//! in the units of its [`TableConvention`]. Two implementations of the
//! [`DataTable`] contract are provided:
//!
//! - [`DataTableBasic`]: exact lookups only
//! - [`DataTableLinear`]: exact lookups, then linear or bilinear interpolation

mod basic;
mod convention;
mod interpolated;
mod tenor;
mod traits;

pub use basic::DataTableBasic;
pub use convention::TableConvention;
pub use interpolated::DataTableLinear;
pub use tenor::{ScheduleMetaData, TenorPoint};
pub use traits::DataTable;
