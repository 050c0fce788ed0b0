//! # grid_core: Market-Data Grids for Derivatives Analytics
//!
//! ## Foundation Layer Role
//!
//! grid_core is the bottom layer of the tenorgrid workspace, providing:
//! - Piecewise linear and bilinear interpolation (`math::interpolators`)
//! - Sparse tenor tables with exact, slice and surface lookups (`market_data::tables`)
//! - Ordered time grids with tick-size aware search and set algebra (`time_discretization`)
//! - Reference dates and schedule conventions (`types::time`)
//! - Table errors `ConstructionError`, `QueryError`, `TableError` (`market_data::error`)
//!   and `InterpolationError`, `DiscretizationError` (`types::error`)
//!
//! ## Minimal Dependencies
//!
//! - num-traits: Traits for generic numerical computation
//! - chrono: Calendar dates
//! - thiserror: Error derivation
//! - tracing: Structured diagnostics
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use grid_core::market_data::tables::{DataTable, DataTableLinear, TableConvention};
//! use grid_core::time_discretization::{TimeDiscretization, TimeDiscretizationFromArray};
//! use grid_core::types::Date;
//!
//! // Swaption-style table: maturities x terminations in months
//! let table = DataTableLinear::new(
//!     "volatilities",
//!     TableConvention::Months,
//!     Date::from_ymd(2024, 1, 2).unwrap(),
//!     Default::default(),
//!     &[12, 12, 24, 24],
//!     &[12, 24, 12, 24],
//!     &[0.20, 0.22, 0.24, 0.26],
//! )
//! .unwrap();
//!
//! assert_eq!(table.value(12, 24).unwrap(), 0.22);
//! let mid = table.value(18, 18).unwrap();
//! assert!((mid - 0.23).abs() < 1e-12);
//!
//! // Time grid algebra
//! let grid = TimeDiscretizationFromArray::new(&[0.0, 0.5, 1.0], 0.25).unwrap();
//! assert_eq!(grid.time_index(0.5), 1);
//! assert_eq!(grid.time_index(0.75), -3);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for dates, conventions, tenor points and time grids

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod time_discretization;
pub mod types;
