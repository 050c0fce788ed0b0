//! Market data containers keyed by tenor.

pub mod error;
pub mod tables;

pub use error::{ConstructionError, GridAxis, QueryError, TableError};
