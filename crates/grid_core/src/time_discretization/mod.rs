//! Time discretizations: ascending time grids with a resolution.
//!
//! [`TimeDiscretization`] is the read-only contract with search and set
//! algebra; [`TimeDiscretizationFromArray`] is the vector-backed grid every
//! operation produces.

mod array;
mod traits;

pub use array::{TimeDiscretizationFromArray, DEFAULT_TICK_SIZE};
pub use traits::{TimeDiscretization, TimeIndex};
