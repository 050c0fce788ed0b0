//! Grid command implementation
//!
//! Builds an equidistant time grid and applies shift, union and intersection.

use grid_core::time_discretization::{TimeDiscretization, TimeDiscretizationFromArray};
use tracing::{debug, info};

use crate::Result;

/// Parameters of the grid command
#[derive(Debug, Clone, Default)]
pub struct GridArgs {
    /// First time
    pub start: f64,
    /// Number of steps after the first time
    pub steps: usize,
    /// Step length
    pub delta: f64,
    /// Tick size of the constructed grid
    pub tick_size: f64,
    /// Shift applied after construction
    pub shift: Option<f64>,
    /// Times to merge in
    pub union_with: Vec<f64>,
    /// Times to intersect with
    pub intersect_with: Vec<f64>,
    /// Tick size of the `union_with` and `intersect_with` grids
    pub other_tick_size: Option<f64>,
}

/// Run the grid command
pub fn run(args: &GridArgs) -> Result<String> {
    info!(
        start = args.start,
        steps = args.steps,
        delta = args.delta,
        tick_size = args.tick_size,
        "building time grid"
    );

    let mut grid =
        TimeDiscretizationFromArray::equidistant(args.start, args.steps, args.delta, args.tick_size)?;

    if let Some(shift) = args.shift {
        grid = grid.time_shifted(shift)?;
        debug!(shift, "shifted grid");
    }

    let other_tick = args.other_tick_size.unwrap_or(args.tick_size);
    if !args.union_with.is_empty() {
        let other = TimeDiscretizationFromArray::new(&args.union_with, other_tick)?;
        grid = grid.union(&other);
        debug!(points = grid.number_of_times(), "union applied");
    }
    if !args.intersect_with.is_empty() {
        let other = TimeDiscretizationFromArray::new(&args.intersect_with, other_tick)?;
        grid = grid.intersect(&other);
        debug!(points = grid.number_of_times(), "intersection applied");
    }

    Ok(grid.to_string())
}
