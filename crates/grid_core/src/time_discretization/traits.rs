//! Time grid contract and search outcome.

use super::TimeDiscretizationFromArray;
use crate::types::DiscretizationError;

/// Outcome of an exact search on a time grid.
///
/// [`to_raw`](TimeIndex::to_raw) encodes it as a single signed integer: the
/// index when found, `-(insertion_point) - 1` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeIndex {
    /// The time is a grid point at this index.
    Found(usize),
    /// The time is not a grid point; it would be inserted at this index.
    NotFound {
        /// Index of the first grid point greater than the time
        insertion_point: usize,
    },
}

impl TimeIndex {
    /// Signed encoding of the outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_core::time_discretization::TimeIndex;
    ///
    /// assert_eq!(TimeIndex::Found(3).to_raw(), 3);
    /// assert_eq!(TimeIndex::NotFound { insertion_point: 0 }.to_raw(), -1);
    /// assert_eq!(TimeIndex::NotFound { insertion_point: 2 }.to_raw(), -3);
    /// ```
    #[inline]
    pub fn to_raw(self) -> isize {
        match self {
            TimeIndex::Found(index) => index as isize,
            TimeIndex::NotFound { insertion_point } => -(insertion_point as isize) - 1,
        }
    }

    /// Decode a signed search result.
    #[inline]
    pub fn from_raw(raw: isize) -> Self {
        if raw >= 0 {
            TimeIndex::Found(raw as usize)
        } else {
            TimeIndex::NotFound {
                insertion_point: (-raw - 1) as usize,
            }
        }
    }

    /// Index of the grid point, if found.
    #[inline]
    pub fn found(self) -> Option<usize> {
        match self {
            TimeIndex::Found(index) => Some(index),
            TimeIndex::NotFound { .. } => None,
        }
    }
}

/// An ascending grid of distinct times with a tick size.
///
/// The tick size is the resolution of the grid: every grid point is a
/// multiple of it, and searches round the queried time to the nearest tick
/// before comparing.
///
/// Set operations produce new grids and combine tick sizes: `union` keeps
/// the finer tick and `intersect` the coarser one. Points of the other
/// operand are re-expressed at the resulting tick, so the operations are not
/// lossless when tick sizes differ: for a grid `b` finer than `a`,
/// `b.union(&b.intersect(&a))` need not equal `b`.
pub trait TimeDiscretization {
    /// The grid points in ascending order.
    fn as_slice(&self) -> &[f64];

    /// Resolution of the grid.
    fn tick_size(&self) -> f64;

    /// Exact search for `time` after rounding it to the tick size.
    fn find_time_index(&self, time: f64) -> TimeIndex;

    /// Number of grid points.
    fn number_of_times(&self) -> usize {
        self.as_slice().len()
    }

    /// Number of intervals between grid points (0 for grids with fewer than two points).
    fn number_of_time_steps(&self) -> usize {
        self.number_of_times().saturating_sub(1)
    }

    /// Grid point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= number_of_times()`.
    fn time(&self, index: usize) -> f64 {
        self.as_slice()[index]
    }

    /// Length of the interval starting at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= number_of_time_steps()`.
    fn time_step(&self, index: usize) -> f64 {
        self.time(index + 1) - self.time(index)
    }

    /// First grid point, `None` on an empty grid.
    fn first_time(&self) -> Option<f64> {
        self.as_slice().first().copied()
    }

    /// Last grid point, `None` on an empty grid.
    fn last_time(&self) -> Option<f64> {
        self.as_slice().last().copied()
    }

    /// Index of `time`, or `-(insertion_point) - 1` if it is not a grid point.
    fn time_index(&self, time: f64) -> isize {
        self.find_time_index(time).to_raw()
    }

    /// Largest index whose time is `<= time`, or -1 below the first point.
    fn time_index_nearest_less_or_equal(&self, time: f64) -> isize {
        match self.find_time_index(time) {
            TimeIndex::Found(index) => index as isize,
            TimeIndex::NotFound { insertion_point } => insertion_point as isize - 1,
        }
    }

    /// Smallest index whose time is `>= time`, or `number_of_times()` above
    /// the last point.
    fn time_index_nearest_greater_or_equal(&self, time: f64) -> usize {
        match self.find_time_index(time) {
            TimeIndex::Found(index) => index,
            TimeIndex::NotFound { insertion_point } => insertion_point,
        }
    }

    /// Grid holding every point of both grids, at the finer tick size.
    fn union(&self, that: &dyn TimeDiscretization) -> TimeDiscretizationFromArray {
        let tick_size = self.tick_size().min(that.tick_size());
        let times = self.as_slice().iter().chain(that.as_slice());
        TimeDiscretizationFromArray::from_valid(times.copied(), tick_size)
    }

    /// Grid holding the points common to both grids, at the coarser tick size.
    ///
    /// Both operands are rounded to the coarser tick before they are compared.
    fn intersect(&self, that: &dyn TimeDiscretization) -> TimeDiscretizationFromArray {
        let tick_size = self.tick_size().max(that.tick_size());
        let ours = TimeDiscretizationFromArray::from_valid(self.as_slice().iter().copied(), tick_size);
        let theirs =
            TimeDiscretizationFromArray::from_valid(that.as_slice().iter().copied(), tick_size);
        let common = ours
            .as_slice()
            .iter()
            .copied()
            .filter(|&t| theirs.find_time_index(t).found().is_some());
        TimeDiscretizationFromArray::from_valid(common, tick_size)
    }

    /// Grid of the points satisfying `keep`, rebuilt at the same tick size.
    fn filter(&self, keep: &dyn Fn(f64) -> bool) -> TimeDiscretizationFromArray {
        let kept = self.as_slice().iter().copied().filter(|&t| keep(t));
        let kept = TimeDiscretizationFromArray::from_valid(kept, self.tick_size());
        self.intersect(&kept)
    }

    /// Grid with every point moved by `shift`, at the same tick size.
    ///
    /// # Errors
    ///
    /// `DiscretizationError::NonFiniteTime` if a shifted point is not finite.
    fn time_shifted(&self, shift: f64) -> Result<TimeDiscretizationFromArray, DiscretizationError> {
        let shifted: Vec<f64> = self.as_slice().iter().map(|t| t + shift).collect();
        TimeDiscretizationFromArray::new(&shifted, self.tick_size())
    }
}
