//! Time grid backed by a sorted vector.

use super::{TimeDiscretization, TimeIndex};
use crate::types::DiscretizationError;
use std::fmt;

/// One hour in year units.
pub const DEFAULT_TICK_SIZE: f64 = 1.0 / (365.0 * 24.0);

/// Time grid stored as an ascending vector of distinct tick multiples.
///
/// Construction rounds every time to the nearest multiple of the tick size
/// (ties to even), sorts the result and drops times that coincide after
/// rounding.
///
/// # Examples
///
/// ```
/// use grid_core::time_discretization::{TimeDiscretization, TimeDiscretizationFromArray};
///
/// let grid = TimeDiscretizationFromArray::new(&[1.0, 0.0, 0.49, 0.5], 0.25).unwrap();
/// assert_eq!(grid.as_slice(), &[0.0, 0.5, 1.0]);
/// assert_eq!(grid.time_index_nearest_less_or_equal(0.7), 1);
/// assert_eq!(grid.time_index_nearest_greater_or_equal(1.2), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "serde_impl::GridRepr"))]
pub struct TimeDiscretizationFromArray {
    times: Vec<f64>,
    tick_size: f64,
}

impl TimeDiscretizationFromArray {
    /// Build a grid from arbitrary times.
    ///
    /// # Errors
    ///
    /// * `DiscretizationError::InvalidTickSize` - Tick size not positive and finite
    /// * `DiscretizationError::NonFiniteTime` - A time is NaN or infinite
    pub fn new(times: &[f64], tick_size: f64) -> Result<Self, DiscretizationError> {
        check_tick_size(tick_size)?;
        if let Some((index, &time)) = times.iter().enumerate().find(|(_, t)| !t.is_finite()) {
            return Err(DiscretizationError::NonFiniteTime { index, time });
        }
        Ok(Self::from_valid(times.iter().copied(), tick_size))
    }

    /// Build a grid at [`DEFAULT_TICK_SIZE`].
    pub fn with_default_tick(times: &[f64]) -> Result<Self, DiscretizationError> {
        Self::new(times, DEFAULT_TICK_SIZE)
    }

    /// Build the grid `initial + i * delta` for `i` in `0..=number_of_steps`.
    ///
    /// # Errors
    ///
    /// * `DiscretizationError::InvalidStep` - `delta` not positive and finite
    /// * `DiscretizationError::InvalidTickSize` - Tick size not positive and finite
    /// * `DiscretizationError::NonFiniteTime` - A generated time is not finite
    pub fn equidistant(
        initial: f64,
        number_of_steps: usize,
        delta: f64,
        tick_size: f64,
    ) -> Result<Self, DiscretizationError> {
        if !(delta.is_finite() && delta > 0.0) {
            return Err(DiscretizationError::InvalidStep { delta });
        }
        let times: Vec<f64> = (0..=number_of_steps)
            .map(|i| initial + i as f64 * delta)
            .collect();
        Self::new(&times, tick_size)
    }

    /// Grid without points.
    pub fn empty(tick_size: f64) -> Result<Self, DiscretizationError> {
        Self::new(&[], tick_size)
    }

    /// Build from times and a tick size already known to be valid.
    pub(crate) fn from_valid(times: impl IntoIterator<Item = f64>, tick_size: f64) -> Self {
        let mut times: Vec<f64> = times
            .into_iter()
            .map(|t| round_to_tick(t, tick_size))
            .collect();
        times.sort_by(f64::total_cmp);
        times.dedup();
        Self { times, tick_size }
    }

    /// Copy of the grid points.
    pub fn to_vec(&self) -> Vec<f64> {
        self.times.clone()
    }

    /// Iterate over the grid points in ascending order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.times.iter().copied()
    }

    /// Whether the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

#[inline]
fn round_to_tick(time: f64, tick_size: f64) -> f64 {
    let rounded = (time / tick_size).round_ties_even() * tick_size;
    // -0.0 would sort apart from 0.0 under total_cmp
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn check_tick_size(tick_size: f64) -> Result<(), DiscretizationError> {
    if tick_size.is_finite() && tick_size > 0.0 {
        Ok(())
    } else {
        Err(DiscretizationError::InvalidTickSize { tick_size })
    }
}

impl TimeDiscretization for TimeDiscretizationFromArray {
    fn as_slice(&self) -> &[f64] {
        &self.times
    }

    fn tick_size(&self) -> f64 {
        self.tick_size
    }

    fn find_time_index(&self, time: f64) -> TimeIndex {
        let rounded = round_to_tick(time, self.tick_size);
        match self.times.binary_search_by(|t| t.total_cmp(&rounded)) {
            Ok(index) => TimeIndex::Found(index),
            Err(insertion_point) => TimeIndex::NotFound { insertion_point },
        }
    }
}

impl<'a> IntoIterator for &'a TimeDiscretizationFromArray {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TimeDiscretizationFromArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeDiscretization [tick size {}]: [", self.tick_size)?;
        for (i, t) in self.times.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", t)?;
        }
        write!(f, "]")
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::TimeDiscretizationFromArray;
    use crate::types::DiscretizationError;

    /// Unvalidated wire form; deserialised grids go through the constructor.
    #[derive(serde::Deserialize)]
    pub(super) struct GridRepr {
        times: Vec<f64>,
        tick_size: f64,
    }

    impl TryFrom<GridRepr> for TimeDiscretizationFromArray {
        type Error = DiscretizationError;

        fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
            TimeDiscretizationFromArray::new(&repr.times, repr.tick_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid(times: &[f64], tick: f64) -> TimeDiscretizationFromArray {
        TimeDiscretizationFromArray::new(times, tick).unwrap()
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_rounds_sorts_and_deduplicates() {
        let g = grid(&[2.0, 0.26, 1.0, 0.24, 2.0], 0.5);
        // 0.26 rounds up to 0.5, 0.24 down to 0.0
        assert_eq!(g.as_slice(), &[0.0, 0.5, 1.0, 2.0]);
        assert_eq!(g.tick_size(), 0.5);
    }

    #[test]
    fn test_rounding_ties_to_even() {
        // 0.25 / 0.5 = 0.5 -> 0, 0.75 / 0.5 = 1.5 -> 2
        let g = grid(&[0.25, 0.75], 0.5);
        assert_eq!(g.as_slice(), &[0.0, 1.0]);
    }

    #[test]
    fn test_invalid_tick_size() {
        for tick in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                TimeDiscretizationFromArray::new(&[1.0], tick),
                Err(DiscretizationError::InvalidTickSize { .. })
            ));
        }
    }

    #[test]
    fn test_non_finite_time() {
        match TimeDiscretizationFromArray::new(&[0.0, f64::NAN], 0.1) {
            Err(DiscretizationError::NonFiniteTime { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected NonFiniteTime, got {:?}", other),
        }
    }

    #[test]
    fn test_default_tick_is_one_hour() {
        let g = TimeDiscretizationFromArray::with_default_tick(&[0.5]).unwrap();
        assert_relative_eq!(g.tick_size(), 1.0 / 8760.0);
        assert_relative_eq!(g.time(0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_equidistant() {
        let g = TimeDiscretizationFromArray::equidistant(1.0, 4, 0.5, 0.25).unwrap();
        assert_eq!(g.as_slice(), &[1.0, 1.5, 2.0, 2.5, 3.0]);
        assert_eq!(g.number_of_times(), 5);
        assert_eq!(g.number_of_time_steps(), 4);
        assert_eq!(g.time_step(2), 0.5);

        assert!(matches!(
            TimeDiscretizationFromArray::equidistant(0.0, 4, 0.0, 0.25),
            Err(DiscretizationError::InvalidStep { .. })
        ));
    }

    #[test]
    fn test_empty_grid() {
        let g = TimeDiscretizationFromArray::empty(0.1).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.number_of_time_steps(), 0);
        assert_eq!(g.first_time(), None);
        assert_eq!(g.last_time(), None);
        assert_eq!(g.time_index(1.0), -1);
        assert_eq!(g.time_index_nearest_less_or_equal(1.0), -1);
        assert_eq!(g.time_index_nearest_greater_or_equal(1.0), 0);
    }

    // ========================================
    // Search Tests
    // ========================================

    #[test]
    fn test_time_index_found_and_insertion_point() {
        let g = grid(&[0.0, 0.5, 1.0], 0.25);
        assert_eq!(g.time_index(0.5), 1);
        assert_eq!(g.find_time_index(0.5), TimeIndex::Found(1));
        assert_eq!(g.time_index(0.75), -3);
        assert_eq!(
            g.find_time_index(0.75),
            TimeIndex::NotFound { insertion_point: 2 }
        );
        assert_eq!(g.time_index(-1.0), -1);
        assert_eq!(g.time_index(5.0), -4);
    }

    #[test]
    fn test_time_index_rounds_query_to_tick() {
        let g = grid(&[0.0, 0.5, 1.0], 0.25);
        // 0.55 rounds to 0.5 at tick 0.25
        assert_eq!(g.time_index(0.55), 1);
        // 0.9 rounds to 1.0
        assert_eq!(g.time_index(0.9), 2);
    }

    #[test]
    fn test_nearest_sentinels() {
        let g = grid(&[1.0, 2.0, 3.0], 0.5);
        assert_eq!(g.time_index_nearest_less_or_equal(0.0), -1);
        assert_eq!(g.time_index_nearest_less_or_equal(2.5), 1);
        assert_eq!(g.time_index_nearest_less_or_equal(2.0), 1);
        assert_eq!(g.time_index_nearest_greater_or_equal(2.5), 2);
        assert_eq!(g.time_index_nearest_greater_or_equal(2.0), 1);
        assert_eq!(g.time_index_nearest_greater_or_equal(4.0), 3);
    }

    #[test]
    fn test_negative_zero_is_found() {
        let g = grid(&[-0.1, 1.0], 0.5);
        assert_eq!(g.time_index(0.0), 0);
        assert_eq!(g.time_index(-0.0), 0);
    }

    #[test]
    fn test_first_and_last_time() {
        let g = grid(&[3.0, 1.0, 2.0], 1.0);
        assert_eq!(g.first_time(), Some(1.0));
        assert_eq!(g.last_time(), Some(3.0));
    }

    // ========================================
    // Set Algebra Tests
    // ========================================

    #[test]
    fn test_union_keeps_finer_tick() {
        let a = grid(&[0.0, 1.0, 2.0], 1.0);
        let b = grid(&[0.5, 1.0], 0.5);
        let u = a.union(&b);
        assert_eq!(u.tick_size(), 0.5);
        assert_eq!(u.as_slice(), &[0.0, 0.5, 1.0, 2.0]);
    }

    #[test]
    fn test_intersect_keeps_coarser_tick() {
        let a = grid(&[0.0, 1.0, 2.0], 1.0);
        let b = grid(&[0.5, 1.0, 2.0, 3.0], 0.5);
        let i = a.intersect(&b);
        assert_eq!(i.tick_size(), 1.0);
        // b rounded to tick 1 is {0, 1, 2, 3}
        assert_eq!(i.as_slice(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_absorption_fails_for_finer_grid() {
        let coarse = grid(&[0.0, 1.0, 2.0], 1.0);
        let fine = grid(&[0.5, 1.5], 0.5);

        // Rounding to the finer tick and back is lossless for the coarse grid
        assert_eq!(coarse.intersect(&coarse.union(&fine)), coarse);

        // The fine grid is re-expressed at tick 1 by the intersection
        let common = fine.intersect(&coarse);
        assert_eq!(common.tick_size(), 1.0);
        assert_eq!(common.as_slice(), &[0.0, 2.0]);

        let back = fine.union(&common);
        assert_eq!(back.as_slice(), &[0.0, 0.5, 1.5, 2.0]);
        assert_ne!(back, fine);
    }

    #[test]
    fn test_filter_keeps_tick_size() {
        let g = grid(&[0.0, 0.25, 0.5, 0.75, 1.0], 0.25);
        let f = g.filter(&|t| t >= 0.5);
        assert_eq!(f.as_slice(), &[0.5, 0.75, 1.0]);
        assert_eq!(f.tick_size(), 0.25);

        let none = g.filter(&|_| false);
        assert!(none.is_empty());
    }

    #[test]
    fn test_time_shifted() {
        let g = grid(&[0.0, 0.5], 0.25);
        let s = g.time_shifted(1.0).unwrap();
        assert_eq!(s.as_slice(), &[1.0, 1.5]);
        assert_eq!(s.tick_size(), 0.25);

        assert!(g.time_shifted(f64::NAN).is_err());
    }

    #[test]
    fn test_iteration() {
        let g = grid(&[0.0, 1.0], 0.5);
        let collected: Vec<f64> = g.iter().collect();
        assert_eq!(collected, g.to_vec());
        let sum: f64 = (&g).into_iter().sum();
        assert_eq!(sum, 1.0);
    }

    #[test]
    fn test_display() {
        let g = grid(&[0.0, 0.5], 0.5);
        assert_eq!(g.to_string(), "TimeDiscretization [tick size 0.5]: [0, 0.5]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialisation_validates() {
        let g: TimeDiscretizationFromArray =
            serde_json::from_str(r#"{"times": [1.0, 0.0], "tick_size": 0.5}"#).unwrap();
        assert_eq!(g.as_slice(), &[0.0, 1.0]);

        let bad = serde_json::from_str::<TimeDiscretizationFromArray>(
            r#"{"times": [1.0], "tick_size": 0.0}"#,
        );
        assert!(bad.is_err());
    }

    // ========================================
    // Property-based Tests
    // ========================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn times_strategy() -> impl Strategy<Value = Vec<f64>> {
            prop::collection::vec(-100.0f64..100.0, 0..40)
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_grid_is_strictly_increasing(times in times_strategy()) {
                let g = TimeDiscretizationFromArray::new(&times, 0.01).unwrap();
                for pair in g.as_slice().windows(2) {
                    prop_assert!(pair[0] < pair[1]);
                }
            }

            #[test]
            fn test_search_sentinels(times in times_strategy(), query in -200.0f64..200.0) {
                let g = TimeDiscretizationFromArray::new(&times, 0.01).unwrap();
                let n = g.number_of_times();
                let le = g.time_index_nearest_less_or_equal(query);
                let ge = g.time_index_nearest_greater_or_equal(query);

                prop_assert!(le >= -1 && le < n as isize);
                prop_assert!(ge <= n);
                if let Some(first) = g.first_time() {
                    if query < first - 0.01 {
                        prop_assert_eq!(le, -1);
                    }
                }
                if let Some(last) = g.last_time() {
                    if query > last + 0.01 {
                        prop_assert_eq!(ge, n);
                    }
                }
            }

            #[test]
            fn test_union_contains_both_operands(a in times_strategy(), b in times_strategy()) {
                let ga = TimeDiscretizationFromArray::new(&a, 0.01).unwrap();
                let gb = TimeDiscretizationFromArray::new(&b, 0.01).unwrap();
                let u = ga.union(&gb);
                for &t in ga.as_slice().iter().chain(gb.as_slice()) {
                    prop_assert!(u.time_index(t) >= 0);
                }
            }
        }
    }
}
