//! Piecewise linear interpolation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// Stores strictly increasing knots with their values and interpolates
/// linearly between neighbours. By default queries outside the knot range
/// are rejected; [`with_extrapolation`](LinearInterpolator::with_extrapolation)
/// extends the first and last segment linearly instead.
///
/// This is the slice interpolant used by
/// [`DataTableLinear`](crate::market_data::tables::DataTableLinear) when a
/// table has a single maturity or a single termination.
///
/// # Example
///
/// ```
/// use grid_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 2.0, 3.0])
///     .unwrap()
///     .with_extrapolation();
///
/// assert_eq!(interp.interpolate(0.5).unwrap(), 1.0);
/// // Beyond the last knot the (1, 2) -> (2, 3) segment is extended
/// assert_eq!(interp.interpolate(4.0).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Sorted, strictly increasing knots
    xs: Vec<T>,
    /// Values in knot order
    ys: Vec<T>,
    /// Extend the outer segments beyond the knot range
    allow_extrapolation: bool,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from knots and values.
    ///
    /// Knots are sorted together with their values, so callers may pass them
    /// in any order. Two knots with the same coordinate are rejected because
    /// the interpolant would be ambiguous there.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - Mismatched slice lengths
    /// * `InterpolationError::InsufficientData` - Fewer than 2 knots
    /// * `InterpolationError::NonMonotonicData` - Duplicate or NaN knots
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let (sorted_xs, sorted_ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        // Strict monotonicity; NaN knots have no ordering and fail here too
        for i in 1..sorted_xs.len() {
            if sorted_xs[i].partial_cmp(&sorted_xs[i - 1]) != Some(std::cmp::Ordering::Greater) {
                return Err(InterpolationError::NonMonotonicData { index: i });
            }
        }

        Ok(Self {
            xs: sorted_xs,
            ys: sorted_ys,
            allow_extrapolation: false,
        })
    }

    /// Enables linear extrapolation beyond the knot range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Returns whether queries outside the knot range are extrapolated.
    #[inline]
    pub fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    /// Returns a reference to the sorted knots.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the values (in knot order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if there are no knots. Never true for a constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Index `i` of the segment `[xs[i], xs[i+1]]` used for `x`, clamped to `[0, n-2]`.
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Interpolate at `x`: `y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)`.
    ///
    /// With extrapolation enabled the same formula is applied to the first or
    /// last segment for points outside the knot range.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain();

        if !self.allow_extrapolation && (x < x_min || x > x_max) {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let i = self.find_segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + (y1 - y0) * t)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
