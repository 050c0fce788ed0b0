//! Common interface for one-dimensional interpolators.

use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolation over a fixed set of knots.
///
/// Implementors decide how queries outside [`domain`](Interpolator::domain)
/// are treated: either rejected with [`InterpolationError::OutOfBounds`] or
/// extrapolated.
pub trait Interpolator<T: Float> {
    /// Evaluate the interpolant at `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the knot range `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}
