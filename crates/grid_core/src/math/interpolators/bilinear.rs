//! Bilinear 2D interpolation for tenor grids.

use crate::types::InterpolationError;
use num_traits::Float;

/// Bilinear interpolator for 2D grid data.
///
/// Stores a full rectangular grid of values z(x, y) and interpolates
/// linearly in each axis between the four surrounding nodes.
///
/// # Grid Layout
///
/// The grid is stored as `zs[i][j] = z(xs[i], ys[j])` where:
/// - `xs` defines the x-axis coordinates (rows)
/// - `ys` defines the y-axis coordinates (columns)
///
/// # Example
///
/// ```
/// use grid_core::math::interpolators::BilinearInterpolator;
///
/// let xs = [0.0, 1.0];
/// let ys = [0.0, 1.0];
/// let zs = [&[1.0, 2.0][..], &[3.0, 4.0][..]];
///
/// let interp = BilinearInterpolator::new(&xs, &ys, &zs).unwrap();
/// // Centre of the cell is the mean of the four corners
/// assert_eq!(interp.interpolate(0.5, 0.5).unwrap(), 2.5);
/// ```
#[derive(Debug, Clone)]
pub struct BilinearInterpolator<T: Float> {
    /// X-axis coordinates
    xs: Vec<T>,
    /// Y-axis coordinates
    ys: Vec<T>,
    /// Grid values: zs[i][j] = z(xs[i], ys[j])
    zs: Vec<Vec<T>>,
}

impl<T: Float> BilinearInterpolator<T> {
    /// Construct a bilinear interpolator from grid data.
    ///
    /// # Arguments
    ///
    /// * `xs` - Strictly increasing x-axis coordinates (length >= 2)
    /// * `ys` - Strictly increasing y-axis coordinates (length >= 2)
    /// * `zs` - Grid rows, one per x coordinate, each with one value per y coordinate
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InsufficientData` - Fewer than 2 points on an axis
    /// * `InterpolationError::InvalidInput` - Grid dimensions don't match axis lengths
    /// * `InterpolationError::NonMonotonicData` - An axis is not strictly increasing
    pub fn new(xs: &[T], ys: &[T], zs: &[&[T]]) -> Result<Self, InterpolationError> {
        Self::check_axis(xs)?;
        Self::check_axis(ys)?;

        if zs.len() != xs.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "Grid rows ({}) must match x-axis length ({})",
                zs.len(),
                xs.len()
            )));
        }

        for (i, row) in zs.iter().enumerate() {
            if row.len() != ys.len() {
                return Err(InterpolationError::InvalidInput(format!(
                    "Grid row {} length ({}) must match y-axis length ({})",
                    i,
                    row.len(),
                    ys.len()
                )));
            }
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            zs: zs.iter().map(|row| row.to_vec()).collect(),
        })
    }

    fn check_axis(axis: &[T]) -> Result<(), InterpolationError> {
        if axis.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: axis.len(),
                need: 2,
            });
        }
        for i in 1..axis.len() {
            if axis[i].partial_cmp(&axis[i - 1]) != Some(std::cmp::Ordering::Greater) {
                return Err(InterpolationError::NonMonotonicData { index: i });
            }
        }
        Ok(())
    }

    /// Interpolate value at point (x, y).
    ///
    /// # Formula
    ///
    /// ```text
    /// z = (1-u)(1-v)*z00 + u*(1-v)*z10 + (1-u)*v*z01 + u*v*z11
    /// ```
    ///
    /// where `u` and `v` are the normalised coordinates within the grid cell.
    ///
    /// # Errors
    ///
    /// `InterpolationError::OutOfBounds` if (x, y) is outside the grid.
    pub fn interpolate(&self, x: T, y: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain_x();
        let (y_min, y_max) = self.domain_y();

        if x < x_min || x > x_max {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        if y < y_min || y > y_max {
            return Err(InterpolationError::OutOfBounds {
                x: y.to_f64().unwrap_or(f64::NAN),
                min: y_min.to_f64().unwrap_or(f64::NAN),
                max: y_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(self.evaluate(x, y))
    }

    /// Interpolate with flat extrapolation: coordinates outside the grid are
    /// clamped to the nearest edge before evaluation.
    ///
    /// ```
    /// use grid_core::math::interpolators::BilinearInterpolator;
    ///
    /// let zs = [&[1.0, 2.0][..], &[3.0, 4.0][..]];
    /// let interp = BilinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0], &zs).unwrap();
    /// assert_eq!(interp.interpolate_clamped(5.0, -3.0), 3.0);
    /// ```
    pub fn interpolate_clamped(&self, x: T, y: T) -> T {
        let (x_min, x_max) = self.domain_x();
        let (y_min, y_max) = self.domain_y();
        self.evaluate(x.max(x_min).min(x_max), y.max(y_min).min(y_max))
    }

    fn evaluate(&self, x: T, y: T) -> T {
        let i = Self::find_index(&self.xs, x);
        let j = Self::find_index(&self.ys, y);

        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[j], self.ys[j + 1]);

        let z00 = self.zs[i][j];
        let z10 = self.zs[i + 1][j];
        let z01 = self.zs[i][j + 1];
        let z11 = self.zs[i + 1][j + 1];

        let u = (x - x0) / (x1 - x0);
        let v = (y - y0) / (y1 - y0);

        let one = T::one();
        (one - u) * (one - v) * z00 + u * (one - v) * z10 + (one - u) * v * z01 + u * v * z11
    }

    /// Return the valid interpolation domain for x.
    #[inline]
    pub fn domain_x(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Return the valid interpolation domain for y.
    #[inline]
    pub fn domain_y(&self) -> (T, T) {
        (self.ys[0], self.ys[self.ys.len() - 1])
    }

    /// Cell index along one axis, clamped to `[0, n-2]`.
    #[inline]
    fn find_index(axis: &[T], v: T) -> usize {
        let pos = axis.partition_point(|&a| a <= v);
        if pos == 0 {
            0
        } else if pos >= axis.len() {
            axis.len() - 2
        } else {
            pos - 1
        }
    }

    /// Returns a reference to the x-axis coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-axis coordinates.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns a reference to the grid values.
    #[inline]
    pub fn zs(&self) -> &[Vec<T>] {
        &self.zs
    }
}
