//! Interpolation methods for tenor grids.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation, optionally extrapolating
//! - [`BilinearInterpolator`]: 2D interpolation on a full rectangular grid
//!
//! ## Core Trait
//!
//! 1D interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: Return the knot range
//!
//! All interpolators are generic over `T: num_traits::Float`.
//!
//! ## Example
//!
//! ```
//! use grid_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let interp = LinearInterpolator::new(&[0.0_f64, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();
//! assert_eq!(interp.domain(), (0.0, 3.0));
//! assert!((interp.interpolate(1.5).unwrap() - 2.5).abs() < 1e-10);
//! ```

mod bilinear;
mod linear;
mod traits;

pub use bilinear::BilinearInterpolator;
pub use linear::LinearInterpolator;
pub use traits::Interpolator;
