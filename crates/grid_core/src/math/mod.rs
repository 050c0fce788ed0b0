//! Numerical building blocks.
//!
//! - [`interpolators`]: linear slice and bilinear surface interpolation

pub mod interpolators;
