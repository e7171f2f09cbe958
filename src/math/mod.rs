//! Numeric primitives shared across the crate.
//!
//! - [`vector`]: dot product, element-wise subtract, map/fold
//! - [`stats`]: mean, sample standard deviation, z-score normalization

pub mod stats;
pub mod vector;

pub use stats::{mean, stddev, zscore_normalize};
pub use vector::{dot, fold, map, square, subtract};
