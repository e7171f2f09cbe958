//! Model types.
//!
//! - [`LinearModel`]: the parameter representation (weights + bias)
//! - [`LinearRegression`]: high-level train/predict wrapper

mod linear;

pub use linear::{LinearModel, LinearRegression};
