//! linreg: batch gradient descent linear regression.
//!
//! Fits a linear model (one weight per feature plus a bias) to a dataset by
//! minimizing mean squared error with fixed-iteration batch gradient
//! descent. Single-variable regression is the width-1 special case of the
//! multi-variable path; there is one canonical implementation of the cost,
//! gradient, and descent loop.
//!
//! # Key Types
//!
//! - [`LinearRegression`] - High-level model with fit/predict
//! - [`LinearModel`] - Parameter representation (weights + bias)
//! - [`GradientDescent`] / [`DescentParams`] - The optimization engine
//! - [`TrainingRun`] - Final parameters plus per-iteration history
//! - [`Dataset`] - Feature matrix and targets with shape validation
//!
//! # Training
//!
//! ```
//! use linreg::{Dataset, DescentParams, LinearRegression, Verbosity};
//!
//! let data = Dataset::from_single(&[1.0, 2.0], &[300.0, 500.0]).unwrap();
//! let mut model = LinearRegression::new(DescentParams {
//!     learning_rate: 0.01,
//!     n_iterations: 10_000,
//!     verbosity: Verbosity::Silent,
//! });
//! model.fit(&data).unwrap();
//!
//! let (weights, bias) = model.parameters().unwrap();
//! assert!((weights[0] - 200.0).abs() < 0.1);
//! assert!((bias - 100.0).abs() < 0.1);
//! ```
//!
//! # Feature Normalization
//!
//! Z-score normalization is available standalone via
//! [`math::stats::zscore_normalize`] or per feature column via
//! [`Dataset::normalize_features`].

// Re-export approx traits for users who want to compare fitted parameters
pub use approx;

pub mod data;
pub mod error;
pub mod math;
pub mod model;
pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use data::Dataset;
pub use error::{Error, Result};
pub use model::{LinearModel, LinearRegression};
pub use training::{
    compute_gradient, DescentParams, Gradient, GradientDescent, ParamSnapshot, SquaredError,
    TrainingRun, Verbosity,
};
