//! Cost function.

use crate::data::Dataset;
use crate::error::Result;
use crate::math::vector::{fold, square, subtract};
use crate::model::LinearModel;

/// Mean squared error cost, scaled by `1/(2m)`.
///
/// `cost = (1/2m) * Σ (dot(w, x_i) + b - y_i)²` over all `m` examples.
/// Non-negative for every input; zero exactly when the model fits every
/// example with no residual. The `1/2` factor keeps the gradient free of a
/// stray constant.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredError;

impl SquaredError {
    /// Compute the cost of `model` on `data`.
    ///
    /// # Errors
    ///
    /// [`Error::WeightWidthMismatch`](crate::Error::WeightWidthMismatch) if
    /// the model width differs from the dataset's feature count.
    pub fn cost(&self, model: &LinearModel, data: &Dataset) -> Result<f64> {
        let predictions = model.predict_dataset(data)?;
        let residuals = subtract(&predictions, data.targets())?;
        let sum_sq = fold(&residuals, 0.0, |acc, r| acc + square(r));
        let m = data.n_samples() as f64;
        Ok(sum_sq / (2.0 * m))
    }
}
