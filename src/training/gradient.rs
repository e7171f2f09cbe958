//! Gradient of the squared error cost.

use crate::data::Dataset;
use crate::error::Result;
use crate::math::vector::{dot, fold, subtract};
use crate::model::LinearModel;

/// Partial derivatives of the cost with respect to the model parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    /// `dj_dw[j] = (1/m) * Σ (f_i - y_i) * x_i[j]`, one entry per feature.
    pub dj_dw: Vec<f64>,
    /// `dj_db = (1/m) * Σ (f_i - y_i)`.
    pub dj_db: f64,
}

/// Compute the batch gradient of `model` on `data`.
///
/// Every example is visited exactly once per call: predictions and residuals
/// are computed in one pass, then each weight's partial is a dot product of
/// the residuals with that feature's contiguous column.
pub fn compute_gradient(model: &LinearModel, data: &Dataset) -> Result<Gradient> {
    let predictions = model.predict_dataset(data)?;
    let residuals = subtract(&predictions, data.targets())?;
    let m = data.n_samples() as f64;

    let mut dj_dw = Vec::with_capacity(data.n_features());
    for j in 0..data.n_features() {
        dj_dw.push(dot(&residuals, data.feature(j))? / m);
    }
    let dj_db = fold(&residuals, 0.0, |acc, r| acc + r) / m;

    Ok(Gradient { dj_dw, dj_db })
}
