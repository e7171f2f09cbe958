//! Linear model parameters and the high-level regression wrapper.

use crate::data::Dataset;
use crate::error::{Error, Result};
use crate::math::vector::dot;
use crate::training::{DescentParams, GradientDescent, TrainingRun};

// =============================================================================
// LinearModel
// =============================================================================

/// Linear model parameters: one weight per feature plus a scalar bias.
///
/// Prediction is `dot(weights, x) + bias`. Single-variable regression is the
/// width-1 case of the same layout; [`predict_scalar`](Self::predict_scalar)
/// is a convenience over it.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    /// One coefficient per feature column.
    weights: Vec<f64>,
    /// Intercept term.
    bias: f64,
}

impl LinearModel {
    /// Create a model from explicit parameters.
    pub fn new(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Create a model with all parameters zero, the conventional starting
    /// point for gradient descent.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            weights: vec![0.0; n_features],
            bias: 0.0,
        }
    }

    /// Number of input features.
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Weight vector, one entry per feature.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Intercept term.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Predict for a single example row.
    ///
    /// # Errors
    ///
    /// [`Error::WeightWidthMismatch`] if `x.len() != n_features()`.
    pub fn predict_row(&self, x: &[f64]) -> Result<f64> {
        if x.len() != self.weights.len() {
            return Err(Error::WeightWidthMismatch {
                got: self.weights.len(),
                expected: x.len(),
            });
        }
        Ok(dot(&self.weights, x)? + self.bias)
    }

    /// Predict for a single scalar input (width-1 models).
    pub fn predict_scalar(&self, x: f64) -> Result<f64> {
        self.predict_row(&[x])
    }

    /// Predict for every example in a dataset.
    ///
    /// Accumulates per feature column so each contiguous feature slice is
    /// walked once, then adds the bias up front.
    pub fn predict_dataset(&self, data: &Dataset) -> Result<Vec<f64>> {
        if data.n_features() != self.weights.len() {
            return Err(Error::WeightWidthMismatch {
                got: self.weights.len(),
                expected: data.n_features(),
            });
        }
        let mut predictions = vec![self.bias; data.n_samples()];
        for (j, &w) in self.weights.iter().enumerate() {
            for (p, &x) in predictions.iter_mut().zip(data.feature(j)) {
                *p += w * x;
            }
        }
        Ok(predictions)
    }

    /// Take one gradient descent step: `w := w - α·dj_dw`, `b := b - α·dj_db`.
    ///
    /// The gradient must already be computed from the current parameters
    /// (simultaneous update; the caller never interleaves gradient
    /// computation with this mutation).
    pub(crate) fn apply_step(&mut self, dj_dw: &[f64], dj_db: f64, learning_rate: f64) {
        for (w, g) in self.weights.iter_mut().zip(dj_dw) {
            *w -= learning_rate * g;
        }
        self.bias -= learning_rate * dj_db;
    }
}

// =============================================================================
// LinearRegression
// =============================================================================

/// High-level linear regression model.
///
/// Combines fixed training hyperparameters with the fitted parameters.
/// Single-threaded value type: each training call owns its working state and
/// copies the final parameters into the model.
///
/// # Example
///
/// ```
/// use linreg::{Dataset, DescentParams, LinearRegression, Verbosity};
///
/// let data = Dataset::from_single(&[1.0, 2.0], &[300.0, 500.0]).unwrap();
/// let mut model = LinearRegression::new(DescentParams {
///     learning_rate: 0.01,
///     n_iterations: 10_000,
///     verbosity: Verbosity::Silent,
/// });
/// let run = model.fit(&data).unwrap();
///
/// assert_eq!(run.cost_history.len(), 10_000);
/// let prediction = model.predict_scalar(1.5).unwrap();
/// assert!((prediction - 400.0).abs() < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct LinearRegression {
    params: DescentParams,
    fitted: Option<LinearModel>,
}

impl LinearRegression {
    /// Create an unfitted model with the given hyperparameters.
    pub fn new(params: DescentParams) -> Self {
        Self {
            params,
            fitted: None,
        }
    }

    /// Fit the model to a dataset.
    ///
    /// Runs gradient descent from zero initial parameters, stores the final
    /// parameters as the model's state, and returns the engine's full output
    /// (final parameters plus per-iteration history).
    pub fn fit(&mut self, data: &Dataset) -> Result<TrainingRun> {
        let engine = GradientDescent::new(self.params.clone());
        let init = LinearModel::zeros(data.n_features());
        let run = engine.run(data, &init)?;
        self.fitted = Some(LinearModel::new(run.weights.clone(), run.bias));
        Ok(run)
    }

    /// Predict for a single example row.
    ///
    /// # Errors
    ///
    /// [`Error::ModelNotFitted`] before `fit`, or
    /// [`Error::WeightWidthMismatch`] if `x` has the wrong width.
    pub fn predict(&self, x: &[f64]) -> Result<f64> {
        self.model()?.predict_row(x)
    }

    /// Predict for a single scalar input (single-variable models).
    pub fn predict_scalar(&self, x: f64) -> Result<f64> {
        self.model()?.predict_scalar(x)
    }

    /// Current `(weights, bias)` without mutation.
    pub fn parameters(&self) -> Result<(&[f64], f64)> {
        let model = self.model()?;
        Ok((model.weights(), model.bias()))
    }

    /// The fitted parameter set.
    pub fn model(&self) -> Result<&LinearModel> {
        self.fitted.as_ref().ok_or(Error::ModelNotFitted)
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new(DescentParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::Verbosity;
    use approx::assert_abs_diff_eq;

    fn silent_params(n_iterations: usize) -> DescentParams {
        DescentParams {
            learning_rate: 0.01,
            n_iterations,
            verbosity: Verbosity::Silent,
        }
    }

    #[test]
    fn predict_row_is_dot_plus_bias() {
        let model = LinearModel::new(vec![2.0, -1.0], 0.5);
        let y = model.predict_row(&[3.0, 4.0]).unwrap();
        assert_abs_diff_eq!(y, 2.5);
    }

    #[test]
    fn predict_row_rejects_width_mismatch() {
        let model = LinearModel::new(vec![1.0, 2.0], 0.0);
        assert_eq!(
            model.predict_row(&[1.0]).unwrap_err(),
            Error::WeightWidthMismatch { got: 2, expected: 1 }
        );
    }

    #[test]
    fn predict_dataset_matches_per_row_prediction() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let data = Dataset::from_rows(&rows, &[0.0; 3]).unwrap();
        let model = LinearModel::new(vec![0.5, -0.25], 1.0);
        let batch = model.predict_dataset(&data).unwrap();
        for (i, row) in rows.iter().enumerate() {
            assert_abs_diff_eq!(batch[i], model.predict_row(row).unwrap());
        }
    }

    #[test]
    fn apply_step_moves_against_gradient() {
        let mut model = LinearModel::new(vec![1.0], 2.0);
        model.apply_step(&[10.0], -4.0, 0.1);
        assert_abs_diff_eq!(model.weights()[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(model.bias(), 2.4, epsilon = 1e-12);
    }

    #[test]
    fn predict_before_fit_fails() {
        let model = LinearRegression::new(silent_params(10));
        assert_eq!(model.predict(&[1.0]).unwrap_err(), Error::ModelNotFitted);
        assert_eq!(model.parameters().unwrap_err(), Error::ModelNotFitted);
    }

    #[test]
    fn fit_stores_the_engine_result() {
        let data = Dataset::from_single(&[1.0, 2.0], &[300.0, 500.0]).unwrap();
        let mut model = LinearRegression::new(silent_params(100));
        let run = model.fit(&data).unwrap();
        let (weights, bias) = model.parameters().unwrap();
        assert_eq!(weights, run.weights.as_slice());
        assert_eq!(bias, run.bias);
    }

    #[test]
    fn predict_is_idempotent() {
        let data = Dataset::from_single(&[1.0, 2.0], &[300.0, 500.0]).unwrap();
        let mut model = LinearRegression::new(silent_params(500));
        model.fit(&data).unwrap();
        let first = model.predict_scalar(1.25).unwrap();
        let second = model.predict_scalar(1.25).unwrap();
        assert_eq!(first, second);
    }
}
