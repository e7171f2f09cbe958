//! Batch gradient descent engine.
//!
//! Runs a fixed number of iterations; there is no convergence check and no
//! early stop. A learning rate large enough to diverge propagates `Inf`/`NaN`
//! through the cost history as ordinary floats (caller error, by contract
//! not detected here).

use crate::data::Dataset;
use crate::error::{Error, Result};
use crate::model::LinearModel;

use super::gradient::compute_gradient;
use super::logger::{TrainingLogger, Verbosity};
use super::objective::SquaredError;

// =============================================================================
// DescentParams
// =============================================================================

/// Hyperparameters for gradient descent.
#[derive(Debug, Clone)]
pub struct DescentParams {
    /// Step size (alpha) applied to each parameter update.
    pub learning_rate: f64,
    /// Exact number of iterations to run.
    pub n_iterations: usize,
    /// Verbosity level for training output.
    pub verbosity: Verbosity,
}

impl Default for DescentParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            n_iterations: 1000,
            verbosity: Verbosity::default(),
        }
    }
}

// =============================================================================
// TrainingRun
// =============================================================================

/// Parameter snapshot taken after one completed iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSnapshot {
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// Output of a gradient descent run.
///
/// Both histories have length exactly [`DescentParams::n_iterations`], one
/// entry per completed iteration, appended in order.
#[derive(Debug, Clone)]
pub struct TrainingRun {
    /// Final weight vector.
    pub weights: Vec<f64>,
    /// Final bias.
    pub bias: f64,
    /// Cost after each iteration's update.
    pub cost_history: Vec<f64>,
    /// Parameters after each iteration's update.
    pub param_history: Vec<ParamSnapshot>,
}

// =============================================================================
// GradientDescent
// =============================================================================

/// Fixed-iteration batch gradient descent trainer.
///
/// # Example
///
/// ```
/// use linreg::{Dataset, DescentParams, GradientDescent, LinearModel, Verbosity};
///
/// let data = Dataset::from_single(&[1.0, 2.0], &[300.0, 500.0]).unwrap();
/// let engine = GradientDescent::new(DescentParams {
///     learning_rate: 0.01,
///     n_iterations: 100,
///     verbosity: Verbosity::Silent,
/// });
/// let run = engine.run(&data, &LinearModel::zeros(1)).unwrap();
/// assert_eq!(run.cost_history.len(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct GradientDescent {
    params: DescentParams,
}

impl GradientDescent {
    /// Create an engine with the given hyperparameters.
    pub fn new(params: DescentParams) -> Self {
        Self { params }
    }

    /// Run gradient descent from `init`, returning the final parameters and
    /// the full per-iteration history.
    ///
    /// Each iteration computes the gradient at the current parameters, then
    /// applies `w := w - α·dj_dw`, `b := b - α·dj_db` as a simultaneous
    /// update, then records the post-update cost and parameters.
    ///
    /// # Errors
    ///
    /// [`Error::WeightWidthMismatch`] if `init` does not match the dataset's
    /// feature count.
    pub fn run(&self, data: &Dataset, init: &LinearModel) -> Result<TrainingRun> {
        if init.n_features() != data.n_features() {
            return Err(Error::WeightWidthMismatch {
                got: init.n_features(),
                expected: data.n_features(),
            });
        }

        let n_iterations = self.params.n_iterations;
        let objective = SquaredError;
        let logger = TrainingLogger::new(self.params.verbosity, n_iterations);
        logger.start_training(n_iterations, data.n_features());

        let mut model = init.clone();
        let mut cost_history = Vec::with_capacity(n_iterations);
        let mut param_history = Vec::with_capacity(n_iterations);

        for iteration in 0..n_iterations {
            let gradient = compute_gradient(&model, data)?;
            model.apply_step(&gradient.dj_dw, gradient.dj_db, self.params.learning_rate);

            let cost = objective.cost(&model, data)?;
            logger.log_iteration(iteration, cost);
            cost_history.push(cost);
            param_history.push(ParamSnapshot {
                weights: model.weights().to_vec(),
                bias: model.bias(),
            });
        }

        logger.finish_training(cost_history.last().copied().unwrap_or(0.0));
        Ok(TrainingRun {
            weights: model.weights().to_vec(),
            bias: model.bias(),
            cost_history,
            param_history,
        })
    }
}
