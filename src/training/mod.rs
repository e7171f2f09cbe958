//! Training infrastructure.
//!
//! - [`SquaredError`]: the mean squared error cost, scaled by `1/(2m)`
//! - [`compute_gradient`], [`Gradient`]: batch gradient of the cost
//! - [`GradientDescent`], [`DescentParams`]: fixed-iteration descent engine
//! - [`TrainingRun`], [`ParamSnapshot`]: final parameters plus history
//! - [`TrainingLogger`], [`Verbosity`]: progress logging

mod descent;
mod gradient;
mod logger;
mod objective;

pub use descent::{DescentParams, GradientDescent, ParamSnapshot, TrainingRun};
pub use gradient::{compute_gradient, Gradient};
pub use logger::{TrainingLogger, Verbosity};
pub use objective::SquaredError;
