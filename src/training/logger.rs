//! Training progress logging.
//!
//! Emits through the `log` facade so downstream applications choose the
//! backend (tests typically run with [`Verbosity::Silent`]).

/// How much training output to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output.
    Silent,
    /// Periodic cost summaries.
    #[default]
    Info,
    /// Cost at every iteration.
    Debug,
}

/// Logger for the gradient descent loop.
#[derive(Debug, Clone)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    /// Iteration stride for `Info`-level cost lines.
    interval: usize,
}

impl TrainingLogger {
    /// Create a logger for a run of `n_iterations`.
    ///
    /// At `Info`, cost is reported roughly ten times over the run.
    pub fn new(verbosity: Verbosity, n_iterations: usize) -> Self {
        let interval = (n_iterations / 10).max(1);
        Self {
            verbosity,
            interval,
        }
    }

    /// Log the start of a training run.
    pub fn start_training(&self, n_iterations: usize, n_features: usize) {
        if self.verbosity >= Verbosity::Info {
            log::info!("starting gradient descent: {n_iterations} iterations, {n_features} feature(s)");
        }
    }

    /// Log the cost recorded at one iteration.
    pub fn log_iteration(&self, iteration: usize, cost: f64) {
        match self.verbosity {
            Verbosity::Debug => log::debug!("iteration {iteration}: cost {cost:.6e}"),
            Verbosity::Info if iteration % self.interval == 0 => {
                log::info!("iteration {iteration}: cost {cost:.6e}");
            }
            _ => {}
        }
    }

    /// Log the final cost after the fixed iteration count completes.
    pub fn finish_training(&self, final_cost: f64) {
        if self.verbosity >= Verbosity::Info {
            log::info!("gradient descent finished: final cost {final_cost:.6e}");
        }
    }
}
