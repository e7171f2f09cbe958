//! Crate-wide error type.
//!
//! All validation failures are immediate and local to the call that caused
//! them. There is no retry or recovery path; errors propagate to the caller.
//! Numerical divergence (a too-large learning rate producing `Inf`/`NaN`) is
//! not an error and flows through training history as ordinary floats.

/// The result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two vectors passed to an element-wise operation differ in length.
    #[error("vectors have unequal lengths: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A feature row's width differs from the first row's width.
    #[error("feature row {row} has width {got}, expected {expected}")]
    RaggedRows {
        row: usize,
        got: usize,
        expected: usize,
    },

    /// Target count does not match the number of examples.
    #[error("got {targets} targets for {examples} examples")]
    TargetLengthMismatch { targets: usize, examples: usize },

    /// A dataset must contain at least one example.
    #[error("dataset must contain at least one example")]
    EmptyDataset,

    /// The mean of an empty sequence is undefined.
    #[error("mean requires at least one value")]
    EmptySample,

    /// Sample standard deviation divides by `n - 1`.
    #[error("sample standard deviation requires at least 2 values, got {0}")]
    InsufficientSample(usize),

    /// Z-score normalization of a constant sequence would divide by zero.
    #[error("cannot z-score normalize a zero-variance sequence")]
    ZeroVariance,

    /// Weight vector width does not match the feature count.
    #[error("weight vector has width {got}, expected {expected} features")]
    WeightWidthMismatch { got: usize, expected: usize },

    /// `predict` or `parameters` was called before `fit`.
    #[error("model has not been fitted")]
    ModelNotFitted,
}
