//! Dataset container.
//!
//! # Storage Layout
//!
//! Features are stored in **feature-major** layout: `[n_features, n_samples]`.
//! Each feature's values across all samples are contiguous in memory, which
//! is what the per-feature gradient accumulation iterates over.
//!
//! # Construction
//!
//! Use [`Dataset::from_rows`] for row-major example data (the natural input
//! shape), or [`Dataset::from_single`] for single-variable regression, which
//! is the width-1 special case of the same layout.
//!
//! All shape validation happens here, once, so the training loop can assume
//! a well-formed dataset.

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::math::stats::zscore_normalize;

/// Feature matrix plus target vector.
///
/// # Example
///
/// ```
/// use linreg::Dataset;
///
/// // 3 examples with 2 features each
/// let rows = vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]];
/// let ds = Dataset::from_rows(&rows, &[10.0, 20.0, 30.0]).unwrap();
///
/// assert_eq!(ds.n_samples(), 3);
/// assert_eq!(ds.n_features(), 2);
/// assert_eq!(ds.feature(0), &[1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature data: `[n_features, n_samples]` (feature-major).
    features: Array2<f64>,
    /// Target values: length = `n_samples`.
    targets: Vec<f64>,
}

impl Dataset {
    /// Create a dataset from row-major example data.
    ///
    /// # Arguments
    ///
    /// * `rows` - One inner vector per example; all rows must share a width
    /// * `targets` - One target value per example
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyDataset`] if `rows` is empty
    /// - [`Error::RaggedRows`] if any row's width differs from the first
    /// - [`Error::TargetLengthMismatch`] if `targets.len() != rows.len()`
    pub fn from_rows(rows: &[Vec<f64>], targets: &[f64]) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let n_samples = rows.len();
        let n_features = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_features {
                return Err(Error::RaggedRows {
                    row: i,
                    got: row.len(),
                    expected: n_features,
                });
            }
        }
        if targets.len() != n_samples {
            return Err(Error::TargetLengthMismatch {
                targets: targets.len(),
                examples: n_samples,
            });
        }

        // Transpose into feature-major storage.
        let features = Array2::from_shape_fn((n_features, n_samples), |(j, i)| rows[i][j]);
        Ok(Self {
            features,
            targets: targets.to_vec(),
        })
    }

    /// Create a single-variable dataset from a flat feature column.
    ///
    /// Equivalent to `from_rows` with width-1 rows.
    pub fn from_single(x: &[f64], targets: &[f64]) -> Result<Self> {
        if x.is_empty() {
            return Err(Error::EmptyDataset);
        }
        if targets.len() != x.len() {
            return Err(Error::TargetLengthMismatch {
                targets: targets.len(),
                examples: x.len(),
            });
        }
        let features = Array2::from_shape_vec((1, x.len()), x.to_vec())
            .expect("shape matches input length");
        Ok(Self {
            features,
            targets: targets.to_vec(),
        })
    }

    /// Number of examples.
    pub fn n_samples(&self) -> usize {
        self.features.ncols()
    }

    /// Number of feature columns (width of each example).
    pub fn n_features(&self) -> usize {
        self.features.nrows()
    }

    /// All values of feature `j` across samples, as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `j >= n_features()`.
    pub fn feature(&self, j: usize) -> &[f64] {
        self.features
            .row(j)
            .to_slice()
            .expect("feature rows are contiguous in feature-major storage")
    }

    /// Target values, one per example.
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// One example row, materialized in feature order.
    pub fn example(&self, i: usize) -> Vec<f64> {
        self.features.column(i).to_vec()
    }

    /// Z-score normalize every feature column, leaving targets untouched.
    ///
    /// # Errors
    ///
    /// [`Error::InsufficientSample`] with fewer than 2 examples, or
    /// [`Error::ZeroVariance`] if any feature column is constant.
    pub fn normalize_features(&self) -> Result<Self> {
        let mut features = Array2::zeros((self.n_features(), self.n_samples()));
        for j in 0..self.n_features() {
            let normalized = zscore_normalize(self.feature(j))?;
            for (i, value) in normalized.into_iter().enumerate() {
                features[[j, i]] = value;
            }
        }
        Ok(Self {
            features,
            targets: self.targets.clone(),
        })
    }
}
