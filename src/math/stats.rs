//! Summary statistics and z-score normalization.
//!
//! Sample standard deviation uses Bessel's correction (divisor `n - 1`).
//! Undersized samples and zero-variance input are explicit errors rather
//! than silent NaN/Inf.

use crate::error::{Error, Result};
use crate::math::vector::{fold, map, square};

/// Arithmetic mean of `v`.
pub fn mean(v: &[f64]) -> Result<f64> {
    if v.is_empty() {
        return Err(Error::EmptySample);
    }
    let sum = fold(v, 0.0, |acc, x| acc + x);
    Ok(sum / v.len() as f64)
}

/// Sample standard deviation of `v` around a precomputed `mean`.
///
/// Computed as `sqrt(Σ (x_i - mean)² / (n - 1))`. Requires `n >= 2`.
pub fn stddev(v: &[f64], mean: f64) -> Result<f64> {
    if v.len() < 2 {
        return Err(Error::InsufficientSample(v.len()));
    }
    let sum_sq = fold(v, 0.0, |acc, x| acc + square(x - mean));
    Ok((sum_sq / (v.len() - 1) as f64).sqrt())
}

/// Z-score normalization: `(x_i - mean) / stddev` for each element.
///
/// Output has the same length as the input, with mean ~0 and sample
/// standard deviation ~1. Fails on constant input ([`Error::ZeroVariance`]).
pub fn zscore_normalize(v: &[f64]) -> Result<Vec<f64>> {
    let m = mean(v)?;
    let sd = stddev(v, m)?;
    if sd == 0.0 {
        return Err(Error::ZeroVariance);
    }
    Ok(map(v, |x| (x - m) / sd))
}
