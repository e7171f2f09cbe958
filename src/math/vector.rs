//! Vector primitives.
//!
//! Slice-based building blocks for the cost and gradient computations.
//! Element-wise operations over two vectors require equal lengths and fail
//! with [`Error::LengthMismatch`] otherwise; nothing is silently truncated
//! or padded.

use crate::error::{Error, Result};

/// Dot product: `Σ a[i] * b[i]`.
///
/// Commutative in its arguments. Defined as `0.0` for two empty slices
/// (contract edge case, not exercised by training: a dataset always has at
/// least one example).
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Element-wise difference: `a[i] - b[i]`.
pub fn subtract(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

/// Apply `f` to every element, preserving order and length.
pub fn map<T, U, F>(v: &[T], f: F) -> Vec<U>
where
    T: Copy,
    F: FnMut(T) -> U,
{
    v.iter().copied().map(f).collect()
}

/// Left fold over `v` starting from `init`.
pub fn fold<T, M, F>(v: &[T], init: M, f: F) -> M
where
    T: Copy,
    F: FnMut(M, T) -> M,
{
    v.iter().copied().fold(init, f)
}

/// Elementwise square, generic over any numeric type.
#[inline]
pub fn square<T>(x: T) -> T
where
    T: Copy + std::ops::Mul<Output = T>,
{
    x * x
}

fn check_lengths<T>(a: &[T], b: &[T]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
