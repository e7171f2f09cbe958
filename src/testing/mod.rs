//! Deterministic synthetic datasets for tests.

use rand::prelude::*;

use crate::data::Dataset;
use crate::error::Result;

/// Generate a regression dataset as a linear model of random features plus
/// uniform noise.
///
/// Features are uniform in `[-1, 1]`; true weights are uniform in `[-1, 1]`
/// and the true bias in `[-0.25, 0.25]`. With `noise_amplitude == 0.0` the
/// targets lie exactly on the generating hyperplane, so the cost minimum is
/// zero and the gradient vanishes there.
///
/// Returns `(dataset, true_weights, true_bias)`.
pub fn synthetic_linear_dataset(
    n_samples: usize,
    n_features: usize,
    seed: u64,
    noise_amplitude: f64,
) -> Result<(Dataset, Vec<f64>, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);

    let weights: Vec<f64> = (0..n_features)
        .map(|_| rng.random::<f64>() * 2.0 - 1.0)
        .collect();
    let bias = rng.random::<f64>() * 0.5 - 0.25;

    let rows: Vec<Vec<f64>> = (0..n_samples)
        .map(|_| {
            (0..n_features)
                .map(|_| rng.random::<f64>() * 2.0 - 1.0)
                .collect()
        })
        .collect();

    let targets: Vec<f64> = rows
        .iter()
        .map(|row| {
            let mut y = bias;
            for (x, w) in row.iter().zip(&weights) {
                y += x * w;
            }
            if noise_amplitude > 0.0 {
                y += (rng.random::<f64>() * 2.0 - 1.0) * noise_amplitude;
            }
            y
        })
        .collect();

    let dataset = Dataset::from_rows(&rows, &targets)?;
    Ok((dataset, weights, bias))
}
