//! End-to-end training scenarios through the public API.

use approx::assert_abs_diff_eq;
use linreg::{
    compute_gradient, Dataset, DescentParams, Error, GradientDescent, LinearModel,
    LinearRegression, SquaredError, Verbosity,
};

fn silent_params(learning_rate: f64, n_iterations: usize) -> DescentParams {
    DescentParams {
        learning_rate,
        n_iterations,
        verbosity: Verbosity::Silent,
    }
}

#[test]
fn single_variable_reference_fit() {
    let _ = env_logger::builder().is_test(true).try_init();

    // Two-point housing example: converges toward y = 200x + 100.
    let data = Dataset::from_single(&[1.0, 2.0], &[300.0, 500.0]).unwrap();
    let mut model = LinearRegression::new(silent_params(0.01, 10_000));
    let run = model.fit(&data).unwrap();

    assert_abs_diff_eq!(run.weights[0], 199.99285075131766, epsilon = 1e-9);
    assert_abs_diff_eq!(run.bias, 100.011567727362, epsilon = 1e-9);
    assert_eq!(run.cost_history.len(), 10_000);
    assert_eq!(run.param_history.len(), 10_000);

    // Model state matches the run output.
    let (weights, bias) = model.parameters().unwrap();
    assert_eq!(weights, run.weights.as_slice());
    assert_eq!(bias, run.bias);

    // Prediction for 1.2 (in thousands) lands near the fitted line.
    let prediction = model.predict_scalar(1.2).unwrap();
    assert_abs_diff_eq!(prediction, run.weights[0] * 1.2 + run.bias);
}

#[test]
fn multi_variable_fit_on_normalized_features() {
    let rows = vec![
        vec![2104.0, 5.0, 1.0, 45.0],
        vec![1416.0, 3.0, 2.0, 40.0],
        vec![852.0, 2.0, 1.0, 35.0],
    ];
    let targets = [460.0, 232.0, 178.0];
    let data = Dataset::from_rows(&rows, &targets)
        .unwrap()
        .normalize_features()
        .unwrap();

    let mut model = LinearRegression::new(silent_params(0.1, 2000));
    let run = model.fit(&data).unwrap();
    assert_eq!(run.weights.len(), 4);

    // On normalized features this small system is fit almost exactly.
    let final_cost = *run.cost_history.last().unwrap();
    assert!(final_cost < 1e-6, "final cost was {final_cost}");
    for (i, &target) in targets.iter().enumerate() {
        let prediction = model.predict(&data.example(i)).unwrap();
        assert_abs_diff_eq!(prediction, target, epsilon = 1e-2);
    }
}

#[test]
fn engine_accepts_nonzero_initial_parameters() {
    let data = Dataset::from_single(&[1.0, 2.0], &[300.0, 500.0]).unwrap();
    let engine = GradientDescent::new(silent_params(0.01, 1000));
    let warm = LinearModel::new(vec![190.0], 100.0);
    let run = engine.run(&data, &warm).unwrap();
    // Warm start begins close to the optimum and stays closer than cold start.
    let cold = engine.run(&data, &LinearModel::zeros(1)).unwrap();
    assert!(run.cost_history[0] < cold.cost_history[0]);
}

#[test]
fn cost_and_gradient_agree_with_hand_computed_values() {
    let data = Dataset::from_single(&[1.0, 2.0], &[300.0, 500.0]).unwrap();

    let grad = compute_gradient(&LinearModel::zeros(1), &data).unwrap();
    assert_abs_diff_eq!(grad.dj_dw[0], -650.0);
    assert_abs_diff_eq!(grad.dj_db, -400.0);

    let model = LinearModel::new(vec![190.0], 100.0);
    assert_abs_diff_eq!(SquaredError.cost(&model, &data).unwrap(), 125.0);
}

#[test]
fn training_on_noiseless_synthetic_data_recovers_the_generator() {
    let (data, true_weights, true_bias) =
        linreg::testing::synthetic_linear_dataset(200, 3, 42, 0.0).unwrap();

    let mut model = LinearRegression::new(silent_params(0.3, 5000));
    let run = model.fit(&data).unwrap();

    for (fitted, truth) in run.weights.iter().zip(&true_weights) {
        assert_abs_diff_eq!(*fitted, *truth, epsilon = 1e-6);
    }
    assert_abs_diff_eq!(run.bias, true_bias, epsilon = 1e-6);

    // The gradient at the recovered parameters is effectively zero.
    let grad = compute_gradient(model.model().unwrap(), &data).unwrap();
    assert!(grad.dj_db.abs() < 1e-6);
    assert!(grad.dj_dw.iter().all(|g| g.abs() < 1e-6));
}

#[test]
fn shape_errors_surface_through_the_public_api() {
    assert!(matches!(
        Dataset::from_single(&[1.0, 2.0], &[1.0]).unwrap_err(),
        Error::TargetLengthMismatch { .. }
    ));

    let data = Dataset::from_single(&[1.0, 2.0], &[300.0, 500.0]).unwrap();
    let mut model = LinearRegression::new(silent_params(0.01, 10));
    model.fit(&data).unwrap();
    assert!(matches!(
        model.predict(&[1.0, 2.0]).unwrap_err(),
        Error::WeightWidthMismatch { .. }
    ));
}
