//! Linear regression
//!
//! This module implements univariate linear regression trained by
//! batch gradient descent.

use serde::{Deserialize, Serialize};

use crate::error::TrainingError;

/// Parameter history of a gradient descent fit
///
/// The first entry of each vector holds the initial parameters, so a
/// fit over `n` iterations records `n + 1` entries.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FitHistory {
    /// Intercept after each step
    pub theta_0: Vec<f64>,
    /// Slope after each step
    pub theta_1: Vec<f64>,
}

impl FitHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter pair
    pub fn record(&mut self, theta_0: f64, theta_1: f64) {
        self.theta_0.push(theta_0);
        self.theta_1.push(theta_1);
    }

    /// Get the number of recorded parameter pairs
    pub fn len(&self) -> usize {
        self.theta_0.len()
    }

    /// Check whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.theta_0.is_empty()
    }

    /// Get the last recorded parameter pair
    pub fn final_parameters(&self) -> Option<(f64, f64)> {
        Some((*self.theta_0.last()?, *self.theta_1.last()?))
    }
}

/// Compute the mean squared error of a line over a dataset
///
/// The dataset holds `(x, y)` samples and the line is
/// `y = theta_0 + theta_1 * x`.
pub fn mean_squared_error(theta_0: f64, theta_1: f64, data: &[(f64, f64)]) -> f64 {
    assert!(!data.is_empty(), "Dataset must not be empty");

    let n = data.len() as f64;
    let sum: f64 = data
        .iter()
        .map(|&(x, y)| {
            let residual = y - theta_0 - theta_1 * x;
            residual * residual
        })
        .sum();

    sum / n
}

/// Perform one batch gradient descent step on the mean squared error
///
/// Returns the updated `(theta_0, theta_1)` pair.
pub fn gradient_step(
    theta_0: f64,
    theta_1: f64,
    data: &[(f64, f64)],
    learning_rate: f64,
) -> (f64, f64) {
    assert!(!data.is_empty(), "Dataset must not be empty");

    let n = data.len() as f64;
    let mut gradient_0 = 0.0;
    let mut gradient_1 = 0.0;
    for &(x, y) in data {
        let residual = y - theta_0 - theta_1 * x;
        gradient_0 += residual;
        gradient_1 += residual * x;
    }
    gradient_0 *= -2.0 / n;
    gradient_1 *= -2.0 / n;

    (
        theta_0 - learning_rate * gradient_0,
        theta_1 - learning_rate * gradient_1,
    )
}

/// Fit a line to a dataset by batch gradient descent
///
/// Starts from the given parameters and applies `num_iterations`
/// gradient steps, recording the parameters before and after every
/// step.
pub fn fit(
    data: &[(f64, f64)],
    initial_theta_0: f64,
    initial_theta_1: f64,
    learning_rate: f64,
    num_iterations: usize,
) -> Result<FitHistory, TrainingError> {
    if data.is_empty() {
        return Err(TrainingError::EmptyDataset);
    }

    let mut theta_0 = initial_theta_0;
    let mut theta_1 = initial_theta_1;
    let mut history = FitHistory::new();
    history.record(theta_0, theta_1);

    for _ in 0..num_iterations {
        let (next_0, next_1) = gradient_step(theta_0, theta_1, data, learning_rate);
        theta_0 = next_0;
        theta_1 = next_1;
        history.record(theta_0, theta_1);
    }

    Ok(history)
}
