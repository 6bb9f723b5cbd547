//! Linear Regression
//!
//! This example fits a line to a small dataset with batch gradient
//! descent and prints how the parameters move toward the least squares
//! optimum.

use queens_evo::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Gradient Descent Linear Regression ===\n");

    // Points scattered around y = 3x + 4
    let data = [
        (1.0, 7.1),
        (2.0, 9.9),
        (3.0, 13.05),
        (4.0, 16.0),
        (5.0, 18.9),
    ];

    let learning_rate = 0.02;
    let num_iterations = 5000;

    println!(
        "Fitting {} samples over {} iterations (learning rate {})...\n",
        data.len(),
        num_iterations,
        learning_rate
    );

    let history = fit(&data, 0.0, 0.0, learning_rate, num_iterations)?;

    // Show the parameter trajectory
    for &i in &[0, 1, 10, 100, 1000, num_iterations] {
        println!(
            "  step {:5}: theta_0 = {:.4}, theta_1 = {:.4}, mse = {:.6}",
            i,
            history.theta_0[i],
            history.theta_1[i],
            mean_squared_error(history.theta_0[i], history.theta_1[i], &data)
        );
    }

    let (theta_0, theta_1) = history
        .final_parameters()
        .ok_or("empty parameter history")?;
    println!("\nFitted line: y = {:.4} + {:.4} * x", theta_0, theta_1);

    Ok(())
}
