//! End-to-end tests for queens-evo
//!
//! Drives the solver and the regression trainer through the public API.

use queens_evo::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn full_run_with_default_configuration() {
    let mut rng = StdRng::seed_from_u64(42);
    let ga = EightQueensGa::new(GaConfig::default()).unwrap();

    let result = ga.run(&mut rng).unwrap();

    assert_eq!(result.generations, 1000);
    assert_eq!(result.stats.num_generations(), 1000);
    assert_eq!(result.best_attacks, attacking_pairs(&result.best_board));
    assert_eq!(result.is_solved(), is_solution(&result.best_board));

    // Tournaments of 32 over 64 individuals put heavy pressure on the
    // best board, so 1000 generations end at or very near a solution
    assert!(
        result.best_attacks <= 2,
        "Expected at most 2 attacking pairs, got {}",
        result.best_attacks
    );
}

#[test]
fn stats_histories_are_consistent() {
    let mut rng = StdRng::seed_from_u64(7);
    let ga = EightQueensGa::builder()
        .generations(100)
        .population_size(32)
        .elitism_count(8)
        .tournament_size(4)
        .build()
        .unwrap();

    let result = ga.run(&mut rng).unwrap();

    let best = result.stats.best_history();
    let mean = result.stats.mean_history();
    let worst = result.stats.worst_history();
    assert_eq!(best.len(), 100);
    assert_eq!(mean.len(), 100);
    assert_eq!(worst.len(), 100);

    for i in 0..100 {
        assert!(best[i] <= worst[i]);
        assert!(mean[i] >= best[i] as f64);
        assert!(mean[i] <= worst[i] as f64);
    }

    // Elitism makes the best history non-increasing, and the reported
    // best comes from the final generation
    assert!(best.windows(2).all(|pair| pair[1] <= pair[0]));
    assert_eq!(*best.last().unwrap(), result.best_attacks);
}

#[test]
fn run_result_round_trips_through_json() {
    let mut rng = StdRng::seed_from_u64(3);
    let ga = EightQueensGa::builder()
        .generations(10)
        .population_size(8)
        .elitism_count(2)
        .tournament_size(2)
        .build()
        .unwrap();

    let result = ga.run(&mut rng).unwrap();

    let serialized = serde_json::to_string(&result).unwrap();
    let deserialized: RunResult = serde_json::from_str(&serialized).unwrap();

    assert_eq!(deserialized.best_board, result.best_board);
    assert_eq!(deserialized.best_attacks, result.best_attacks);
    assert_eq!(deserialized.stats.num_generations(), 10);
}

#[test]
fn regression_recovers_a_noisy_line() {
    // Points scattered around y = 3x + 4
    let data = [
        (1.0, 7.1),
        (2.0, 9.9),
        (3.0, 13.05),
        (4.0, 16.0),
        (5.0, 18.9),
    ];

    let history = fit(&data, 0.0, 0.0, 0.02, 10_000).unwrap();
    let (theta_0, theta_1) = history.final_parameters().unwrap();

    // Least squares optimum for this dataset is (4.08, 2.97)
    assert!((theta_0 - 4.08).abs() < 1e-3);
    assert!((theta_1 - 2.97).abs() < 1e-3);

    let initial_error = mean_squared_error(0.0, 0.0, &data);
    let final_error = mean_squared_error(theta_0, theta_1, &data);
    assert!(final_error < initial_error);
}
