//! Eight Queens Puzzle
//!
//! This example evolves a placement of eight queens in which no two
//! queens attack each other. Each board keeps one queen per column and
//! evolves the row of each.
//!
//! The run prints progress every 100 generations and finishes with the
//! best board as a small diagram.

use queens_evo::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Eight Queens Genetic Algorithm ===\n");

    // Create a seeded RNG for reproducibility
    let mut rng = StdRng::seed_from_u64(42);

    // Build the solver with the classic parameters
    let ga = EightQueensGa::builder()
        .generations(1000)
        .population_size(64)
        .tournament_size(32)
        .mutation_rate(0.1)
        .elitism_count(8)
        .build()?;

    let config = ga.config();
    println!(
        "Running {} generations with a population of {}...\n",
        config.generations, config.population_size
    );

    // Run, reporting every 100 generations
    let result = ga.run_with_observer(&mut rng, |stats| {
        if (stats.generation + 1) % 100 == 0 {
            println!(
                "  generation {:4}: best {:2}, mean {:5.2}, worst {:2}",
                stats.generation + 1,
                stats.best_attacks,
                stats.mean_attacks,
                stats.worst_attacks
            );
        }
    })?;

    // Print results
    println!("\nEvolution complete!");
    println!("  Best board:      {}", result.best_board);
    println!("  Attacking pairs: {}", result.best_attacks);
    println!("  Solved:          {}", result.is_solved());

    println!("\nBoard:");
    for rank in (1..=8u8).rev() {
        let line: String = result
            .best_board
            .rows()
            .iter()
            .map(|&row| if row == rank { " Q" } else { " ." })
            .collect();
        println!(" {}", line);
    }

    Ok(())
}
