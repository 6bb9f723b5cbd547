//! Run statistics
//!
//! This module provides statistics collection for solver runs.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::population::population::Population;

/// Statistics for a single generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Fewest attacks in this generation
    pub best_attacks: u32,
    /// Mean attack count
    pub mean_attacks: f64,
    /// Most attacks in this generation
    pub worst_attacks: u32,
}

impl GenerationStats {
    /// Compute statistics from an evaluated population
    ///
    /// Returns None when the population has no evaluated individuals.
    pub fn from_population(population: &Population, generation: usize) -> Option<Self> {
        let best_attacks = population.best()?.attack_count();
        let worst_attacks = population.worst()?.attack_count();
        let mean_attacks = population.mean_attacks()?;

        Some(Self {
            generation,
            best_attacks,
            mean_attacks,
            worst_attacks,
        })
    }
}

/// Statistics collector for an entire solver run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Statistics per generation, in generation order
    pub generations: Vec<GenerationStats>,
}

impl RunStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Get the per-generation history of best attack counts
    pub fn best_history(&self) -> Vec<u32> {
        self.generations.iter().map(|g| g.best_attacks).collect()
    }

    /// Get the per-generation history of mean attack counts
    pub fn mean_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_attacks).collect()
    }

    /// Get the per-generation history of worst attack counts
    pub fn worst_history(&self) -> Vec<u32> {
        self.generations.iter().map(|g| g.worst_attacks).collect()
    }
}

/// Result of a solver run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunResult {
    /// The best board in the final population
    pub best_board: Board,
    /// Attack count of the best board
    pub best_attacks: u32,
    /// Number of generations completed
    pub generations: usize,
    /// Statistics for the run
    pub stats: RunStats,
}

impl RunResult {
    /// Check whether the best board is attack-free
    pub fn is_solved(&self) -> bool {
        self.best_attacks == 0
    }
}
