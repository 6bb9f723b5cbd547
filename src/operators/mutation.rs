//! Mutation operators
//!
//! This module provides the gene reset mutation applied to offspring.

use rand::Rng;

use crate::board::{Board, BOARD_SIZE, MAX_ROW, MIN_ROW};

/// Gene reset mutation
///
/// With probability `mutation_rate`, replaces one uniformly chosen gene with
/// a uniform row value. The probability draw happens once per application and
/// covers the whole board, so at most one gene changes.
#[derive(Clone, Debug)]
pub struct GeneResetMutation {
    /// Probability of mutating an individual (0.0 to 1.0)
    pub mutation_rate: f64,
}

impl GeneResetMutation {
    /// Create a new gene reset mutation with the given rate
    pub fn new(mutation_rate: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&mutation_rate),
            "Mutation rate must be in [0, 1]"
        );
        Self { mutation_rate }
    }

    /// Mutate the board in place
    ///
    /// The replacement value may equal the old one, in which case the board
    /// is left unchanged even though the rate check passed.
    pub fn mutate<R: Rng>(&self, board: &mut Board, rng: &mut R) {
        if rng.gen::<f64>() < self.mutation_rate {
            let column = rng.gen_range(0..BOARD_SIZE);
            board.set_row(column, rng.gen_range(MIN_ROW..=MAX_ROW));
        }
    }
}
