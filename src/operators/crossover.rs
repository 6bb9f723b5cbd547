//! Crossover operators
//!
//! This module provides one-point crossover over boards.

use rand::Rng;

use crate::board::{Board, BOARD_SIZE};

/// One-point crossover operator
///
/// Exchanges the gene suffixes of two parents at a cut index, producing two
/// complementary children.
#[derive(Clone, Debug, Default)]
pub struct OnePointCrossover;

impl OnePointCrossover {
    /// Create a new one-point crossover
    pub fn new() -> Self {
        Self
    }

    /// Cross two parents at a cut point drawn uniformly from `0..BOARD_SIZE`
    ///
    /// A cut of 0 swaps the parents whole; the cut never lands past the last
    /// column, so at least one gene always comes from the other parent.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &Board,
        parent2: &Board,
        rng: &mut R,
    ) -> (Board, Board) {
        let cut = rng.gen_range(0..BOARD_SIZE);
        self.crossover_at(parent1, parent2, cut)
    }

    /// Cross two parents at the given cut point
    ///
    /// The first child keeps `parent1`'s genes before `cut` and takes
    /// `parent2`'s from `cut` on; the second child gets the complementary
    /// halves. Crossing `[2,4,7,4,8,5,5,2]` and `[3,2,7,5,2,4,1,1]` at 3
    /// yields `[2,4,7,5,2,4,1,1]` and `[3,2,7,4,8,5,5,2]`.
    ///
    /// Panics if `cut` is not below `BOARD_SIZE`.
    pub fn crossover_at(&self, parent1: &Board, parent2: &Board, cut: usize) -> (Board, Board) {
        assert!(cut < BOARD_SIZE, "Cut point must be below the board size");

        let mut child1 = parent1.clone();
        let mut child2 = parent2.clone();

        for i in cut..BOARD_SIZE {
            child1.set_row(i, parent2[i]);
            child2.set_row(i, parent1[i]);
        }

        (child1, child2)
    }
}
