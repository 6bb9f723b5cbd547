//! Individual wrapper type
//!
//! This module provides the Individual type that pairs a board with its
//! attack count.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::fitness::attacking_pairs;

/// An individual in the population
///
/// Wraps a board with its cached attack count. The count starts out unset
/// and is filled in by [`Individual::evaluate`]; lower counts are better.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// The board of this individual
    pub board: Board,
    /// The attack count (None if not yet evaluated)
    pub attacks: Option<u32>,
}

impl Individual {
    /// Create a new individual with an unevaluated board
    pub fn new(board: Board) -> Self {
        Self {
            board,
            attacks: None,
        }
    }

    /// Create a new individual with a known attack count
    pub fn with_attacks(board: Board, attacks: u32) -> Self {
        Self {
            board,
            attacks: Some(attacks),
        }
    }

    /// Check if this individual has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.attacks.is_some()
    }

    /// Compute and cache the attack count, returning it
    ///
    /// The count is only computed on the first call; later calls reuse the
    /// cached value.
    pub fn evaluate(&mut self) -> u32 {
        match self.attacks {
            Some(attacks) => attacks,
            None => {
                let attacks = attacking_pairs(&self.board);
                self.attacks = Some(attacks);
                attacks
            }
        }
    }

    /// Get the attack count, panicking if not evaluated
    pub fn attack_count(&self) -> u32 {
        self.attacks.expect("Individual has not been evaluated")
    }

    /// Get a reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Take the board out of this individual
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Check if this individual has strictly fewer attacks than another
    ///
    /// An unevaluated individual never wins a comparison.
    pub fn is_better_than(&self, other: &Self) -> bool {
        match (self.attacks, other.attacks) {
            (Some(a1), Some(a2)) => a1 < a2,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}
