//! Attack counting for queen placements
//!
//! This module provides the fitness function minimized by the solver.

use crate::board::{Board, BOARD_SIZE};

/// Largest possible attack count: all 8*7/2 pairs attacking
pub const MAX_ATTACKING_PAIRS: u32 = 28;

/// Count the unordered pairs of queens that attack each other
///
/// Two queens attack each other when they share a row or sit on a common
/// diagonal, i.e. their row distance equals their column distance. Column
/// attacks cannot occur because the representation holds one queen per
/// column. The count is 0 for a solved board and at most
/// [`MAX_ATTACKING_PAIRS`].
///
/// For example, the board `[2, 2, 4, 8, 1, 6, 3, 4]` has 10 attacking pairs.
pub fn attacking_pairs(board: &Board) -> u32 {
    let rows = board.rows();
    let mut pairs = 0;
    for i in 0..BOARD_SIZE {
        for j in (i + 1)..BOARD_SIZE {
            let row_delta = (rows[i] as i32 - rows[j] as i32).abs();
            let column_delta = (j - i) as i32;
            if row_delta == 0 || row_delta == column_delta {
                pairs += 1;
            }
        }
    }
    pairs
}

/// Check whether a board is a solution (no queen attacks another)
pub fn is_solution(board: &Board) -> bool {
    attacking_pairs(board) == 0
}
