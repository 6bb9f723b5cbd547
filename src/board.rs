//! Board representation
//!
//! This module provides the fixed-length board type for the 8-queens puzzle.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Number of columns (and queens) on the board
pub const BOARD_SIZE: usize = 8;

/// Lowest valid row value
pub const MIN_ROW: u8 = 1;

/// Highest valid row value
pub const MAX_ROW: u8 = 8;

/// Candidate placement of eight queens
///
/// The value at column `i` is the 1-based row of the queen in that column.
/// One queen per column is guaranteed by the representation, so only row and
/// diagonal attacks can occur.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// One row value per column, each in `MIN_ROW..=MAX_ROW`
    rows: [u8; BOARD_SIZE],
}

impl Board {
    /// Create a board from an array of row values
    pub fn new(rows: [u8; BOARD_SIZE]) -> Result<Self, BoardError> {
        for (column, &value) in rows.iter().enumerate() {
            if !(MIN_ROW..=MAX_ROW).contains(&value) {
                return Err(BoardError::RowOutOfRange { column, value });
            }
        }
        Ok(Self { rows })
    }

    /// Create a board from a slice of row values
    pub fn from_rows(rows: &[u8]) -> Result<Self, BoardError> {
        let rows: [u8; BOARD_SIZE] =
            rows.try_into().map_err(|_| BoardError::WrongLength {
                expected: BOARD_SIZE,
                actual: rows.len(),
            })?;
        Self::new(rows)
    }

    /// Generate a board with every row drawn uniformly from `MIN_ROW..=MAX_ROW`
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut rows = [0u8; BOARD_SIZE];
        for row in &mut rows {
            *row = rng.gen_range(MIN_ROW..=MAX_ROW);
        }
        Self { rows }
    }

    /// Get all row values
    pub fn rows(&self) -> &[u8] {
        &self.rows
    }

    /// Get the queen row for a column
    pub fn row(&self, column: usize) -> Option<u8> {
        self.rows.get(column).copied()
    }

    /// Set the queen row for a column
    ///
    /// Panics if `column` is out of bounds or `row` is outside the valid range.
    pub fn set_row(&mut self, column: usize, row: u8) {
        assert!(
            (MIN_ROW..=MAX_ROW).contains(&row),
            "Row value must be in {}..={}",
            MIN_ROW,
            MAX_ROW
        );
        self.rows[column] = row;
    }
}

impl std::ops::Index<usize> for Board {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = BoardError;

    fn try_from(rows: &[u8]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl TryFrom<[u8; BOARD_SIZE]> for Board {
    type Error = BoardError;

    fn try_from(rows: [u8; BOARD_SIZE]) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}
