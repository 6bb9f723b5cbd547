//! Error types for queens-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for board construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Candidate sequence did not contain exactly eight rows
    #[error("Board must have exactly {expected} rows, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// A row value fell outside the playable range
    #[error("Row value {value} at column {column} is outside 1..=8")]
    RowOutOfRange { column: usize, value: u8 },
}

/// Top-level error type for solver runs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvolutionError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

/// Error type for gradient descent training
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrainingError {
    /// The dataset contained no samples
    #[error("Dataset is empty")]
    EmptyDataset,
}

/// Result type alias for solver operations
pub type EvoResult<T> = Result<T, EvolutionError>;
