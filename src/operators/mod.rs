//! Genetic operators
//!
//! This module provides the selection, crossover, and mutation operators
//! used by the solver loop.

pub mod crossover;
pub mod mutation;
pub mod selection;

pub mod prelude {
    pub use super::crossover::*;
    pub use super::mutation::*;
    pub use super::selection::*;
}
