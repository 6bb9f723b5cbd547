//! # queens-evo
//!
//! A Genetic Algorithm for the Eight Queens Puzzle.
//!
//! This library evolves board configurations until no two queens attack
//! each other, and ships a small gradient descent linear regression
//! module built in the same spirit.
//!
//! ## Core Concepts
//!
//! - **Explicit Operators**: tournament selection, one-point crossover, and single-gene mutation as standalone, injectable values
//! - **Deterministic Replay**: every randomized step draws from a caller-supplied `Rng`
//! - **Per-Generation Diagnostics**: best, mean, and worst attack counts recorded for every generation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use queens_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let result = EightQueensGa::builder()
//!     .generations(1000)
//!     .population_size(64)
//!     .tournament_size(32)
//!     .mutation_rate(0.1)
//!     .elitism_count(8)
//!     .build()?
//!     .run(&mut rng)?;
//!
//! println!("{} ({} attacking pairs)", result.best_board, result.best_attacks);
//! ```

pub mod board;
pub mod error;
pub mod fitness;
pub mod operators;
pub mod population;
pub mod regression;
pub mod solver;
pub mod stats;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::board::*;
    pub use crate::error::*;
    pub use crate::fitness::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::regression::*;
    pub use crate::solver::*;
    pub use crate::stats::*;
}
