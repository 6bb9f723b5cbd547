//! Selection operators
//!
//! This module provides tournament selection over evaluated populations.

use rand::Rng;

use crate::population::population::Population;

/// Tournament selection operator
///
/// Draws `tournament_size` competitors uniformly with replacement and keeps
/// the one with the fewest attacks. Ties go to the earliest draw, so the
/// winner never changes on an equal attack count.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Tournament size (number of individuals competing)
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Self {
        assert!(tournament_size >= 1, "Tournament size must be at least 1");
        Self { tournament_size }
    }

    /// Select one individual from the population, returning its index
    ///
    /// Panics if the population is empty or has unevaluated individuals.
    pub fn select<R: Rng>(&self, population: &Population, rng: &mut R) -> usize {
        assert!(!population.is_empty(), "Population cannot be empty");

        let mut best_index = rng.gen_range(0..population.len());
        let mut best_attacks = population[best_index].attack_count();

        for _ in 1..self.tournament_size {
            let challenger = rng.gen_range(0..population.len());
            let attacks = population[challenger].attack_count();
            if attacks < best_attacks {
                best_index = challenger;
                best_attacks = attacks;
            }
        }

        best_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::population::individual::Individual;

    fn evaluated_population(rows: &[[u8; 8]]) -> Population {
        let mut population: Population = rows
            .iter()
            .map(|&r| Individual::new(Board::new(r).unwrap()))
            .collect();
        population.evaluate_all();
        population
    }

    #[test]
    fn test_tournament_selection_selects_valid_index() {
        let mut rng = rand::thread_rng();
        let population = evaluated_population(&[
            [2, 2, 4, 8, 1, 6, 3, 4],
            [1, 2, 3, 4, 5, 6, 7, 8],
            [4, 7, 3, 8, 2, 5, 1, 6],
            [1, 1, 1, 1, 1, 1, 1, 1],
        ]);
        let selection = TournamentSelection::new(3);

        for _ in 0..100 {
            let idx = selection.select(&population, &mut rng);
            assert!(idx < population.len());
        }
    }

    #[test]
    fn test_tournament_selection_prefers_fewer_attacks() {
        let mut rng = rand::thread_rng();
        // Index 0 is a solved board; the rest are maximally attacked
        let population = evaluated_population(&[
            [4, 7, 3, 8, 2, 5, 1, 6],
            [1, 1, 1, 1, 1, 1, 1, 1],
            [1, 2, 3, 4, 5, 6, 7, 8],
            [8, 8, 8, 8, 8, 8, 8, 8],
        ]);
        let selection = TournamentSelection::new(16);

        let mut best_count = 0;
        let trials = 100;
        for _ in 0..trials {
            if selection.select(&population, &mut rng) == 0 {
                best_count += 1;
            }
        }

        // 16 draws over 4 individuals nearly always include the solved board
        assert!(best_count >= 80);
    }

    #[test]
    fn test_tournament_selection_size_one_is_uniform_draw() {
        let mut rng = rand::thread_rng();
        let population = evaluated_population(&[
            [4, 7, 3, 8, 2, 5, 1, 6],
            [1, 1, 1, 1, 1, 1, 1, 1],
        ]);
        let selection = TournamentSelection::new(1);

        let mut counts = [0usize; 2];
        for _ in 0..1000 {
            counts[selection.select(&population, &mut rng)] += 1;
        }

        // A single draw ignores fitness entirely
        assert!(counts[0] > 350 && counts[1] > 350);
    }

    #[test]
    #[should_panic(expected = "Tournament size must be at least 1")]
    fn test_tournament_size_zero() {
        TournamentSelection::new(0);
    }
}
