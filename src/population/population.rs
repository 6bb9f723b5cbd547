//! Population type
//!
//! This module provides the Population container type.

use rand::Rng;

use crate::board::Board;
use crate::population::individual::Individual;

/// A population of individuals
#[derive(Clone, Debug, Default)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Individual>,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self {
            individuals: Vec::new(),
        }
    }

    /// Create a population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Create a population of uniformly random boards
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::new(Board::random(rng)))
            .collect();
        Self { individuals }
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Drop individuals past the given size, keeping the earliest entries
    pub fn truncate(&mut self, size: usize) {
        self.individuals.truncate(size);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Get the underlying slice of individuals
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Compute and cache the attack count of every individual
    pub fn evaluate_all(&mut self) {
        for individual in &mut self.individuals {
            individual.evaluate();
        }
    }

    /// Check if all individuals have been evaluated
    pub fn all_evaluated(&self) -> bool {
        self.individuals.iter().all(|i| i.is_evaluated())
    }

    /// Get the best individual (fewest attacks)
    ///
    /// Ties keep the earliest individual, so the winner is stable across
    /// repeated calls. Unevaluated individuals are skipped.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .min_by_key(|i| i.attack_count())
    }

    /// Get the worst individual (most attacks)
    pub fn worst(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .max_by_key(|i| i.attack_count())
    }

    /// Compute the mean attack count over evaluated individuals
    pub fn mean_attacks(&self) -> Option<f64> {
        let evaluated: Vec<u32> = self
            .individuals
            .iter()
            .filter_map(|i| i.attacks)
            .collect();

        if evaluated.is_empty() {
            None
        } else {
            Some(evaluated.iter().sum::<u32>() as f64 / evaluated.len() as f64)
        }
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl IntoIterator for Population {
    type Item = Individual;
    type IntoIter = std::vec::IntoIter<Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self::from_individuals(iter.into_iter().collect())
    }
}
