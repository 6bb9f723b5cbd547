//! Eight queens solver
//!
//! This module implements a generational genetic algorithm for the
//! eight queens puzzle.

use rand::Rng;

use crate::error::{EvoResult, EvolutionError};
use crate::operators::crossover::OnePointCrossover;
use crate::operators::mutation::GeneResetMutation;
use crate::operators::selection::TournamentSelection;
use crate::population::individual::Individual;
use crate::population::population::Population;
use crate::stats::{GenerationStats, RunResult, RunStats};

/// Configuration for the solver
#[derive(Clone, Debug)]
pub struct GaConfig {
    /// Number of generations to run
    pub generations: usize,
    /// Population size
    pub population_size: usize,
    /// Number of contenders per tournament
    pub tournament_size: usize,
    /// Per-individual mutation probability
    pub mutation_rate: f64,
    /// Number of elite copies carried into each generation
    pub elitism_count: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 1000,
            population_size: 64,
            tournament_size: 32,
            mutation_rate: 0.1,
            elitism_count: 8,
        }
    }
}

/// Builder for EightQueensGa
#[derive(Clone, Debug)]
pub struct GaBuilder {
    config: GaConfig,
}

impl GaBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: GaConfig::default(),
        }
    }

    /// Set the number of generations
    pub fn generations(mut self, generations: usize) -> Self {
        self.config.generations = generations;
        self
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the tournament size
    pub fn tournament_size(mut self, size: usize) -> Self {
        self.config.tournament_size = size;
        self
    }

    /// Set the mutation rate
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.config.mutation_rate = rate;
        self
    }

    /// Set the number of elite copies per generation
    pub fn elitism_count(mut self, count: usize) -> Self {
        self.config.elitism_count = count;
        self
    }

    /// Build the solver, validating the configuration
    pub fn build(self) -> Result<EightQueensGa, EvolutionError> {
        EightQueensGa::new(self.config)
    }
}

impl Default for GaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Genetic algorithm solver for the eight queens puzzle
///
/// A generational GA with tournament selection, one-point crossover,
/// single-gene mutation, and elitism.
#[derive(Clone, Debug)]
pub struct EightQueensGa {
    config: GaConfig,
    selection: TournamentSelection,
    crossover: OnePointCrossover,
    mutation: GeneResetMutation,
}

impl EightQueensGa {
    /// Create a solver from a configuration
    pub fn new(config: GaConfig) -> Result<Self, EvolutionError> {
        if config.population_size == 0 {
            return Err(EvolutionError::Configuration(
                "Population size must be at least 1".to_string(),
            ));
        }
        if config.tournament_size == 0 {
            return Err(EvolutionError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        if config.tournament_size > config.population_size {
            return Err(EvolutionError::Configuration(
                "Tournament size must not exceed the population size".to_string(),
            ));
        }
        if config.elitism_count > config.population_size {
            return Err(EvolutionError::Configuration(
                "Elitism count must not exceed the population size".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&config.mutation_rate) {
            return Err(EvolutionError::Configuration(
                "Mutation rate must be in [0, 1]".to_string(),
            ));
        }

        let selection = TournamentSelection::new(config.tournament_size);
        let crossover = OnePointCrossover::new();
        let mutation = GeneResetMutation::new(config.mutation_rate);

        Ok(Self {
            config,
            selection,
            crossover,
            mutation,
        })
    }

    /// Create a builder for EightQueensGa
    pub fn builder() -> GaBuilder {
        GaBuilder::new()
    }

    /// Get the solver configuration
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Run the genetic algorithm
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<RunResult> {
        self.run_with_observer(rng, |_| {})
    }

    /// Run the genetic algorithm, calling `observer` with each
    /// generation's statistics
    pub fn run_with_observer<R, Obs>(&self, rng: &mut R, mut observer: Obs) -> EvoResult<RunResult>
    where
        R: Rng,
        Obs: FnMut(&GenerationStats),
    {
        // Initialize and evaluate the starting population
        let mut population = Population::random(self.config.population_size, rng);
        population.evaluate_all();

        let mut stats = RunStats::new();

        for generation in 0..self.config.generations {
            let mut new_population = Population::with_capacity(self.config.population_size);

            // Elitism: copy the current best
            if self.config.elitism_count > 0 {
                let elite = population
                    .best()
                    .ok_or(EvolutionError::EmptyPopulation)?
                    .clone();
                for _ in 0..self.config.elitism_count {
                    new_population.push(elite.clone());
                }
            }

            // Generate offspring
            while new_population.len() < self.config.population_size {
                let parent1_idx = self.selection.select(&population, rng);
                let parent2_idx = self.selection.select(&population, rng);

                let parent1 = population[parent1_idx].board();
                let parent2 = population[parent2_idx].board();

                let (mut child1, mut child2) = self.crossover.crossover(parent1, parent2, rng);
                self.mutation.mutate(&mut child1, rng);
                self.mutation.mutate(&mut child2, rng);

                new_population.push(Individual::new(child1));
                new_population.push(Individual::new(child2));
            }

            // Truncate to exact size
            new_population.truncate(self.config.population_size);

            new_population.evaluate_all();
            population = new_population;

            // Record statistics
            let gen_stats = GenerationStats::from_population(&population, generation)
                .ok_or(EvolutionError::EmptyPopulation)?;
            observer(&gen_stats);
            stats.record(gen_stats);
        }

        let best = population.best().ok_or(EvolutionError::EmptyPopulation)?;

        Ok(RunResult {
            best_board: best.board().clone(),
            best_attacks: best.attack_count(),
            generations: self.config.generations,
            stats,
        })
    }
}
