//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → ranking → selection → crossover → mutation →
//! elitist replacement → repeat, until the best value stagnates or the
//! generation budget runs out.

use super::config::GaConfig;
use super::init;
use super::operators::{crossover, mutate};
use super::ranking::{combine, rank};
use super::selection::select_pairs;
use super::types::{Fitness, Genome};
use crate::catalog::{Catalog, Item};
use crate::error::{ConfigError, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// State of the generation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    Running,
    /// The best value repeated more than `stagnation_limit` times.
    Converged,
    /// `max_generations` ran without convergence.
    Exhausted,
}

/// Snapshot recorded after each generation's ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,
    /// Value of this generation's top genome, `None` if it was infeasible.
    pub generation_best: Option<u64>,
    /// Best value seen so far.
    pub best_value: u64,
    /// Repeat counter after this generation.
    pub repeats: usize,
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaResult {
    /// Total value of the best genome found.
    pub best_value: u64,

    /// Total weight of the best genome found.
    pub best_weight: u64,

    /// The selected items, in catalog order.
    pub selected: Vec<Item>,

    /// Catalog positions of the selected items.
    pub selected_indices: Vec<usize>,

    /// The best genome itself.
    pub best: Genome,

    /// Number of generations executed.
    pub generations: usize,

    /// Terminal state: [`RunState::Converged`] or [`RunState::Exhausted`].
    pub state: RunState,

    /// Population size the run actually used.
    pub population_size: usize,

    /// Per-generation statistics.
    pub history: Vec<GenerationStats>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use knapsack_ga::{Catalog, Item};
/// use knapsack_ga::ga::{GaConfig, GaRunner};
///
/// let catalog = Catalog::new(
///     vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)],
///     5,
/// )?;
/// let result = GaRunner::run(&catalog, &GaConfig::default().with_seed(42))?;
/// assert_eq!(result.best_value, 7);
/// # Ok::<(), knapsack_ga::Error>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    ///
    /// # Errors
    /// [`Error::Config`] for an invalid configuration or empty catalog,
    /// [`Error::InfeasiblePopulation`] if fewer than two distinct feasible
    /// genomes can be found.
    pub fn run(catalog: &Catalog, config: &GaConfig) -> Result<GaResult, Error> {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(
            seed,
            items = catalog.len(),
            capacity = catalog.capacity(),
            "starting GA run"
        );
        let mut rng = StdRng::seed_from_u64(seed);
        Self::run_with_rng(catalog, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`. `config.seed` is
    /// ignored.
    pub fn run_with_rng<R: Rng>(
        catalog: &Catalog,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, Error> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog.into());
        }

        // 1. Initialize population
        let mut population = init::generate_up_to(
            catalog,
            config.population_size,
            config.zero_bit_probability,
            config.max_init_attempts,
            rng,
        )?;
        if population.len() < config.population_size {
            warn!(
                requested = config.population_size,
                found = population.len(),
                "fewer distinct feasible genomes than requested, running with a smaller population"
            );
        }
        let population_size = population.len();

        // Every initial genome is feasible, and the best is only replaced
        // by a strictly greater value, so the tracked best stays feasible.
        let mut best = population[0].clone();
        let mut best_fitness = Fitness::Infeasible;
        let mut repeats = 0usize;
        let mut state = RunState::Running;
        let mut history = Vec::new();

        // 2. Evolutionary loop
        for generation in 1..=config.max_generations {
            population = rank(catalog, population, config.parallel);

            let current = &population[0];
            let current_fitness = catalog.evaluate(current);
            if current_fitness.rank_key() > best_fitness.rank_key() {
                best = current.clone();
                best_fitness = current_fitness;
                repeats = 0;
            } else if current_fitness.rank_key() == best_fitness.rank_key() {
                repeats += 1;
            }

            let stats = GenerationStats {
                generation,
                generation_best: current_fitness.value(),
                best_value: best_fitness.value().unwrap_or_default(),
                repeats,
            };
            debug!(
                generation,
                generation_best = ?stats.generation_best,
                best_value = stats.best_value,
                repeats,
                "generation ranked"
            );
            history.push(stats);

            if repeats > config.stagnation_limit {
                state = RunState::Converged;
                break;
            }

            // 3. Breed the next generation
            let pairs = select_pairs(&population, rng);
            let children = crossover(&pairs, rng);
            let children = mutate(&children, config.mutation_rate, rng);
            let children = rank(catalog, children, config.parallel);
            population = combine(&population, &children, config.elite_ratio);
        }

        if state == RunState::Running {
            state = RunState::Exhausted;
        }

        let best_value = best_fitness.value().unwrap_or_default();
        let best_weight = best_fitness.weight().unwrap_or_default();
        info!(
            ?state,
            generations = history.len(),
            best_value,
            best_weight,
            "GA run finished"
        );

        Ok(GaResult {
            best_value,
            best_weight,
            selected: catalog.decode(&best),
            selected_indices: best.iter_ones().collect(),
            best,
            generations: history.len(),
            state,
            population_size,
            history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
