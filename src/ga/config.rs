//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for the knapsack GA.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 800);
/// assert_eq!(config.max_generations, 100);
/// assert_eq!(config.stagnation_limit, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_elite_ratio(0.05)
///     .with_mutation_rate(0.3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Requested number of individuals in the initial population.
    ///
    /// The driver may run with fewer when the catalog admits fewer distinct
    /// feasible genomes than requested.
    pub population_size: usize,

    /// Probability that each bit of a freshly drawn genome is 0.
    ///
    /// Higher values produce sparser, more likely feasible, initial genomes.
    pub zero_bit_probability: f64,

    /// Probability that an offspring gets exactly one bit flipped.
    pub mutation_rate: f64,

    /// Fraction of ranked parents copied unchanged into the next generation.
    ///
    /// The elite count is `round(population_size * elite_ratio)`.
    pub elite_ratio: f64,

    /// Maximum number of generations before the run is exhausted.
    pub max_generations: usize,

    /// Number of generations the best value may repeat before the run is
    /// considered converged. The run stops once the repeat counter
    /// exceeds this value.
    pub stagnation_limit: usize,

    /// Draws allowed per initial individual while searching for a distinct
    /// feasible genome.
    pub max_init_attempts: usize,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from the thread RNG; it is logged so the run can
    /// be replayed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 800,
            zero_bit_probability: 0.5,
            mutation_rate: 0.8,
            elite_ratio: 0.01,
            max_generations: 100,
            stagnation_limit: 50,
            max_init_attempts: 200,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the zero-bit probability used by the initializer.
    pub fn with_zero_bit_probability(mut self, p: f64) -> Self {
        self.zero_bit_probability = p;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the per-individual attempt cap for initialization.
    pub fn with_max_init_attempts(mut self, n: usize) -> Self {
        self.max_init_attempts = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites carried over for a population of `population` individuals.
    pub fn elite_count(&self, population: usize) -> usize {
        elite_count(population, self.elite_ratio)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        check_unit("zero_bit_probability", self.zero_bit_probability)?;
        check_unit("mutation_rate", self.mutation_rate)?;
        check_unit("elite_ratio", self.elite_ratio)?;
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.max_init_attempts == 0 {
            return Err(ConfigError::ZeroInitAttempts);
        }
        Ok(())
    }
}

/// `round(population * ratio)`, clamped to the population.
pub(crate) fn elite_count(population: usize, ratio: f64) -> usize {
    ((population as f64 * ratio).round() as usize).min(population)
}

fn check_unit(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails the range check.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
