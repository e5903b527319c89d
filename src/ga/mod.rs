//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! Genomes are packed bit vectors over the catalog; fitness is the total
//! value of a feasible subset, with over-capacity subsets ranked last.
//!
//! # Pipeline
//!
//! Each generation runs, in order:
//!
//! 1. [`rank`]: stable sort by value, best first
//! 2. [`select_pairs`]: rank-weighted roulette pairing
//! 3. [`crossover`]: single-point recombination, two children per pair
//! 4. [`mutate`]: single-bit flip with probability `mutation_rate`
//! 5. [`rank`] the children, then [`combine`]: elites + top children
//!
//! [`GaRunner`] drives the loop and tracks convergence.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, limits, seed)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best solution plus per-generation statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Chu & Beasley (1998), "A Genetic Algorithm for the Multidimensional
//!   Knapsack Problem"

mod config;
pub mod init;
pub mod operators;
pub mod ranking;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use operators::{crossover, mutate};
pub use ranking::{combine, rank};
pub use runner::{GaResult, GaRunner, GenerationStats, RunState};
pub use selection::select_pairs;
pub use types::{Fitness, Genome};
