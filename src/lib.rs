//! Genetic algorithm solver for the 0/1 knapsack problem.
//!
//! Given items with weights and values and a capacity bound, searches for
//! a subset of maximal value whose total weight fits. The search is
//! heuristic: it usually finds the optimum on small and medium catalogs
//! but may settle on a local optimum.
//!
//! - [`Catalog`]: items + capacity; evaluates and decodes genomes, and
//!   parses the `capacity: N` / `weight,value` text format
//! - [`ga`]: population initialization, operators and the generation loop
//!
//! All randomness comes from one seedable generator, so a fixed seed
//! reproduces a run exactly.
//!
//! ```
//! use knapsack_ga::Catalog;
//! use knapsack_ga::ga::{GaConfig, GaRunner};
//!
//! let catalog: Catalog = "capacity: 10\n5,10\n4,40\n6,30\n3,50\n".parse()?;
//! let config = GaConfig::default().with_population_size(10).with_seed(42);
//! let result = GaRunner::run(&catalog, &config)?;
//! assert!(result.best_weight <= 10);
//! # Ok::<(), knapsack_ga::Error>(())
//! ```

pub mod catalog;
pub mod error;
pub mod ga;

pub use catalog::{Catalog, Item};
pub use error::{ConfigError, Error, ParseError, Result};
