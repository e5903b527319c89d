//! Error types.
//!
//! Every fallible entry point returns [`Error`]. Configuration problems are
//! detected before the first generation runs; the generation loop itself
//! cannot fail once the initial population exists.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The initializer could not find enough distinct feasible genomes
    /// within its attempt budget.
    #[error(
        "could not build initial population: found {found} of {requested} distinct feasible \
         genomes (max_attempts={max_attempts}, zero_bit_probability={zero_bit_probability}, \
         capacity={capacity})"
    )]
    InfeasiblePopulation {
        requested: usize,
        found: usize,
        max_attempts: usize,
        zero_bit_probability: f64,
        capacity: u64,
    },

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid run parameters or catalog contents.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("max_init_attempts must be at least 1")]
    ZeroInitAttempts,

    #[error("catalog has no items")]
    EmptyCatalog,

    /// Summed weights or values do not fit in `u64`.
    #[error("catalog {0} total overflows u64")]
    CatalogOverflow(&'static str),
}

/// Malformed catalog text. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing `capacity: <n>` header")]
    MissingHeader,

    #[error("line {line}: expected `capacity: <n>`, got {text:?}")]
    BadHeader { line: usize, text: String },

    #[error("line {line}: expected `<weight>,<value>`, got {text:?}")]
    BadItem { line: usize, text: String },

    #[error("line {line}: invalid integer {text:?}")]
    BadInteger { line: usize, text: String },
}
