//! knapsack-ga CLI - solve a 0/1 knapsack instance with the genetic algorithm.

use clap::Parser;
use knapsack_ga::ga::{GaConfig, GaRunner};
use knapsack_ga::Catalog;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::Level;

/// Approximate the best 0/1 knapsack packing with a genetic algorithm
#[derive(Parser, Debug)]
#[command(name = "knapsack-ga")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Data file: `capacity: N` header, then one `weight,value` per line
    data: PathBuf,

    /// Requested initial population size
    #[arg(long, default_value = "800")]
    population_size: usize,

    /// Probability that each bit of an initial genome is 0
    #[arg(long, default_value = "0.5")]
    zero_bit_probability: f64,

    /// Probability of flipping one bit of each offspring
    #[arg(long, default_value = "0.8")]
    mutation_rate: f64,

    /// Fraction of ranked parents kept unchanged
    #[arg(long, default_value = "0.01")]
    elite_ratio: f64,

    /// Maximum number of generations
    #[arg(long, default_value = "100")]
    max_generations: usize,

    /// Stop once the best value has repeated more than this many times
    #[arg(long, default_value = "50")]
    stagnation_limit: usize,

    /// Draws allowed per initial individual
    #[arg(long, default_value = "200")]
    max_init_attempts: usize,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Evaluate fitness on a single thread
    #[arg(long)]
    sequential: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> GaConfig {
        GaConfig {
            population_size: self.population_size,
            zero_bit_probability: self.zero_bit_probability,
            mutation_rate: self.mutation_rate,
            elite_ratio: self.elite_ratio,
            max_generations: self.max_generations,
            stagnation_limit: self.stagnation_limit,
            max_init_attempts: self.max_init_attempts,
            parallel: !self.sequential,
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), knapsack_ga::Error> {
    let catalog = Catalog::from_path(&args.data)?;

    let start = Instant::now();
    let result = GaRunner::run(&catalog, &args.config())?;
    let elapsed = start.elapsed();

    println!("Evaluation time: {:.7}s", elapsed.as_secs_f64());
    println!("Best value: {}", result.best_value);
    println!("Weight: {}", result.best_weight);
    println!(
        "Stopped after {} generations ({:?})",
        result.generations, result.state
    );
    println!("\nList of picked items:\n");
    for (number, item) in result.selected.iter().enumerate() {
        println!(
            "Item number: {}, value of {}$, and weight of {}kg.",
            number + 1,
            item.value,
            item.weight
        );
    }

    Ok(())
}
