//! Ranking and elitist replacement.

use super::config::elite_count;
use super::types::{Fitness, Genome};
use crate::catalog::Catalog;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sorts a population by value, best first.
///
/// The sort is stable, so equal values keep their input order, and
/// infeasible genomes end up last. With the `parallel` feature and
/// `parallel = true`, fitness is evaluated with rayon; the ordering is the
/// same either way.
pub fn rank(catalog: &Catalog, population: Vec<Genome>, parallel: bool) -> Vec<Genome> {
    let fitness = evaluate_all(catalog, &population, parallel);

    let mut keyed: Vec<(Option<u64>, Genome)> = fitness
        .into_iter()
        .map(Fitness::rank_key)
        .zip(population)
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));

    keyed.into_iter().map(|(_, genome)| genome).collect()
}

/// Evaluates every genome, preserving input order.
pub(crate) fn evaluate_all(
    catalog: &Catalog,
    population: &[Genome],
    parallel: bool,
) -> Vec<Fitness> {
    #[cfg(feature = "parallel")]
    if parallel {
        return population.par_iter().map(|g| catalog.evaluate(g)).collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(|g| catalog.evaluate(g)).collect()
}

/// Builds the next generation from ranked parents and ranked children.
///
/// Takes the top `round(parents.len() * elite_rate)` parents, then fills
/// the rest from the top of `children`. The result is a concatenation and
/// is not re-sorted. If there are too few children (odd population size),
/// the remaining slots are filled with the next-ranked parents so the
/// output always has `parents.len()` genomes.
pub fn combine(parents: &[Genome], children: &[Genome], elite_rate: f64) -> Vec<Genome> {
    let size = parents.len();
    let elites = elite_count(size, elite_rate);

    let mut next = Vec::with_capacity(size);
    next.extend_from_slice(&parents[..elites]);

    let from_children = (size - elites).min(children.len());
    next.extend_from_slice(&children[..from_children]);

    let shortfall = size - next.len();
    next.extend_from_slice(&parents[elites..elites + shortfall]);

    next
}
