//! Initial population generation.
//!
//! Genomes are drawn bit by bit, each bit 0 with probability
//! `zero_bit_probability`, and accepted only if feasible and not already in
//! the population. Every slot has a bounded number of draws, so a catalog
//! that admits too few distinct feasible genomes fails fast instead of
//! looping forever.

use super::types::Genome;
use crate::catalog::Catalog;
use crate::error::Error;
use rand::Rng;
use std::collections::HashSet;

/// Upper bound on up-front reservations; larger populations grow on demand.
const MAX_RESERVE: usize = 4096;

/// Builds exactly `size` distinct feasible genomes.
///
/// # Errors
/// [`Error::InfeasiblePopulation`] if any slot needs more than
/// `max_attempts` draws.
pub fn generate<R: Rng>(
    catalog: &Catalog,
    size: usize,
    zero_bit_probability: f64,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Genome>, Error> {
    let population = fill(catalog, size, zero_bit_probability, max_attempts, rng);
    if population.len() < size {
        return Err(infeasible(
            catalog,
            size,
            population.len(),
            zero_bit_probability,
            max_attempts,
        ));
    }
    Ok(population)
}

/// Like [`generate`], but stops at the first slot that exhausts its
/// attempts and returns the genomes found so far.
///
/// # Errors
/// [`Error::InfeasiblePopulation`] if fewer than two genomes were found,
/// since selection needs at least one pair.
pub fn generate_up_to<R: Rng>(
    catalog: &Catalog,
    size: usize,
    zero_bit_probability: f64,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Genome>, Error> {
    let population = fill(catalog, size, zero_bit_probability, max_attempts, rng);
    if population.len() < 2 {
        return Err(infeasible(
            catalog,
            size,
            population.len(),
            zero_bit_probability,
            max_attempts,
        ));
    }
    Ok(population)
}

fn fill<R: Rng>(
    catalog: &Catalog,
    size: usize,
    zero_bit_probability: f64,
    max_attempts: usize,
    rng: &mut R,
) -> Vec<Genome> {
    let reserve = size.min(MAX_RESERVE);
    let mut population = Vec::with_capacity(reserve);
    let mut seen = HashSet::with_capacity(reserve);

    'slots: for _ in 0..size {
        for _ in 0..max_attempts {
            let genome = random_genome(catalog.len(), zero_bit_probability, rng);
            if catalog.evaluate(&genome).is_feasible() && !seen.contains(&genome) {
                seen.insert(genome.clone());
                population.push(genome);
                continue 'slots;
            }
        }
        break;
    }

    population
}

/// Draws one genome; each bit is 0 with probability `zero_bit_probability`.
pub fn random_genome<R: Rng>(len: usize, zero_bit_probability: f64, rng: &mut R) -> Genome {
    Genome::from_bits((0..len).map(|_| rng.random::<f64>() >= zero_bit_probability))
}

fn infeasible(
    catalog: &Catalog,
    requested: usize,
    found: usize,
    zero_bit_probability: f64,
    max_attempts: usize,
) -> Error {
    Error::InfeasiblePopulation {
        requested,
        found,
        max_attempts,
        zero_bit_probability,
        capacity: catalog.capacity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog(n: usize, capacity: u64) -> Catalog {
        let items = (0..n as u64).map(|i| Item::new(i % 7 + 1, i * 3 + 1)).collect();
        Catalog::new(items, capacity).unwrap()
    }

    #[test]
    fn test_generate_size_distinct_feasible() {
        let c = catalog(30, 60);
        let mut rng = StdRng::seed_from_u64(42);
        let pop = generate(&c, 100, 0.5, 200, &mut rng).unwrap();

        assert_eq!(pop.len(), 100);
        let distinct: HashSet<_> = pop.iter().collect();
        assert_eq!(distinct.len(), 100);
        for g in &pop {
            assert_eq!(g.len(), 30);
            assert!(c.evaluate(g).is_feasible());
        }
    }

    #[test]
    fn test_zero_capacity_fails() {
        let c = catalog(8, 0);
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate(&c, 10, 0.5, 200, &mut rng).unwrap_err();
        match err {
            Error::InfeasiblePopulation {
                requested,
                found,
                max_attempts,
                capacity,
                ..
            } => {
                assert_eq!(requested, 10);
                assert!(found <= 1, "only the empty knapsack is feasible");
                assert_eq!(max_attempts, 200);
                assert_eq!(capacity, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_too_few_distinct_genomes() {
        // 3 items: at most 8 distinct genomes exist.
        let c = catalog(3, 1000);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generate(&c, 9, 0.5, 500, &mut rng).is_err());
    }

    #[test]
    fn test_generate_up_to_returns_partial() {
        // Every subset of 3 items is feasible, so exactly 8 can be found.
        let c = catalog(3, 1000);
        let mut rng = StdRng::seed_from_u64(7);
        let pop = generate_up_to(&c, 50, 0.5, 500, &mut rng).unwrap();
        assert_eq!(pop.len(), 8);
    }

    #[test]
    fn test_generate_up_to_needs_a_pair() {
        let c = catalog(8, 0);
        let mut rng = StdRng::seed_from_u64(3);
        // Sparse draws make the empty knapsack easy to hit once.
        let err = generate_up_to(&c, 10, 0.9, 1000, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InfeasiblePopulation { found: 1, .. }));
    }

    #[test]
    fn test_zero_bit_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(0);
        let all_zero = random_genome(16, 1.0, &mut rng);
        assert_eq!(all_zero.count_ones(), 0);
        let all_one = random_genome(16, 0.0, &mut rng);
        assert_eq!(all_one.count_ones(), 16);
    }

    #[test]
    fn test_huge_requested_size_does_not_preallocate() {
        // 3 items admit 8 genomes; the request only bounds the slot loop.
        let c = catalog(3, 1000);
        let mut rng = StdRng::seed_from_u64(7);
        let pop = generate_up_to(&c, usize::MAX, 0.5, 500, &mut rng).unwrap();
        assert_eq!(pop.len(), 8);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let c = catalog(20, 30);
        let a = generate(&c, 50, 0.5, 200, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate(&c, 50, 0.5, 200, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }
}
