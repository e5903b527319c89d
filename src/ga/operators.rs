//! Bit-string genetic operators.
//!
//! Both operators return fresh genomes and leave their inputs untouched.
//!
//! # Crossover Operators
//!
//! - [`crossover`]: single-point recombination, two children per pair
//!
//! # Mutation Operators
//!
//! - [`mutate`]: flip exactly one random bit with probability `mutation_rate`
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use super::types::Genome;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover over every pair.
///
/// Returns exactly `2 * pairs.len()` genomes, ordered
/// `[c1(pair0), c2(pair0), c1(pair1), ...]`.
pub fn crossover<R: Rng>(pairs: &[(Genome, Genome)], rng: &mut R) -> Vec<Genome> {
    let mut children = Vec::with_capacity(pairs.len() * 2);
    for (a, b) in pairs {
        let (c1, c2) = single_point_crossover(a, b, rng);
        children.push(c1);
        children.push(c2);
    }
    children
}

/// Single-point crossover of one pair.
///
/// Draws `p` uniformly in `[0, len)` and returns
/// `(a[..p] ++ b[p..], b[..p] ++ a[p..])`. Zero-length parents are returned
/// as copies.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng>(a: &Genome, b: &Genome, rng: &mut R) -> (Genome, Genome) {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");

    if n == 0 {
        return (a.clone(), b.clone());
    }

    let point = rng.random_range(0..n);
    splice(a, b, point)
}

/// Builds both children for a fixed crossover point.
fn splice(a: &Genome, b: &Genome, point: usize) -> (Genome, Genome) {
    let mut c1 = a.clone();
    let mut c2 = b.clone();
    c1.as_mut_bitslice()[point..].copy_from_bitslice(&b.as_bitslice()[point..]);
    c2.as_mut_bitslice()[point..].copy_from_bitslice(&a.as_bitslice()[point..]);
    (c1, c2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Applies single-bit mutation to every genome.
///
/// For each genome, draws `U[0, 1)`; if it is below `mutation_rate`, exactly
/// one uniformly chosen bit is flipped. Output order matches input order.
pub fn mutate<R: Rng>(population: &[Genome], mutation_rate: f64, rng: &mut R) -> Vec<Genome> {
    population
        .iter()
        .map(|genome| {
            if rng.random::<f64>() < mutation_rate && !genome.is_empty() {
                let bit = rng.random_range(0..genome.len());
                genome.flipped(bit)
            } else {
                genome.clone()
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
