//! Roulette-style parent pairing.
//!
//! The population is assumed to be ranked best first. For every pair, each
//! individual at rank `j` draws a score `(n - j) * U[0, 1)` and the two
//! highest scores become the parents. Higher ranks are favoured, but any
//! individual can win. Scores are redrawn over the whole population for
//! every pair, so the same individual may parent several pairs.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 3
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use super::types::Genome;
use rand::Rng;

/// Produces exactly `population.len() / 2` parent pairs.
///
/// `population` must be sorted by fitness, best first.
pub fn select_pairs<R: Rng>(population: &[Genome], rng: &mut R) -> Vec<(Genome, Genome)> {
    let pairs = population.len() / 2;
    (0..pairs)
        .map(|_| {
            let (a, b) = select_pair_indices(population.len(), rng);
            (population[a].clone(), population[b].clone())
        })
        .collect()
}

/// Draws one round of rank-weighted scores and returns the indices of the
/// highest and second-highest score.
///
/// Ties keep the lower index. Requires `n >= 2`.
pub(crate) fn select_pair_indices<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(n >= 2, "pairing needs at least two individuals");

    let mut first = (0usize, f64::NEG_INFINITY);
    let mut second = (0usize, f64::NEG_INFINITY);

    for j in 0..n {
        let score = (n - j) as f64 * rng.random::<f64>();
        if score > first.1 {
            second = first;
            first = (j, score);
        } else if score > second.1 {
            second = (j, score);
        }
    }

    (first.0, second.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Replays fixed uniform draws. `random::<f64>()` keeps the top 53 bits
    /// of `next_u64`, so each draw is stored pre-shifted.
    struct ScriptedRng {
        words: Vec<u64>,
        next: usize,
    }

    impl ScriptedRng {
        fn new(uniforms: &[f64]) -> Self {
            let words = uniforms
                .iter()
                .map(|u| ((u * (1u64 << 53) as f64) as u64) << 11)
                .collect();
            Self { words, next: 0 }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            let word = self.words[self.next % self.words.len()];
            self.next += 1;
            word
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    fn population(n: usize) -> Vec<Genome> {
        // Distinct genomes; index i is encoded in the bits.
        (0..n)
            .map(|i| Genome::from_bits((0..16).map(|b| (i >> b) & 1 == 1)))
            .collect()
    }

    #[test]
    fn test_pair_count() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [2, 3, 10, 11, 800] {
            let pop = population(n);
            assert_eq!(select_pairs(&pop, &mut rng).len(), n / 2);
        }
    }

    #[test]
    fn test_pair_members_distinct_positions() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (a, b) = select_pair_indices(7, &mut rng);
            assert_ne!(a, b);
            assert!(a < 7 && b < 7);
        }
    }

    #[test]
    fn test_two_individuals_always_paired() {
        let pop = population(2);
        let mut rng = StdRng::seed_from_u64(5);
        for (a, b) in select_pairs(&pop, &mut rng) {
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_favors_higher_rank() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 10;
        let mut counts = vec![0u32; n];
        for _ in 0..10_000 {
            let (a, b) = select_pair_indices(n, &mut rng);
            counts[a] += 1;
            counts[b] += 1;
        }
        assert!(
            counts[0] > counts[n - 1] * 3,
            "best rank should be chosen far more often: {counts:?}"
        );
    }

    #[test]
    fn test_worst_rank_still_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 4;
        let mut worst = 0u32;
        for _ in 0..10_000 {
            let (a, b) = select_pair_indices(n, &mut rng);
            if a == n - 1 || b == n - 1 {
                worst += 1;
            }
        }
        assert!(worst > 0, "rank {} was never selected", n - 1);
    }

    #[test]
    fn test_scripted_draws_reproduce_scores() {
        let mut rng = ScriptedRng::new(&[0.5, 0.25, 0.75]);
        assert_eq!(rng.random::<f64>(), 0.5);
        assert_eq!(rng.random::<f64>(), 0.25);
        assert_eq!(rng.random::<f64>(), 0.75);
    }

    #[test]
    fn test_runner_up_found_after_index_one() {
        // Scores: 4*0.5=2.0, 3*0.1=0.3, 2*0.9=1.8, 1*0.95=0.95.
        let mut rng = ScriptedRng::new(&[0.5, 0.1, 0.9, 0.95]);
        assert_eq!(select_pair_indices(4, &mut rng), (0, 2));
    }

    #[test]
    fn test_runner_up_follows_displaced_leader() {
        // Scores: 4*0.1=0.4, 3*0.2=0.6, 2*0.25=0.5, 1*0.9=0.9.
        let mut rng = ScriptedRng::new(&[0.1, 0.2, 0.25, 0.9]);
        assert_eq!(select_pair_indices(4, &mut rng), (3, 1));
    }

    #[test]
    fn test_runner_up_late_in_large_population() {
        // Leader at 0 (score 6*63/64), runner-up at 4 (score 2*0.95=1.9).
        let mut rng = ScriptedRng::new(&[1.0 - 1.0 / 64.0, 0.01, 0.01, 0.01, 0.95, 0.01]);
        assert_eq!(select_pair_indices(6, &mut rng), (0, 4));
    }

    #[test]
    fn test_all_scores_tied_picks_first_two() {
        // Every score is exactly 0.75.
        let mut rng = ScriptedRng::new(&[0.1875, 0.25, 0.375, 0.75]);
        assert_eq!(select_pair_indices(4, &mut rng), (0, 1));
    }

    #[test]
    fn test_runner_up_tie_keeps_lower_index() {
        // Scores: 2.0, 0.75, 0.75, 0.5.
        let mut rng = ScriptedRng::new(&[0.5, 0.25, 0.375, 0.5]);
        assert_eq!(select_pair_indices(4, &mut rng), (0, 1));
    }

    #[test]
    fn test_leader_tie_keeps_lower_index() {
        // Scores: 1.5, 1.5, just under 1.0. The later equal score ranks second.
        let mut rng = ScriptedRng::new(&[0.5, 0.75, 1.0 - 1.0 / 1024.0]);
        let (first, second) = select_pair_indices(3, &mut rng);
        assert_eq!((first, second), (0, 1));
    }

    #[test]
    fn test_two_individuals_runner_up_is_the_other() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen_swapped = false;
        for _ in 0..200 {
            let (a, b) = select_pair_indices(2, &mut rng);
            assert_eq!(a + b, 1);
            seen_swapped |= a == 1;
        }
        assert!(seen_swapped, "rank 1 should sometimes outscore rank 0");
    }

    #[test]
    fn test_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_pairs(&[], &mut rng).is_empty());
        assert!(select_pairs(&population(1), &mut rng).is_empty());
    }
}
