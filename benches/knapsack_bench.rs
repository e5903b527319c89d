//! Criterion benchmarks for the knapsack GA.
//!
//! Uses synthetic catalogs generated from a fixed LCG so timings are
//! comparable across runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_ga::ga::{rank, GaConfig, GaRunner, Genome};
use knapsack_ga::{Catalog, Item};

fn synthetic_catalog(n: usize) -> Catalog {
    let mut state = 0x9e37_79b9_u64;
    let mut next = || {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (state >> 33) % 1000 + 1
    };
    let items: Vec<Item> = (0..n).map(|_| Item::new(next(), next())).collect();
    let capacity = items.iter().map(|i| i.weight).sum::<u64>() / 2;
    Catalog::new(items, capacity).expect("synthetic catalog fits in u64")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_ga_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run");
    group.sample_size(10);

    for (items, pop, gen) in [(50usize, 100usize, 50usize), (200, 200, 30), (1000, 400, 10)] {
        let catalog = synthetic_catalog(items);
        let config = GaConfig {
            population_size: pop,
            max_generations: gen,
            parallel: false,
            seed: Some(42),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", items, pop, gen), items),
            &(catalog, config),
            |b, (cat, cfg)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(cat), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for &n in &[100usize, 1000] {
        let catalog = synthetic_catalog(n);
        let population: Vec<Genome> = (0..800u64)
            .map(|i| Genome::from_bits((0..n as u64).map(|b| (i * 31 + b * 7) % 3 == 0)))
            .collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(catalog, population),
            |b, (cat, pop)| b.iter(|| black_box(rank(cat, pop.clone(), false))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_ga_run, bench_rank);
criterion_main!(benches);
