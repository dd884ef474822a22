//! Domino chain benchmarks.

use criterion::{black_box, BenchmarkId, Criterion};

use kata_graph::{arrange, can_chain};

use super::config;
use super::generators::generate_chainable_dominoes;

/// Benchmark chain decision and construction on chainable sets.
pub fn bench_domino_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("domino_chain");

    for &count in config::DOMINO_COUNTS {
        let tiles = generate_chainable_dominoes(count, 12, count as u64);

        group.bench_with_input(BenchmarkId::new("can_chain", count), &count, |b, _| {
            b.iter(|| can_chain(black_box(&tiles)))
        });

        group.bench_with_input(BenchmarkId::new("arrange", count), &count, |b, _| {
            b.iter(|| arrange(black_box(&tiles)))
        });
    }

    group.finish();
}
