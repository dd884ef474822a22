//! DFS/BFS traversal benchmarks.

use criterion::{black_box, BenchmarkId, Criterion};

use kata_graph::{breadth_first, depth_first, TraversalParams};

use super::config;
use super::generators::generate_tree;

/// Benchmark full DFS over trees with back-edges.
pub fn bench_dfs_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs_traversal");

    for &node_count in config::TREE_SIZES {
        let back_edges = node_count * config::BACK_EDGES_PER_10_NODES / 10;
        let (tree, root) = generate_tree(node_count, back_edges, 42);

        group.bench_with_input(BenchmarkId::new("full", node_count), &node_count, |b, _| {
            b.iter(|| depth_first(black_box(&tree), black_box(root)).map(Iterator::count))
        });

        group.bench_with_input(BenchmarkId::new("first_10", node_count), &node_count, |b, _| {
            b.iter(|| {
                depth_first(black_box(&tree), black_box(root)).map(|iter| iter.take(10).count())
            })
        });
    }

    group.finish();
}

/// Benchmark BFS, including depth-limited runs.
pub fn bench_bfs_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs_traversal");

    for &node_count in config::TREE_SIZES {
        let back_edges = node_count * config::BACK_EDGES_PER_10_NODES / 10;
        let (tree, root) = generate_tree(node_count, back_edges, 7);

        group.bench_with_input(BenchmarkId::new("full", node_count), &node_count, |b, _| {
            b.iter(|| breadth_first(black_box(&tree), black_box(root)).map(Iterator::count))
        });
    }

    // Depth variation benchmarks
    let (tree_1k, root) = generate_tree(1_000, 300, 11);
    for &depth in config::DEPTH_LIMITS {
        let params = TraversalParams::default().max_depth(depth);
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, _| {
            b.iter(|| {
                tree_1k
                    .breadth_first_with(black_box(root), black_box(params))
                    .map(Iterator::count)
            })
        });
    }

    group.finish();
}
