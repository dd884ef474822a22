//! Benchmark configuration constants.

/// Tree sizes for traversal benchmarks
pub const TREE_SIZES: &[usize] = &[100, 1_000, 10_000];

/// Back-edges added per 10 tree nodes
pub const BACK_EDGES_PER_10_NODES: usize = 3;

/// Depth limits for the depth-variation benchmark
pub const DEPTH_LIMITS: &[usize] = &[1, 2, 4, 6, 8];

/// Tile counts for domino benchmarks
pub const DOMINO_COUNTS: &[usize] = &[10, 100, 1_000, 10_000];

/// Square grid sides for word search benchmarks
pub const GRID_SIDES: &[usize] = &[5, 10, 20];
