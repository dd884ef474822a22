//! Merging lazily produced streams.

use kata_core::merge_sorted;
use kata_graph::{bfs_traverse, breadth_first, TraversalParams, Tree};

use crate::common::fixtures::generate_complete_nested;

#[test]
fn test_merge_bfs_depth_streams() {
    // BFS depths are non-decreasing, so two BFS depth streams merge sorted
    let (tree_a, root_a) = Tree::from_nested(generate_complete_nested(2, 3));
    let (tree_b, root_b) = Tree::from_nested(generate_complete_nested(3, 2));

    let merged: Vec<usize> = merge_sorted(
        || breadth_first(&tree_a, root_a).unwrap().map(|v| v.depth),
        || breadth_first(&tree_b, root_b).unwrap().map(|v| v.depth),
    )
    .collect();

    assert_eq!(merged.len(), tree_a.len() + tree_b.len());
    assert!(merged.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_merge_with_collected_result() {
    let (tree, root) = Tree::from_nested(generate_complete_nested(2, 2));
    let result = bfs_traverse(&tree, root, TraversalParams::default()).unwrap();
    let depths: Vec<usize> = result.visited_order.iter().map(|id| result.depths[id]).collect();

    let merged: Vec<usize> = merge_sorted(|| depths.clone(), || vec![0, 1, 5]).collect();
    assert_eq!(merged, vec![0, 0, 1, 1, 1, 2, 2, 2, 2, 5]);
}
