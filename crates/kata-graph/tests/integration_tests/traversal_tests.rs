//! Traversal tests over generated trees.

use std::collections::HashSet;

use kata_core::{LazySequence, Step};
use kata_graph::{
    bfs_traverse, breadth_first, depth_first, dfs_traverse, NodeId, TraversalParams, Tree,
};

use crate::common::fixtures::{add_back_edges, generate_complete_nested, generate_tree};

fn all_ids<T>(tree: &Tree<T>) -> HashSet<NodeId> {
    (0..tree.len()).collect()
}

#[test]
fn test_exactly_once_on_random_trees() {
    println!("\n=== TEST: Exactly-once on random trees ===");

    for seed in 0..20 {
        let (tree, root) = generate_tree(200, seed);

        let dfs: Vec<NodeId> = depth_first(&tree, root).unwrap().map(|v| v.id).collect();
        let bfs: Vec<NodeId> = breadth_first(&tree, root).unwrap().map(|v| v.id).collect();

        assert_eq!(dfs.len(), tree.len(), "seed {seed}: DFS cardinality");
        assert_eq!(bfs.len(), tree.len(), "seed {seed}: BFS cardinality");
        assert_eq!(dfs.iter().copied().collect::<HashSet<_>>(), all_ids(&tree));
        assert_eq!(bfs.iter().copied().collect::<HashSet<_>>(), all_ids(&tree));
    }
}

#[test]
fn test_exactly_once_with_back_edges() {
    println!("\n=== TEST: Exactly-once with back-edges ===");

    for seed in 0..20 {
        let (mut tree, root) = generate_tree(150, seed);
        add_back_edges(&mut tree, 60, seed.wrapping_add(7));

        let dfs: Vec<NodeId> = depth_first(&tree, root).unwrap().map(|v| v.id).collect();
        let bfs: Vec<NodeId> = breadth_first(&tree, root).unwrap().map(|v| v.id).collect();

        let dfs_set: HashSet<_> = dfs.iter().copied().collect();
        let bfs_set: HashSet<_> = bfs.iter().copied().collect();
        assert_eq!(dfs_set.len(), dfs.len(), "seed {seed}: DFS repeated a node");
        assert_eq!(bfs_set.len(), bfs.len(), "seed {seed}: BFS repeated a node");
        // Tree edges alone already reach every node
        assert_eq!(dfs_set, all_ids(&tree));
        assert_eq!(dfs_set, bfs_set);
    }
}

#[test]
fn test_complete_tree_orders() {
    // 3-ary, 4 levels below the root: 1 + 3 + 9 + 27 + 81 nodes
    let (tree, root) = Tree::from_nested(generate_complete_nested(3, 4));
    assert_eq!(tree.len(), 121);

    // Payloads were numbered in pre-order, so DFS yields them in order
    let dfs: Vec<u32> = depth_first(&tree, root).unwrap().map(|v| *v.payload).collect();
    assert_eq!(dfs, (0..121).collect::<Vec<_>>());

    let result = bfs_traverse(&tree, root, TraversalParams::default()).unwrap();
    let mut level_sizes = [0usize; 5];
    for id in &result.visited_order {
        level_sizes[result.depths[id]] += 1;
    }
    assert_eq!(level_sizes, [1, 3, 9, 27, 81]);
}

#[test]
fn test_limits_from_config() {
    let config = kata_core::TraversalConfig {
        max_depth: Some(2),
        max_nodes: None,
    };
    let (tree, root) = Tree::from_nested(generate_complete_nested(3, 4));

    let result = dfs_traverse(&tree, root, TraversalParams::from(&config)).unwrap();
    assert_eq!(result.node_count(), 1 + 3 + 9);
    assert_eq!(result.max_depth_reached(), 2);
}

#[test]
fn test_lazy_pull_protocol() {
    let (tree, root) = Tree::from_nested(generate_complete_nested(2, 1));
    let mut bfs = breadth_first(&tree, root).unwrap();

    let mut pulled = Vec::new();
    while let Step::Yielded(visit) = bfs.pull() {
        pulled.push(*visit.payload);
    }
    assert_eq!(pulled, vec![0, 1, 2]);

    // Exhaustion is idempotent
    assert!(bfs.pull().is_exhausted());
    assert!(bfs.pull().is_exhausted());
}

#[test]
fn test_concurrent_traversals_share_tree() {
    let (mut tree, root) = generate_tree(500, 42);
    add_back_edges(&mut tree, 100, 43);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| depth_first(&tree, root).unwrap().count()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 500);
        }
    });
}
