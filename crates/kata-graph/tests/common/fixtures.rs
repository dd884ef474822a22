//! Deterministic fixtures.
//!
//! Same seed, same data. A small LCG stands in for randomness so test
//! failures reproduce exactly.

use kata_graph::{Domino, NestedNode, NodeId, Tree};

/// Deterministic hash (LCG step).
#[inline]
pub fn deterministic_hash(seed: u32) -> u32 {
    seed.wrapping_mul(1103515245).wrapping_add(12345)
}

/// Deterministic value in `0..bound`.
#[inline]
pub fn deterministic_below(seed: u32, bound: u32) -> u32 {
    (deterministic_hash(seed) >> 16) % bound
}

/// Random-shaped tree of `size` nodes whose payloads are their creation index.
///
/// Node `i > 0` hangs under a pseudo-random earlier node.
pub fn generate_tree(size: usize, seed: u32) -> (Tree<usize>, NodeId) {
    let mut tree = Tree::with_capacity(size);
    let root = tree.add_node(0);
    let mut ids = vec![root];
    let mut hash = seed;

    for i in 1..size {
        hash = deterministic_hash(hash);
        let parent = ids[(hash >> 8) as usize % ids.len()];
        let id = tree.add_child(parent, i).expect("parent exists");
        ids.push(id);
    }
    (tree, root)
}

/// Complete tree with `branching` children per inner node, `depth` levels below the root.
pub fn generate_complete_nested(branching: usize, depth: usize) -> NestedNode<u32> {
    fn build(branching: usize, depth: usize, next: &mut u32) -> NestedNode<u32> {
        let value = *next;
        *next += 1;
        if depth == 0 {
            return NestedNode::leaf(value);
        }
        let children = (0..branching).map(|_| build(branching, depth - 1, next)).collect();
        NestedNode::with_children(value, children)
    }
    build(branching, depth, &mut 0)
}

/// Add `count` back-edges from pseudo-random nodes to pseudo-random nodes.
pub fn add_back_edges<T>(tree: &mut Tree<T>, count: usize, seed: u32) {
    let n = tree.len() as u32;
    let mut hash = seed;
    for _ in 0..count {
        hash = deterministic_hash(hash);
        let from = deterministic_below(hash, n) as usize;
        hash = deterministic_hash(hash);
        let to = deterministic_below(hash, n) as usize;
        tree.add_edge(from, to).expect("handles exist");
    }
}

/// `count` tiles with faces in `0..faces`.
pub fn generate_dominoes(count: usize, faces: u32, seed: u32) -> Vec<Domino> {
    let mut hash = seed;
    (0..count)
        .map(|_| {
            hash = deterministic_hash(hash);
            let left = deterministic_below(hash, faces) as i32;
            hash = deterministic_hash(hash);
            let right = deterministic_below(hash, faces) as i32;
            Domino::new(left, right)
        })
        .collect()
}

/// `rows` x `cols` grid over the first `alphabet` capital letters.
pub fn generate_grid_rows(rows: usize, cols: usize, alphabet: u32, seed: u32) -> Vec<String> {
    let mut hash = seed;
    (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    hash = deterministic_hash(hash);
                    char::from(b'A' + deterministic_below(hash, alphabet) as u8)
                })
                .collect()
        })
        .collect()
}
