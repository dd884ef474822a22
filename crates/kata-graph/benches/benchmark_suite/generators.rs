//! Deterministic data generators for benchmarks.

use kata_graph::{Domino, NodeId, Tree};

#[inline]
fn lcg(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407)
}

/// Random-shaped tree of `node_count` nodes plus `back_edges` extra links.
pub fn generate_tree(node_count: usize, back_edges: usize, seed: u64) -> (Tree<u64>, NodeId) {
    let mut tree = Tree::with_capacity(node_count);
    let root = tree.add_node(0);
    let mut hash = seed;

    for i in 1..node_count {
        hash = lcg(hash);
        let parent = (hash >> 33) as usize % i;
        tree.add_child(parent, i as u64).expect("parent precedes child");
    }
    for _ in 0..back_edges {
        hash = lcg(hash);
        let from = (hash >> 33) as usize % node_count;
        hash = lcg(hash);
        let to = (hash >> 33) as usize % node_count;
        tree.add_edge(from, to).expect("handles in range");
    }

    (tree, root)
}

/// A chainable tile set: a random closed walk over `faces` face values.
pub fn generate_chainable_dominoes(count: usize, faces: u64, seed: u64) -> Vec<Domino> {
    let mut hash = seed;
    let mut current = 0i32;
    let mut tiles = Vec::with_capacity(count);

    for i in 0..count {
        let next = if i + 1 == count {
            0
        } else {
            hash = lcg(hash);
            ((hash >> 33) % faces) as i32
        };
        let tile = Domino::new(current, next);
        // Scramble orientation
        tiles.push(if hash & 1 == 0 { tile } else { tile.flipped() });
        current = next;
    }

    // Scramble order
    for i in (1..tiles.len()).rev() {
        hash = lcg(hash);
        tiles.swap(i, (hash >> 33) as usize % (i + 1));
    }
    tiles
}

/// Square grid of random letters from the first `alphabet` capitals.
pub fn generate_grid(side: usize, alphabet: u64, seed: u64) -> Vec<String> {
    let mut hash = seed;
    (0..side)
        .map(|_| {
            (0..side)
                .map(|_| {
                    hash = lcg(hash);
                    char::from(b'A' + ((hash >> 33) % alphabet) as u8)
                })
                .collect()
        })
        .collect()
}
