//! Chain decision checked against exhaustive search.

use kata_graph::{arrange, can_chain};

use crate::common::fixtures::generate_dominoes;
use crate::common::oracles::brute_force_can_chain;

#[test]
fn test_can_chain_matches_brute_force() {
    println!("\n=== TEST: can_chain vs brute force ===");

    let mut accepted = 0;
    for seed in 0..300 {
        let count = 1 + (seed as usize % 6);
        let tiles = generate_dominoes(count, 4, seed);

        let expected = brute_force_can_chain(&tiles);
        assert_eq!(can_chain(&tiles), expected, "seed {seed}: {tiles:?}");
        if expected {
            accepted += 1;
        }
    }
    println!("  accepted {accepted} of 300 sets");
    assert!(accepted > 0 && accepted < 300, "fixtures should cover both answers");
}

#[test]
fn test_arrange_agrees_with_can_chain() {
    for seed in 0..300 {
        let tiles = generate_dominoes(2 + (seed as usize % 10), 5, seed);
        match arrange(&tiles) {
            Some(chain) => {
                assert!(can_chain(&tiles));
                assert!(chain.is_valid(), "seed {seed}: {chain}");
                assert_eq!(chain.len(), tiles.len());
            }
            None => assert!(!can_chain(&tiles), "seed {seed}: chain missing"),
        }
    }
}
