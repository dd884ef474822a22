//! Snake search checked against exhaustive search.

use kata_graph::{Grid, SearchParams};

use crate::common::fixtures::{deterministic_hash, generate_grid_rows};
use crate::common::oracles::brute_force_find;

/// Word of `len` letters taken from a random walk in the grid, so that
/// roughly half of the probes are present.
fn probe_word(rows: &[String], len: usize, seed: u32) -> String {
    let mut hash = seed;
    (0..len)
        .map(|_| {
            hash = deterministic_hash(hash);
            let row = &rows[(hash >> 8) as usize % rows.len()];
            let bytes = row.as_bytes();
            char::from(bytes[(hash >> 16) as usize % bytes.len()])
        })
        .collect()
}

#[test]
fn test_search_matches_brute_force() {
    println!("\n=== TEST: search vs brute force ===");

    let params = SearchParams::default().case_insensitive(false);
    let mut found = 0;
    for seed in 0..200 {
        let rows = generate_grid_rows(4, 5, 3, seed);
        let grid = Grid::new(&rows);
        let word = probe_word(&rows, 2 + (seed as usize % 5), seed.wrapping_mul(31));

        let path = grid.search(&word, &params).unwrap();
        assert_eq!(path.is_some(), brute_force_find(&rows, &word), "seed {seed}: {word} in {rows:?}");
        if path.is_some() {
            found += 1;
        }
    }
    println!("  found {found} of 200 probes");
    assert!(found > 0);
}

#[test]
fn test_search_with_config() {
    let config = kata_core::SearchConfig {
        case_insensitive: true,
        max_steps: Some(1_000),
    };
    let grid = Grid::new(["ANGULAR", "REDNCAE", "RFIDTCL", "AGNEGSA", "YTIRTSP"]);
    let params = SearchParams::from(&config);

    assert!(grid.search("undefined", &params).unwrap().is_some());
    assert!(grid.search("null", &params).unwrap().is_none());
}
