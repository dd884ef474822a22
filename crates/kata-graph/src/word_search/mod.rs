//! Snake word search.
//!
//! A word is found when some path of orthogonal unit moves spells it,
//! visiting each cell at most once. The search backtracks: a dead end
//! undoes the last step and tries the next direction, so a word reachable
//! only through a second branch is still found.
//!
//! # Examples
//!
//! ```
//! use kata_graph::word_search::{find_word, Grid, Position};
//!
//! let rows = ["ANGULAR", "REDNCAE", "RFIDTCL", "AGNEGSA", "YTIRTSP"];
//! assert!(find_word(&rows, "react"));
//! assert!(!find_word(&rows, "FUNCTION"));
//!
//! let grid = Grid::new(["BAB", "XXC"]);
//! let path = grid.find_path("ABC").unwrap();
//! assert_eq!(path, vec![Position::new(0, 1), Position::new(0, 2), Position::new(1, 2)]);
//! ```

mod grid;
mod search;


pub use self::grid::{Direction, Grid, Position};
pub use self::search::{find_word, SearchParams};
