//! Chain decision and construction.

use super::graph::DominoGraph;
use super::types::{Chain, Domino};

/// True if all `tiles` can be laid in one row, each tile turned either way,
/// with touching faces equal.
///
/// The empty set and a single tile are always chainable.
#[must_use]
pub fn can_chain(tiles: &[Domino]) -> bool {
    if tiles.len() <= 1 {
        return true;
    }

    let graph = DominoGraph::build(tiles);
    let odd = graph.odd_vertices().len();
    let connected = graph.is_connected();

    log::debug!(
        "Domino graph: {} tiles, {} faces, {} odd, connected={}",
        tiles.len(),
        graph.vertex_count(),
        odd,
        connected
    );

    connected && (odd == 0 || odd == 2)
}

/// Lay all `tiles` out in a valid row, or None if no row exists.
///
/// When two faces have odd degree the row starts on the first of them;
/// otherwise it starts on the first tile's left face and is a closed loop.
#[must_use]
pub fn arrange(tiles: &[Domino]) -> Option<Chain> {
    if !can_chain(tiles) {
        return None;
    }
    if tiles.is_empty() {
        return Some(Chain::default());
    }

    let graph = DominoGraph::build(tiles);
    let start = graph.odd_vertices().first().copied().unwrap_or(0);
    let walk = graph.euler_walk(start);

    // Connected with 0 or 2 odd vertices, so the walk covers every tile.
    if walk.len() != tiles.len() {
        log::warn!(
            "Euler walk covered {} of {} tiles",
            walk.len(),
            tiles.len()
        );
        return None;
    }

    Some(Chain::new(walk))
}
