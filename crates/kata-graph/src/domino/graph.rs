//! Face-value multigraph built from a tile set.

use std::collections::HashMap;

use super::types::Domino;

/// Adjacency entry: (tile index, neighbouring vertex).
type Incidence = (usize, usize);

/// Undirected multigraph with one vertex per distinct face value.
///
/// A double tile `[a|a]` is a self-loop: it appears twice in `a`'s
/// adjacency list and adds 2 to its degree.
pub(crate) struct DominoGraph {
    faces: Vec<i32>,
    adjacency: Vec<Vec<Incidence>>,
    tile_count: usize,
}

impl DominoGraph {
    pub(crate) fn build(tiles: &[Domino]) -> Self {
        let mut index: HashMap<i32, usize> = HashMap::new();
        let mut faces = Vec::new();
        let mut adjacency: Vec<Vec<Incidence>> = Vec::new();

        let mut vertex = |face: i32, faces: &mut Vec<i32>, adjacency: &mut Vec<Vec<Incidence>>| {
            *index.entry(face).or_insert_with(|| {
                faces.push(face);
                adjacency.push(Vec::new());
                faces.len() - 1
            })
        };

        for (tile, domino) in tiles.iter().enumerate() {
            let a = vertex(domino.left, &mut faces, &mut adjacency);
            let b = vertex(domino.right, &mut faces, &mut adjacency);
            adjacency[a].push((tile, b));
            adjacency[b].push((tile, a));
        }

        Self {
            faces,
            adjacency,
            tile_count: tiles.len(),
        }
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.faces.len()
    }

    pub(crate) fn face(&self, vertex: usize) -> i32 {
        self.faces[vertex]
    }

    pub(crate) fn degree(&self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }

    /// Vertices with odd degree, in first-seen order.
    pub(crate) fn odd_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count())
            .filter(|&v| self.degree(v) % 2 == 1)
            .collect()
    }

    /// True if every vertex is reachable from vertex 0.
    ///
    /// Only faces that appear on some tile are vertices, so isolated faces
    /// never exist here.
    pub(crate) fn is_connected(&self) -> bool {
        let n = self.vertex_count();
        if n == 0 {
            return true;
        }

        let mut seen = vec![false; n];
        let mut stack = vec![0];
        seen[0] = true;
        let mut reached = 1;

        while let Some(v) = stack.pop() {
            for &(_, next) in &self.adjacency[v] {
                if !seen[next] {
                    seen[next] = true;
                    reached += 1;
                    stack.push(next);
                }
            }
        }

        reached == n
    }

    /// Walk every edge exactly once starting at `start` (Hierholzer).
    ///
    /// Returns the tiles oriented along the walk. The caller checks the
    /// Euler conditions first; on a graph that fails them the walk covers
    /// fewer tiles than exist.
    pub(crate) fn euler_walk(&self, start: usize) -> Vec<Domino> {
        let mut used = vec![false; self.tile_count];
        let mut cursor = vec![0usize; self.vertex_count()];
        let mut stack: Vec<(usize, Option<Domino>)> = vec![(start, None)];
        let mut walk = Vec::with_capacity(self.tile_count);

        while let Some(&(v, via)) = stack.last() {
            let edges = &self.adjacency[v];
            while cursor[v] < edges.len() && used[edges[cursor[v]].0] {
                cursor[v] += 1;
            }

            if let Some(&(tile, next)) = edges.get(cursor[v]) {
                used[tile] = true;
                stack.push((next, Some(Domino::new(self.face(v), self.face(next)))));
            } else {
                stack.pop();
                if let Some(domino) = via {
                    walk.push(domino);
                }
            }
        }

        walk.reverse();
        walk
    }
}
