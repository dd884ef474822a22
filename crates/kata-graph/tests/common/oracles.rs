//! Exhaustive reference answers. Only for tiny inputs.

use kata_graph::{Domino, Grid, Position};

/// Try every order and orientation of `tiles`.
pub fn brute_force_can_chain(tiles: &[Domino]) -> bool {
    fn extend(tiles: &[Domino], used: &mut [bool], end: Option<i32>, placed: usize) -> bool {
        if placed == tiles.len() {
            return true;
        }
        for i in 0..tiles.len() {
            if used[i] {
                continue;
            }
            for tile in [tiles[i], tiles[i].flipped()] {
                if end.map_or(true, |e| e == tile.left) {
                    used[i] = true;
                    if extend(tiles, used, Some(tile.right), placed + 1) {
                        return true;
                    }
                    used[i] = false;
                }
            }
        }
        false
    }
    extend(tiles, &mut vec![false; tiles.len()], None, 0)
}

/// Recursive snake search over every start cell, case-sensitive.
pub fn brute_force_find(rows: &[String], word: &str) -> bool {
    let grid = Grid::new(rows);
    let target: Vec<char> = word.chars().collect();
    if target.is_empty() {
        return true;
    }

    fn walk(grid: &Grid, target: &[char], pos: Position, path: &mut Vec<Position>) -> bool {
        if grid.cell(pos) != Some(target[path.len()]) || path.contains(&pos) {
            return false;
        }
        path.push(pos);
        if path.len() == target.len() {
            return true;
        }
        let moves = [
            pos.col.checked_sub(1).map(|c| Position::new(pos.row, c)),
            Some(Position::new(pos.row, pos.col + 1)),
            pos.row.checked_sub(1).map(|r| Position::new(r, pos.col)),
            Some(Position::new(pos.row + 1, pos.col)),
        ];
        for next in moves.into_iter().flatten() {
            if walk(grid, target, next, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let starts: Vec<Position> = grid.positions().collect();
    starts
        .into_iter()
        .any(|start| walk(&grid, &target, start, &mut Vec::new()))
}
