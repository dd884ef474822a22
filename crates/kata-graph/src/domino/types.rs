//! Tile and chain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// A domino tile. Orientation only matters once the tile sits in a [`Chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domino {
    pub left: i32,
    pub right: i32,
}

impl Domino {
    #[must_use]
    pub const fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    /// Same tile turned around.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// True if both tiles have the same faces in either orientation.
    #[must_use]
    pub fn same_tile(&self, other: &Domino) -> bool {
        *self == *other || *self == other.flipped()
    }
}

impl From<(i32, i32)> for Domino {
    fn from((left, right): (i32, i32)) -> Self {
        Self::new(left, right)
    }
}

impl From<[i32; 2]> for Domino {
    fn from([left, right]: [i32; 2]) -> Self {
        Self::new(left, right)
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// Parses `"left:right"`, e.g. `"1:5"`.
impl FromStr for Domino {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, right) = s
            .split_once(':')
            .ok_or_else(|| GraphError::InvalidInput(format!("domino '{s}' is not 'a:b'")))?;
        let face = |text: &str| {
            text.trim().parse::<i32>().map_err(|e| {
                GraphError::InvalidInput(format!("domino '{s}' has a bad face '{text}': {e}"))
            })
        };
        Ok(Self::new(face(left)?, face(right)?))
    }
}

/// Oriented tiles laid out in a row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    tiles: Vec<Domino>,
}

impl Chain {
    #[must_use]
    pub fn new(tiles: Vec<Domino>) -> Self {
        Self { tiles }
    }

    #[must_use]
    pub fn tiles(&self) -> &[Domino] {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// True if every adjacent pair shares a face (`tiles[i].right == tiles[i + 1].left`).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.tiles.windows(2).all(|w| w[0].right == w[1].left)
    }

    /// Outer faces of the row, or None when empty.
    #[must_use]
    pub fn ends(&self) -> Option<(i32, i32)> {
        Some((self.tiles.first()?.left, self.tiles.last()?.right))
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}
