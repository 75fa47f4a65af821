//! Tiles produced from text grid glyphs.
//!
//! A single glyph can stand for several things at once (a crate resting on a
//! goal, the player standing on a goal). Each of those becomes its own tile
//! so the puzzle can keep floors, goals, crates and the player apart.

use super::coord::HexCoord;

/// One thing occupying a hex cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Walkable cell.
    Floor(HexCoord),
    /// Blocked cell. Only exists while parsing; puzzles infer walls from
    /// the cells next to their terrain.
    Wall(HexCoord),
    Goal(HexCoord),
    Crate(HexCoord),
    Player(HexCoord),
}

impl Tile {
    pub fn coord(&self) -> HexCoord {
        match *self {
            Tile::Floor(c) | Tile::Wall(c) | Tile::Goal(c) | Tile::Crate(c) | Tile::Player(c) => c,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Tile::Floor(_) => "floor",
            Tile::Wall(_) => "wall",
            Tile::Goal(_) => "goal",
            Tile::Crate(_) => "crate",
            Tile::Player(_) => "player",
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind(), self.coord())
    }
}
