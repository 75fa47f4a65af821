//! Puzzle and collection types.
//!
//! A `Puzzle` is the canonical, persisted form of one Hexoban level. Its JSON
//! shape is:
//!
//! ```json
//! {
//!   "id": "DWS/001",
//!   "name": "001",
//!   "author": "David W. Skinner",
//!   "source": "http://...",
//!   "difficulty": 3,
//!   "terrain": [[0, 0], [1, 0]],
//!   "init": { "goals": [[1, 0]], "crates": [[1, 0]], "ichiban": [0, 0] }
//! }
//! ```
//!
//! `difficulty` is omitted when unknown (zero) and `ichiban` when the player
//! starts at the origin.

use serde::{Deserialize, Serialize};

use super::coord::HexCoord;
use super::tile::Tile;

/// A single Hexoban puzzle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Stable key, usually `<collection>/<name>`.
    #[serde(rename = "id")]
    pub identity: String,

    pub name: String,

    pub author: String,

    pub source: String,

    /// Zero when the source gives no difficulty.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub difficulty: u32,

    /// Walkable cells in scan order. Walls are implied by the cells next to
    /// terrain that are not terrain themselves.
    pub terrain: Vec<HexCoord>,

    pub init: Init,
}

/// Initial placement of goals, crates and the player.
///
/// Every coordinate here is expected to be part of the puzzle's terrain;
/// this is checked by validation, not on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Init {
    pub goals: Vec<HexCoord>,

    pub crates: Vec<HexCoord>,

    #[serde(rename = "ichiban", default, skip_serializing_if = "HexCoord::is_origin")]
    pub player: HexCoord,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl Puzzle {
    /// Create an empty puzzle carrying the collection's shared metadata.
    pub fn for_collection(collection: &Collection) -> Self {
        Self {
            author: collection.author.clone(),
            source: collection.source.clone(),
            ..Default::default()
        }
    }

    /// Fold tiles into the puzzle.
    ///
    /// Floors extend the terrain, goals and crates are appended, walls are
    /// dropped and the last player tile wins.
    pub fn add_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        for tile in tiles {
            match tile {
                Tile::Floor(coord) => self.terrain.push(coord),
                Tile::Wall(_) => {}
                Tile::Goal(coord) => self.init.goals.push(coord),
                Tile::Crate(coord) => self.init.crates.push(coord),
                Tile::Player(coord) => self.init.player = coord,
            }
        }
    }

    /// A copy of this puzzle translated so the player starts at (0, 0).
    ///
    /// Dialects start their grids at different text offsets; centering makes
    /// the same level from two sources compare equal.
    pub fn centered(&self) -> Puzzle {
        let pivot = self.init.player;
        let recenter = |coords: &[HexCoord]| -> Vec<HexCoord> {
            coords.iter().map(|c| c.centered_at(pivot)).collect()
        };

        Puzzle {
            identity: self.identity.clone(),
            name: self.name.clone(),
            author: self.author.clone(),
            source: self.source.clone(),
            difficulty: self.difficulty,
            terrain: recenter(&self.terrain),
            init: Init {
                goals: recenter(&self.init.goals),
                crates: recenter(&self.init.crates),
                player: HexCoord::ORIGIN,
            },
        }
    }

    /// One-line summary for status output.
    pub fn summary(&self) -> String {
        format!(
            "{} ({} floor, {} goals, {} crates)",
            self.identity,
            self.terrain.len(),
            self.init.goals.len(),
            self.init.crates.len()
        )
    }
}

/// Metadata shared by every puzzle read from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,

    pub source: String,

    #[serde(default)]
    pub puzzles: Vec<Puzzle>,
}

impl Collection {
    pub fn new(author: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            source: source.into(),
            puzzles: Vec::new(),
        }
    }
}
