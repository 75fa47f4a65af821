//! Glyph tokens to puzzle tiles.

use crate::types::{HexCoord, Puzzle, Tile};

use super::grid::{Glyph, GridError, GridTokenizer};

impl Glyph {
    /// The tiles a glyph stands for at `coord`.
    ///
    /// Every glyph except a wall implies a floor underneath it.
    pub fn tiles(self, coord: HexCoord) -> Vec<Tile> {
        match self {
            Glyph::Wall => vec![Tile::Wall(coord)],
            Glyph::Floor => vec![Tile::Floor(coord)],
            Glyph::Goal => vec![Tile::Floor(coord), Tile::Goal(coord)],
            Glyph::Crate => vec![Tile::Floor(coord), Tile::Crate(coord)],
            Glyph::CrateOnGoal => vec![Tile::Floor(coord), Tile::Goal(coord), Tile::Crate(coord)],
            Glyph::Player => vec![Tile::Floor(coord), Tile::Player(coord)],
            Glyph::PlayerOnGoal => vec![Tile::Floor(coord), Tile::Player(coord), Tile::Goal(coord)],
        }
    }
}

/// Tokenize a grid section and expand every glyph into tiles, in scan order.
pub fn parse_text_grid(section: &[u8]) -> Result<Vec<Tile>, GridError> {
    let mut tiles = Vec::new();
    for token in GridTokenizer::new(section) {
        let token = token?;
        tiles.extend(token.glyph.tiles(token.position.to_hex()));
    }
    Ok(tiles)
}

/// Parse a grid section straight into an otherwise empty puzzle.
pub fn parse_puzzle_grid(section: &[u8]) -> Result<Puzzle, GridError> {
    let mut puzzle = Puzzle::default();
    puzzle.add_tiles(parse_text_grid(section)?);
    Ok(puzzle)
}
