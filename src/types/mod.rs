//! Core domain types for hexaban.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `HexCoord` / `RectCoord` - axial and text-grid coordinates
//! - `Tile` - one thing on a cell (floor, wall, goal, crate, player)
//! - `Puzzle` / `Collection` - the canonical puzzle model

mod coord;
mod puzzle;
mod tile;

pub use coord::{HexCoord, RectCoord};
pub use puzzle::{Collection, Init, Puzzle};
pub use tile::Tile;
