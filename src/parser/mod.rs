//! Parser building blocks shared by every dialect reader.
//!
//! Puzzle files mix free-form header text, `Key: value` properties and hex
//! grids drawn in a double-height offset layout. Reading one happens in
//! three layers:
//!
//! - [`TextCursor`] walks the file, matches literals and splits it into
//!   blank-line separated sections
//! - [`GridTokenizer`] turns a section's grid lines into positioned glyphs
//! - [`parse_text_grid`] expands glyphs into [`Tile`](crate::types::Tile)s
//!
//! # Usage
//!
//! ```ignore
//! use hexaban::parser::{parse_puzzle_grid, TextCursor};
//!
//! let mut cursor = TextCursor::new(std::fs::read("levels.hsb")?);
//! let mut section = TextCursor::new(cursor.take_section());
//! let title = section.extract_property("Title");
//! let puzzle = parse_puzzle_grid(section.remaining())?;
//! ```

pub mod cursor;
pub mod grid;
pub mod span;
pub mod translate;

pub use cursor::{unquote, TextCursor};
pub use grid::{Glyph, GlyphToken, GridError, GridTokenizer};
pub use span::{offset_to_location, Location};
pub use translate::{parse_puzzle_grid, parse_text_grid};
