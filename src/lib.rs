//! hexaban - Hexoban puzzle collection converter
//!
//! A library for reading the text formats hexagonal Sokoban collections were
//! published in and turning them into a canonical, coordinate-typed puzzle
//! model that serializes to JSON.

pub mod cli;
pub mod dialect;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use dialect::{Conversion, Dialect};
pub use discovery::{discover, CollectionEntry, Manifest, Project, ScanResult};
pub use error::{ErrorGroup, HexError, Result, SectionError};
pub use parser::{parse_puzzle_grid, parse_text_grid, GridError, GridTokenizer, TextCursor};
pub use render::render_puzzle;
pub use types::{Collection, HexCoord, Init, Puzzle, RectCoord, Tile};
pub use validation::{validate_puzzles, Diagnostic, Severity, ValidationResult};
