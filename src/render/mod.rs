//! Rendering module for hexaban.
//!
//! Puzzles are drawn back into the text grid format they are read from,
//! for inspection and for writing collections out again.

mod text;

pub use text::render_puzzle;
