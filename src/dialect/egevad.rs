//! Sven Egevad's collection. Same layout as David W. Skinner's, with
//! `"svenxNNN"` ids.

use super::{expect_banner, read_grid, read_quoted_id, read_sections, Conversion, Dialect};
use crate::error::Result;
use crate::parser::TextCursor;
use crate::types::{Collection, Puzzle};

const BANNER: &str = "; Hexobans by Sven Egevad";

pub(super) fn read(text: &[u8], collection: &Collection) -> Result<Conversion> {
    let mut cursor = TextCursor::new(text);
    expect_banner(&mut cursor, Dialect::Egevad, BANNER)?;

    Ok(read_sections(&mut cursor, Dialect::Egevad, |section| {
        let id = read_quoted_id(section)?;
        let number = id
            .strip_prefix("svenx")
            .ok_or_else(|| format!("unexpected identity {:?}", id))?;

        let mut puzzle = Puzzle::for_collection(collection);
        puzzle.identity = format!("SvenHex/{}", number);
        puzzle.name = format!("sven x {}", number);
        read_grid(section, &mut puzzle)?;
        Ok(puzzle)
    }))
}
