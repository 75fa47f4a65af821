//! LukaszM's levels. Every section must carry a numeric `Difficulty:`.

use super::{expect_header_line, read_grid, read_numbered_id, read_sections, Conversion, Dialect};
use crate::error::Result;
use crate::parser::TextCursor;
use crate::types::{Collection, Puzzle};

const HEADER: &str = "Author: LukaszM";

pub(super) fn read(text: &[u8], collection: &Collection) -> Result<Conversion> {
    let mut cursor = TextCursor::new(text);
    expect_header_line(&mut cursor, Dialect::Lukaszm, HEADER)?;

    Ok(read_sections(&mut cursor, Dialect::Lukaszm, |section| {
        let number = read_numbered_id(section, "; Level ")?;

        let value = section
            .extract_property("Difficulty")
            .ok_or("expected a Difficulty property")?;
        let difficulty = value
            .trim()
            .parse()
            .map_err(|_| format!("failed to parse difficulty {:?}", value))?;

        let mut puzzle = Puzzle::for_collection(collection);
        puzzle.identity = format!("LukaszM/{}", number);
        puzzle.name = format!("Level {}", number);
        puzzle.difficulty = difficulty;
        read_grid(section, &mut puzzle)?;
        Ok(puzzle)
    }))
}
