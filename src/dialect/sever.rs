//! Erim SEVER's hex levels.
//!
//! No file header. Sections start with `; erim_hexN`, or `; erim_hex_nrN` for
//! the second series, which is numbered on from 50. Every section names its
//! author after the grid.

use super::{current_line, read_grid, read_sections, Conversion, Dialect};
use crate::error::Result;
use crate::parser::TextCursor;
use crate::types::{Collection, Puzzle};

/// The second series continues the numbering of the first 49 levels.
const SECOND_SERIES_OFFSET: u32 = 49;

pub(super) fn read(text: &[u8], collection: &Collection) -> Result<Conversion> {
    let mut cursor = TextCursor::new(text);

    Ok(read_sections(&mut cursor, Dialect::Sever, |section| {
        if !section.match_literal("; erim_hex") {
            return Err(format!(
                "expected a comment line with the level id, found {:?}",
                current_line(section)
            ));
        }
        let second_series = section.match_literal("_nr");
        let digits = section
            .read_digits()
            .ok_or("expected a level number after \"; erim_hex\"")?;
        let mut number: u32 = digits
            .parse()
            .map_err(|_| format!("level number {} is out of range", digits))?;
        if second_series {
            number = number
                .checked_add(SECOND_SERIES_OFFSET)
                .ok_or_else(|| format!("level number {} is out of range", digits))?;
        }
        section.read_line();

        let author = section
            .extract_property("Author")
            .ok_or("expected an Author property")?;
        if author != collection.author {
            return Err(format!("unexpected author {:?}", author));
        }

        let mut puzzle = Puzzle::for_collection(collection);
        puzzle.identity = format!("ErimSEVER/{:02}", number);
        puzzle.name = format!("Hex {}", number);
        read_grid(section, &mut puzzle)?;
        Ok(puzzle)
    }))
}
