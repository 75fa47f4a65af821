//! Aymeric du Peloux's HEXOCET collection.
//!
//! An `Author:` header, then `; HEXOCET NN` sections with the grid followed by
//! `Title`, `Difficulty`, `Created`, `Hint` and `Comment` properties.

use super::{
    header_error, header_property, optional_difficulty, read_grid, read_numbered_id,
    read_sections, Conversion, Dialect,
};
use crate::error::Result;
use crate::parser::TextCursor;
use crate::types::{Collection, Puzzle};

const AUTHOR: &str = "Aymeric du Peloux";

/// Properties that may follow a grid and carry nothing we keep.
const IGNORED_PROPERTIES: [&str; 3] = ["Created", "Hint", "Comment"];

pub(super) fn read(text: &[u8], collection: &Collection) -> Result<Conversion> {
    let mut cursor = TextCursor::new(text);

    match header_property(&mut cursor, "Author") {
        Some(author) if author == AUTHOR => {}
        Some(author) => {
            return Err(header_error(
                Dialect::Peloux,
                format!("expected author {:?} but found {:?}", AUTHOR, author),
            ))
        }
        None => return Err(header_error(Dialect::Peloux, "expected an Author property")),
    }

    Ok(read_sections(&mut cursor, Dialect::Peloux, |section| {
        let number = read_numbered_id(section, "; HEXOCET ")?;

        let mut puzzle = Puzzle::for_collection(collection);
        puzzle.author = AUTHOR.to_string();
        puzzle.identity = format!("hexocet/{}", number);
        puzzle.name = section
            .extract_property("Title")
            .unwrap_or_else(|| format!("HEXOCET {}", number));
        puzzle.difficulty = optional_difficulty(section.extract_property("Difficulty"));
        for name in IGNORED_PROPERTIES {
            section.extract_property(name);
        }
        read_grid(section, &mut puzzle)?;
        Ok(puzzle)
    }))
}
