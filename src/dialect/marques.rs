//! François Marques' collections (heloban, heroban).
//!
//! The file opens with `Author:` and `Collection:` properties. Each section is
//! a bare grid followed by `Title:`, `Date:` and an optional `Difficulty:`.

use super::{
    header_error, header_property, optional_difficulty, read_grid, read_sections, Conversion,
    Dialect,
};
use crate::error::Result;
use crate::parser::TextCursor;
use crate::types::{Collection, Puzzle};

pub(super) fn read(text: &[u8], collection: &Collection) -> Result<Conversion> {
    let mut cursor = TextCursor::new(text);

    let author = header_property(&mut cursor, "Author")
        .ok_or_else(|| header_error(Dialect::Marques, "expected an Author property"))?;
    if author != collection.author {
        return Err(header_error(
            Dialect::Marques,
            format!(
                "expected author {:?} but found {:?}",
                collection.author, author
            ),
        ));
    }
    let name = header_property(&mut cursor, "Collection")
        .filter(|name| !name.is_empty())
        .ok_or_else(|| header_error(Dialect::Marques, "expected a Collection property"))?;

    Ok(read_sections(&mut cursor, Dialect::Marques, |section| {
        let title = section
            .extract_property("Title")
            .ok_or("expected a Title property")?;
        section.extract_property("Date");
        let difficulty = optional_difficulty(section.extract_property("Difficulty"));

        let mut puzzle = Puzzle::for_collection(collection);
        puzzle.identity = format!("{}/{}", name, title);
        puzzle.name = title;
        puzzle.difficulty = difficulty;
        read_grid(section, &mut puzzle)?;
        Ok(puzzle)
    }))
}
