//! Loose puzzles by several authors, e.g. the "more hexobans" file.
//!
//! ```text
//! ; "Tiny Ring"
//! Author: Someone
//!  # # #
//! # @ $ #
//! ```
//!
//! The quoted id doubles as the puzzle name. The author is per section and
//! falls back to the collection's.

use super::{current_line, read_grid, read_quoted_id, read_sections, Conversion, Dialect};
use crate::error::Result;
use crate::parser::TextCursor;
use crate::types::{Collection, Puzzle};

pub(super) fn read(text: &[u8], collection: &Collection) -> Result<Conversion> {
    let mut cursor = TextCursor::new(text);

    Ok(read_sections(&mut cursor, Dialect::Singles, |section| {
        if !section.match_literal("; ") {
            return Err(format!(
                "expected a comment line with the puzzle id, found {:?}",
                current_line(section)
            ));
        }
        let id = read_quoted_id(section)?;

        let mut puzzle = Puzzle::for_collection(collection);
        if let Some(author) = section.extract_property("Author") {
            puzzle.author = author;
        }
        puzzle.identity = id.clone();
        puzzle.name = id;
        read_grid(section, &mut puzzle)?;
        Ok(puzzle)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HexCoord;
    use pretty_assertions::assert_eq;

    const TEXT: &str = "; \"Tiny Ring\"
Author: Someone
   # # #
  # @ $ #
   # . #
    # #

; \"Second \\\"quoted\\\"\"
 # # #
# + $ #
 # # #
";

    fn collection() -> Collection {
        Collection::new(
            "",
            "http://users.bentonrea.com/~sasquatch/sokoban/morehex.hsb",
        )
    }

    #[test]
    fn test_read_singles() {
        let conversion = read(TEXT.as_bytes(), &collection()).unwrap();
        assert!(conversion.is_clean(), "{}", conversion.errors);

        let first = &conversion.puzzles[0];
        assert_eq!(first.identity, "Tiny Ring");
        assert_eq!(first.name, "Tiny Ring");
        assert_eq!(first.author, "Someone");
        assert_eq!(first.terrain.len(), 3);
        assert_eq!(first.init.player, HexCoord::new(3, -1));

        let second = &conversion.puzzles[1];
        assert_eq!(second.identity, "Second \"quoted\"");
        assert_eq!(second.author, "");
        assert_eq!(second.init.goals, vec![second.init.player]);
    }

    #[test]
    fn test_missing_comment_marker() {
        let text = "\"Loose\"\n # #\n#   #\n\n; \"Kept\"\n # #\n#   #\n";
        let conversion = read(text.as_bytes(), &collection()).unwrap();

        assert_eq!(conversion.puzzles.len(), 1);
        assert_eq!(conversion.puzzles[0].identity, "Kept");
        assert_eq!(
            conversion.errors.to_string(),
            "singles puzzle 1: expected a comment line with the puzzle id, found \"\\\"Loose\\\"\""
        );
    }

    #[test]
    fn test_unquoted_id_is_a_section_error() {
        let text = "; Loose\n # #\n#   #\n";
        let conversion = read(text.as_bytes(), &collection()).unwrap();

        assert!(conversion.puzzles.is_empty());
        assert!(conversion.errors.to_string().contains("quoted puzzle id"));
    }
}
