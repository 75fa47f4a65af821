//! Readers for the published Hexoban collection formats.
//!
//! Every collection was published in its own flavour of the same text
//! format: a file header, then one section per puzzle separated by blank
//! lines. A section carries an identifier line, a hex grid and sometimes a
//! few `Key: value` properties, before or after the grid.
//!
//! A reader fails as a whole only when the file header does not match, which
//! usually means the wrong reader was picked for the file. A broken section
//! is recorded in the [`Conversion`]'s error group and reading goes on with
//! the next one.
//!
//! # Example
//!
//! ```ignore
//! use hexaban::dialect::Dialect;
//! use hexaban::types::Collection;
//!
//! let collection = Collection::new("David W. Skinner", "http://...");
//! let conversion = Dialect::Dws.read(&std::fs::read("dwshex.hsb")?, &collection)?;
//! for error in conversion.errors.iter() {
//!     eprintln!("{}", error);
//! }
//! ```

mod dws;
mod egevad;
mod lukaszm;
mod marques;
mod peloux;
mod sever;
mod singles;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorGroup, HexError, Result};
use crate::parser::{unquote, GridTokenizer, TextCursor};
use crate::types::{Collection, Puzzle};

/// A known collection file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// David W. Skinner's hexobans
    Dws,
    /// Sven Egevad's hexobans
    Egevad,
    /// François Marques' heloban and heroban
    Marques,
    /// Erim SEVER's hex levels
    Sever,
    /// Aymeric du Peloux's HEXOCET
    Peloux,
    /// LukaszM's fancade levels
    Lukaszm,
    /// Single puzzles by mixed authors, one quoted id per section
    Singles,
}

impl Dialect {
    pub const ALL: [Dialect; 7] = [
        Dialect::Dws,
        Dialect::Egevad,
        Dialect::Marques,
        Dialect::Sever,
        Dialect::Peloux,
        Dialect::Lukaszm,
        Dialect::Singles,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Dws => "dws",
            Dialect::Egevad => "egevad",
            Dialect::Marques => "marques",
            Dialect::Sever => "sever",
            Dialect::Peloux => "peloux",
            Dialect::Lukaszm => "lukaszm",
            Dialect::Singles => "singles",
        }
    }

    /// Read a whole collection file.
    ///
    /// Puzzles come back uncentered, in file order, with the collection's
    /// author and source unless the format names its own author.
    pub fn read(self, text: &[u8], collection: &Collection) -> Result<Conversion> {
        match self {
            Dialect::Dws => dws::read(text, collection),
            Dialect::Egevad => egevad::read(text, collection),
            Dialect::Marques => marques::read(text, collection),
            Dialect::Sever => sever::read(text, collection),
            Dialect::Peloux => peloux::read(text, collection),
            Dialect::Lukaszm => lukaszm::read(text, collection),
            Dialect::Singles => singles::read(text, collection),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a reader got out of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Successfully read puzzles, in file order.
    pub puzzles: Vec<Puzzle>,
    /// Sections that could not be read.
    pub errors: ErrorGroup,
}

impl Conversion {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// The puzzles, or every section error if there was any.
    pub fn into_result(self) -> Result<Vec<Puzzle>> {
        if self.errors.is_empty() {
            Ok(self.puzzles)
        } else {
            Err(HexError::Sections(self.errors))
        }
    }
}

/// Per-section failures are plain messages; the section loop adds the
/// dialect and index.
type SectionResult<T> = std::result::Result<T, String>;

fn header_error(dialect: Dialect, message: impl Into<String>) -> HexError {
    HexError::Header {
        dialect,
        message: message.into(),
    }
}

/// Match a fixed first line.
fn expect_header_line(cursor: &mut TextCursor, dialect: Dialect, line: &str) -> Result<()> {
    if cursor.match_literal(line) && cursor.skip_line() {
        Ok(())
    } else {
        Err(header_error(
            dialect,
            format!("expected the first line to read {:?}", line),
        ))
    }
}

/// Match a fixed attribution line followed by a blank line.
fn expect_banner(cursor: &mut TextCursor, dialect: Dialect, banner: &str) -> Result<()> {
    expect_header_line(cursor, dialect, banner)?;
    if !cursor.skip_line() {
        return Err(header_error(
            dialect,
            "expected a blank line after the file header",
        ));
    }
    Ok(())
}

/// Read a `Name: value` line anchored at the cursor.
fn header_property(cursor: &mut TextCursor, name: &str) -> Option<String> {
    if cursor.match_literal(&format!("{}: ", name)) {
        Some(cursor.read_line().trim_end().to_string())
    } else {
        None
    }
}

/// Split the rest of the file into sections and read each with `read_one`.
///
/// Section indices are 1-based and count every non-blank section, so error
/// reports line up with the file even after a failure.
fn read_sections<F>(cursor: &mut TextCursor, dialect: Dialect, mut read_one: F) -> Conversion
where
    F: FnMut(&mut TextCursor) -> SectionResult<Puzzle>,
{
    let mut conversion = Conversion::default();
    let mut index = 0;

    loop {
        cursor.skip_blank_lines();
        if cursor.remaining().iter().all(u8::is_ascii_whitespace) {
            break;
        }
        index += 1;

        let mut section = TextCursor::new(cursor.take_section());
        match read_one(&mut section) {
            Ok(puzzle) => conversion.puzzles.push(puzzle),
            Err(message) => conversion.errors.push(index, dialect, message),
        }
    }

    conversion
}

/// The unread part of the current line, for error messages.
fn current_line(section: &TextCursor) -> String {
    let rest = section.remaining();
    let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
    String::from_utf8_lossy(&rest[..end]).trim_end().to_string()
}

/// Read a `"quoted"` identifier and the end of its line.
fn read_quoted_id(section: &mut TextCursor) -> SectionResult<String> {
    let id = section
        .read_quoted_string()
        .and_then(|quoted| unquote(&quoted))
        .ok_or_else(|| {
            format!(
                "expected a quoted puzzle id, found {:?}",
                current_line(section)
            )
        })?;
    if !section.skip_line() {
        return Err(format!("expected a newline after puzzle id {:?}", id));
    }
    Ok(id)
}

/// Read `<prefix><digits>` and the rest of that line, returning the digits.
fn read_numbered_id(section: &mut TextCursor, prefix: &str) -> SectionResult<String> {
    if !section.match_literal(prefix) {
        return Err(format!(
            "expected a comment line with the level id, found {:?}",
            current_line(section)
        ));
    }
    let digits = section
        .read_digits()
        .ok_or_else(|| format!("expected a level number after {:?}", prefix.trim()))?;
    section.read_line();
    Ok(digits)
}

/// A difficulty that is only kept when it is a number.
fn optional_difficulty(value: Option<String>) -> u32 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// Parse the section's grid into `puzzle`.
///
/// Properties must already be extracted; anything left besides the grid is
/// reported as an unexpected glyph, or as trailing text when it follows a
/// blank line.
fn read_grid(section: &TextCursor, puzzle: &mut Puzzle) -> SectionResult<()> {
    if !section.bytes_available(2) {
        return Err("not enough data for a puzzle definition".to_string());
    }

    let mut tokens = GridTokenizer::new(section.remaining());
    let mut tiles = Vec::new();
    for token in tokens.by_ref() {
        let token = token.map_err(|e| format!("failed to parse puzzle grid: {}", e))?;
        tiles.extend(token.glyph.tiles(token.position.to_hex()));
    }
    if tiles.is_empty() {
        return Err("no puzzle grid found".to_string());
    }

    let trailing = tokens
        .remaining()
        .split(|&b| b == b'\n')
        .map(|line| String::from_utf8_lossy(line).trim().to_string())
        .find(|line| !line.is_empty());
    if let Some(line) = trailing {
        return Err(format!("unexpected text after the puzzle grid: {:?}", line));
    }

    puzzle.add_tiles(tiles);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dialect_names_match_value_enum() {
        for dialect in Dialect::ALL {
            let value = dialect.to_possible_value().unwrap();
            assert_eq!(value.get_name(), dialect.name());
        }
    }

    #[test]
    fn test_dialect_serde_names() {
        let json = serde_json::to_string(&Dialect::Lukaszm).unwrap();
        assert_eq!(json, "\"lukaszm\"");

        let back: Dialect = serde_yaml::from_str("egevad").unwrap();
        assert_eq!(back, Dialect::Egevad);
    }

    #[test]
    fn test_read_sections_continues_after_failure() {
        let mut cursor = TextCursor::new("a\nb\n\nbad\n\nc\n\n\n");
        let conversion = read_sections(&mut cursor, Dialect::Singles, |section| {
            if section.remaining().starts_with(b"bad") {
                Err("nope".to_string())
            } else {
                Ok(Puzzle::default())
            }
        });

        assert_eq!(conversion.puzzles.len(), 2);
        assert_eq!(conversion.errors.to_string(), "singles puzzle 2: nope");
    }

    #[test]
    fn test_read_sections_ignores_trailing_whitespace() {
        let mut cursor = TextCursor::new("a\n\n  \n \t");
        let conversion = read_sections(&mut cursor, Dialect::Dws, |_| Ok(Puzzle::default()));

        assert_eq!(conversion.puzzles.len(), 1);
        assert!(conversion.is_clean());
    }

    #[test]
    fn test_into_result() {
        let clean = Conversion::default();
        assert!(clean.into_result().unwrap().is_empty());

        let mut broken = Conversion::default();
        broken.errors.push(3, Dialect::Sever, "misaligned");
        let err = broken.into_result().unwrap_err();
        assert!(matches!(err, HexError::Sections(ref group) if group.len() == 1));
    }

    #[test]
    fn test_optional_difficulty() {
        assert_eq!(optional_difficulty(Some("3".to_string())), 3);
        assert_eq!(optional_difficulty(Some(" 7 ".to_string())), 7);
        assert_eq!(optional_difficulty(Some("hard".to_string())), 0);
        assert_eq!(optional_difficulty(None), 0);
    }

    #[test]
    fn test_read_numbered_id() {
        let mut section = TextCursor::new("; Level 07 (bonus)\n# #\n");
        assert_eq!(read_numbered_id(&mut section, "; Level ").unwrap(), "07");
        assert_eq!(section.remaining(), b"# #\n");

        let mut other = TextCursor::new("; HEXOCET 01\n");
        let err = read_numbered_id(&mut other, "; Level ").unwrap_err();
        assert!(err.contains("; HEXOCET 01"), "{}", err);
    }

    #[test]
    fn test_read_quoted_id_requires_newline() {
        let mut ok = TextCursor::new("\"dws001\"\n # #\n");
        assert_eq!(read_quoted_id(&mut ok).unwrap(), "dws001");

        let mut missing = TextCursor::new("dws001\n");
        assert!(read_quoted_id(&mut missing).is_err());

        let mut trailing = TextCursor::new("\"dws001\" extra\n");
        assert!(read_quoted_id(&mut trailing).is_err());
    }

    #[test]
    fn test_header_property_is_anchored() {
        let mut cursor = TextCursor::new("Author: LukaszM  \r\n\n");
        assert_eq!(header_property(&mut cursor, "Author").as_deref(), Some("LukaszM"));

        let mut later = TextCursor::new("\nAuthor: LukaszM\n");
        assert_eq!(header_property(&mut later, "Author"), None);
    }

    #[test]
    fn test_read_grid_rejects_empty_section() {
        let mut puzzle = Puzzle::default();

        let err = read_grid(&TextCursor::new("\n"), &mut puzzle).unwrap_err();
        assert!(err.contains("not enough data"));

        let err = read_grid(&TextCursor::new("\n\n\n"), &mut puzzle).unwrap_err();
        assert_eq!(err, "no puzzle grid found");
    }

    #[test]
    fn test_read_grid_rejects_text_after_grid() {
        let mut puzzle = Puzzle::default();
        let section = TextCursor::new(" # #\n#   #\n # #\n \nGARBAGE x y z\n");

        let err = read_grid(&section, &mut puzzle).unwrap_err();
        assert_eq!(err, "unexpected text after the puzzle grid: \"GARBAGE x y z\"");
        assert!(puzzle.terrain.is_empty());
    }

    #[test]
    fn test_read_grid_allows_trailing_blank_lines() {
        let mut puzzle = Puzzle::default();
        let section = TextCursor::new(" # #\n#   #\n # #\n  \n\t\n");

        read_grid(&section, &mut puzzle).unwrap();
        assert_eq!(puzzle.terrain.len(), 1);
    }
}
