//! David W. Skinner's collection.
//!
//! ```text
//! ; Hexobans by David W. Skinner
//!
//! "dws001"
//!     # # #
//!    #     #
//! ```

use super::{expect_banner, read_grid, read_quoted_id, read_sections, Conversion, Dialect};
use crate::error::Result;
use crate::parser::TextCursor;
use crate::types::{Collection, Puzzle};

const BANNER: &str = "; Hexobans by David W. Skinner";

pub(super) fn read(text: &[u8], collection: &Collection) -> Result<Conversion> {
    let mut cursor = TextCursor::new(text);
    expect_banner(&mut cursor, Dialect::Dws, BANNER)?;

    Ok(read_sections(&mut cursor, Dialect::Dws, |section| {
        let id = read_quoted_id(section)?;
        let number = id
            .strip_prefix("dws")
            .ok_or_else(|| format!("unexpected identity {:?}", id))?;

        let mut puzzle = Puzzle::for_collection(collection);
        puzzle.identity = format!("DWS/{}", number);
        puzzle.name = number.to_string();
        read_grid(section, &mut puzzle)?;
        Ok(puzzle)
    }))
}
