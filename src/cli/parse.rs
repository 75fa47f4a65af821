//! Parse command implementation.
//!
//! Reads one collection file without a manifest and prints its puzzles as a
//! JSON array on stdout.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::dialect::Dialect;
use crate::discovery::read_collection;
use crate::error::{HexError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::{Collection, Puzzle};

/// Parse a single collection file and print its puzzles as JSON
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Collection text file
    pub file: PathBuf,

    /// Format of the file
    #[arg(long, short, value_enum)]
    pub dialect: Dialect,

    /// Author of the collection
    #[arg(long, default_value = "")]
    pub author: String,

    /// Where the collection was published
    #[arg(long, default_value = "")]
    pub source: String,

    /// Keep source coordinates instead of centering on the player
    #[arg(long)]
    pub no_center: bool,
}

pub fn run(args: ParseArgs, printer: &Printer) -> Result<()> {
    printer.status(
        "Parsing",
        &format!("{} ({})", display_path(&args.file), args.dialect),
    );

    let text = read_collection(&args.file)?;
    let collection = Collection::new(&args.author, &args.source);
    let conversion = args.dialect.read(&text, &collection)?;

    let puzzles: Vec<Puzzle> = if args.no_center {
        conversion.puzzles
    } else {
        conversion.puzzles.iter().map(Puzzle::centered).collect()
    };

    let json = to_json(&puzzles)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;

    printer.success("Parsed", &plural(puzzles.len(), "puzzle", "puzzles"));

    if conversion.errors.is_empty() {
        Ok(())
    } else {
        Err(HexError::Sections(conversion.errors))
    }
}

/// Pretty JSON array of puzzles.
pub fn to_json(puzzles: &[Puzzle]) -> Result<String> {
    serde_json::to_string_pretty(puzzles).map_err(|e| HexError::Parse {
        message: format!("Failed to encode puzzles: {}", e),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_puzzle_grid;

    #[test]
    fn test_to_json_array() {
        let mut puzzle = parse_puzzle_grid(b"  # #\n # @ #\n  # #\n").unwrap();
        puzzle.identity = "more/x".to_string();

        let json = to_json(&[puzzle.clone(), puzzle]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["id"], "more/x");
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
