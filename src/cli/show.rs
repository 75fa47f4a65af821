//! Show command implementation.
//!
//! Draws converted puzzles back as text grids.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::load_puzzle;
use crate::error::Result;
use crate::output::Printer;
use crate::render::render_puzzle;

/// Print converted puzzles as text grids
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Puzzle JSON files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: ShowArgs, printer: &Printer) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    for (n, file) in args.files.iter().enumerate() {
        let puzzle = load_puzzle(file)?;
        let grid = render_puzzle(&puzzle)?;

        if n > 0 {
            writeln!(stdout)?;
        }
        writeln!(stdout, "; {}", puzzle.identity)?;
        write!(stdout, "{}", grid)?;

        printer.info("Showing", &puzzle.summary());
    }

    Ok(())
}
