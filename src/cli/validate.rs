use std::path::PathBuf;

use clap::Args;

use crate::discovery::{load_puzzles, scan_paths};
use crate::error::{HexError, Result};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_puzzles};

/// Validate converted puzzle files
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Puzzle files or directories to scan for .json files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let scan = scan_paths(&args.paths)?;
    printer.status(
        "Checking",
        &plural(scan.total(), "puzzle file", "puzzle files"),
    );

    let puzzles = load_puzzles(&scan)?;
    let result = validate_puzzles(&puzzles);
    print_diagnostics(&result, printer);

    if result.has_errors() || (args.strict && result.has_warnings()) {
        return Err(HexError::Validation {
            message: format!(
                "{}, {}",
                plural(result.error_count(), "error", "errors"),
                plural(result.warning_count(), "warning", "warnings")
            ),
            help: args
                .strict
                .then(|| "Warnings count as errors with --strict".to_string()),
        });
    }

    Ok(())
}
