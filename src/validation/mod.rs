//! Validation for converted puzzles.
//!
//! Readers only check that the text is well formed. Whether a puzzle makes
//! sense as a level (crates on the floor, as many goals as crates, unique
//! ids) is checked here. Used by `hexaban validate` and after `convert`.
//!
//! Solvability and reachability are not checked.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::{plural, Printer};
use crate::types::Puzzle;

/// Run all validation checks against a batch of puzzles.
pub fn validate_puzzles(puzzles: &[Puzzle]) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty_terrain(puzzles));
    result.merge(checks::check_outside_terrain(puzzles));
    result.merge(checks::check_counts(puzzles));
    result.merge(checks::check_duplicate_ids(puzzles));
    result.merge(checks::check_duplicate_terrain(puzzles));
    result.merge(checks::check_no_goals(puzzles));

    result
}

/// Print diagnostics and a one-line summary to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.is_error());
        match &d.puzzle {
            Some(puzzle) => eprintln!(
                "  {}[{}]: {}: {}",
                label,
                d.code,
                printer.bold(puzzle),
                d.message
            ),
            None => eprintln!("  {}[{}]: {}", label, d.code, d.message),
        }
        if let Some(help) = &d.help {
            eprintln!("    {}", printer.dim(&format!("help: {}", help)));
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!(
                "validation: {}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
        );
    } else if warnings > 0 {
        printer.warning(
            "Passed",
            &format!("validation ({})", plural(warnings, "warning", "warnings")),
        );
    } else {
        printer.success("Passed", "validation");
    }
}
