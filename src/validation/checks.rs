//! Validation checks for converted puzzles.
//!
//! Each check takes the batch of puzzles and returns a `ValidationResult`.

use std::collections::{HashMap, HashSet};

use crate::types::{HexCoord, Puzzle};

use super::warning::{Diagnostic, ValidationResult};

/// Puzzles without a single walkable cell.
pub fn check_empty_terrain(puzzles: &[Puzzle]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for puzzle in puzzles.iter().filter(|p| p.terrain.is_empty()) {
        result.push(
            Diagnostic::error("hexaban::validate::empty-terrain", "puzzle has no terrain")
                .in_puzzle(&puzzle.identity)
                .with_help("The grid was probably not recognised; check the source section"),
        );
    }

    result
}

/// Goals, crates or the player placed on a cell that is not terrain.
pub fn check_outside_terrain(puzzles: &[Puzzle]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for puzzle in puzzles.iter().filter(|p| !p.terrain.is_empty()) {
        let floor: HashSet<HexCoord> = puzzle.terrain.iter().copied().collect();

        let placed = puzzle
            .init
            .goals
            .iter()
            .map(|c| ("goal", c))
            .chain(puzzle.init.crates.iter().map(|c| ("crate", c)))
            .chain(std::iter::once(("player", &puzzle.init.player)));

        for (what, coord) in placed {
            if !floor.contains(coord) {
                result.push(
                    Diagnostic::error(
                        "hexaban::validate::outside-terrain",
                        format!("{} at {} is not on the terrain", what, coord),
                    )
                    .in_puzzle(&puzzle.identity),
                );
            }
        }
    }

    result
}

/// Every crate needs a goal and every goal a crate.
pub fn check_counts(puzzles: &[Puzzle]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for puzzle in puzzles {
        let goals = puzzle.init.goals.len();
        let crates = puzzle.init.crates.len();
        if goals != crates {
            result.push(
                Diagnostic::error(
                    "hexaban::validate::count-mismatch",
                    format!("{} goals but {} crates", goals, crates),
                )
                .in_puzzle(&puzzle.identity)
                .with_help("Each crate must have a goal to be pushed onto"),
            );
        }
    }

    result
}

/// Two puzzles in one batch with the same identity would overwrite each
/// other's output file.
pub fn check_duplicate_ids(puzzles: &[Puzzle]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for puzzle in puzzles {
        let count = seen.entry(puzzle.identity.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            result.push(
                Diagnostic::error(
                    "hexaban::validate::duplicate-id",
                    "identity is used by more than one puzzle",
                )
                .in_puzzle(&puzzle.identity),
            );
        }
    }

    result
}

/// The same floor cell listed more than once.
pub fn check_duplicate_terrain(puzzles: &[Puzzle]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for puzzle in puzzles {
        let mut seen = HashSet::new();
        let repeated: Vec<String> = puzzle
            .terrain
            .iter()
            .filter(|c| !seen.insert(**c))
            .map(|c| c.to_string())
            .collect();

        if !repeated.is_empty() {
            result.push(
                Diagnostic::warning(
                    "hexaban::validate::duplicate-terrain",
                    format!("terrain repeats {}", repeated.join(", ")),
                )
                .in_puzzle(&puzzle.identity),
            );
        }
    }

    result
}

/// A puzzle with nothing to solve.
pub fn check_no_goals(puzzles: &[Puzzle]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for puzzle in puzzles.iter().filter(|p| p.init.goals.is_empty()) {
        result.push(
            Diagnostic::warning("hexaban::validate::no-goals", "puzzle has no goals")
                .in_puzzle(&puzzle.identity),
        );
    }

    result
}
