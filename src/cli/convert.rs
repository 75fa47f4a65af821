//! Convert command implementation.
//!
//! Reads every collection named in hexaban.yaml with its dialect reader and
//! writes one JSON file per puzzle.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{
    discover_manifest, read_collection, write_puzzle, CollectionEntry, Project,
};
use crate::error::{ErrorGroup, HexError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::Puzzle;
use crate::validation::{print_diagnostics, validate_puzzles};

/// Convert the collections listed in hexaban.yaml to JSON
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Manifest to read
    #[arg(long, short, default_value = "hexaban.yaml")]
    pub manifest: PathBuf,

    /// Only convert these collections (repeatable)
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,

    /// Keep source coordinates instead of centering on the player
    #[arg(long)]
    pub no_center: bool,

    /// Read and validate without writing any files
    #[arg(long)]
    pub dry_run: bool,
}

/// What a convert run produced.
#[derive(Debug, Default)]
pub struct ConvertReport {
    pub puzzles: Vec<Puzzle>,
    pub written: Vec<PathBuf>,
    pub errors: ErrorGroup,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let project = discover_manifest(&args.manifest)?;
    let report = convert_project(&project, &args, printer)?;

    let validation = validate_puzzles(&report.puzzles);
    print_diagnostics(&validation, printer);

    if !report.errors.is_empty() {
        return Err(HexError::Sections(report.errors));
    }

    if validation.has_errors() {
        return Err(HexError::Validation {
            message: format!(
                "{} in converted puzzles",
                plural(validation.error_count(), "error", "errors")
            ),
            help: Some("Fix the source sections listed above".to_string()),
        });
    }

    Ok(())
}

/// Convert the selected collections of a project.
///
/// Section failures are collected in the report; I/O and header errors
/// stop the run.
pub fn convert_project(
    project: &Project,
    args: &ConvertArgs,
    printer: &Printer,
) -> Result<ConvertReport> {
    let center = project.manifest.center && !args.no_center;
    let mut report = ConvertReport::default();

    let entries = project.manifest.select(&args.only)?;
    if entries.is_empty() {
        printer.warning("Skipping", "manifest lists no collections");
        return Ok(report);
    }

    for entry in entries {
        let puzzles = convert_collection(project, entry, center, &mut report.errors, printer)?;

        let out_dir = project.output_dir(entry);
        if !args.dry_run {
            for puzzle in &puzzles {
                report.written.push(write_puzzle(&out_dir, puzzle)?);
            }
        }

        printer.success(
            "Converted",
            &format!(
                "{} ({}) to {}",
                entry.name,
                plural(puzzles.len(), "puzzle", "puzzles"),
                printer.cyan(&display_path(&out_dir))
            ),
        );
        report.puzzles.extend(puzzles);
    }

    Ok(report)
}

fn convert_collection(
    project: &Project,
    entry: &CollectionEntry,
    center: bool,
    errors: &mut ErrorGroup,
    printer: &Printer,
) -> Result<Vec<Puzzle>> {
    let input = project.input_path(entry);
    printer.status(
        "Reading",
        &format!("{} ({})", display_path(&input), entry.dialect),
    );

    let text = read_collection(&input)?;
    let conversion = entry.dialect.read(&text, &entry.collection())?;

    for error in conversion.errors.iter() {
        printer.error("Failed", &format!("{}: {}", entry.name, error));
    }
    errors.append(conversion.errors);

    let puzzles = if center {
        conversion.puzzles.iter().map(Puzzle::centered).collect()
    } else {
        conversion.puzzles
    };

    Ok(puzzles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{load_puzzle, MANIFEST_FILENAME};
    use crate::types::HexCoord;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const DWS: &str = "; Hexobans by David W. Skinner

\"dws001\"
    # # #
   #     #
    #     #
   #   . #
  #   .   #
 #   $ $   #
  # # # *   #
     # @   #
      # # #
";

    const LUKASZM: &str = "Author: LukaszM

; Level 01
  # # #
 # @ $ . #
  # # #
Difficulty: 2

; Level 02
  # # #
 # @ $ . #
  # # #
";

    fn project(dir: &Path, manifest: &str) -> Project {
        fs::create_dir_all(dir.join("data")).unwrap();
        fs::write(dir.join("data/dwshex.hsb"), DWS).unwrap();
        fs::write(dir.join("data/lukaszm.hsb"), LUKASZM).unwrap();
        fs::write(dir.join(MANIFEST_FILENAME), manifest).unwrap();
        discover_manifest(&dir.join(MANIFEST_FILENAME)).unwrap()
    }

    fn args() -> ConvertArgs {
        ConvertArgs {
            manifest: PathBuf::from(MANIFEST_FILENAME),
            only: vec![],
            no_center: false,
            dry_run: false,
        }
    }

    const MANIFEST: &str = "
output: levels
collections:
  - name: DWS
    author: David W. Skinner
    source: http://users.bentonrea.com/~sasquatch/sokoban/hex.html
    input: data/dwshex.hsb
    dialect: dws
  - name: LukaszM
    author: LukaszM
    input: data/lukaszm.hsb
    dialect: lukaszm
";

    #[test]
    fn test_convert_writes_centered_puzzles() {
        let dir = tempdir().unwrap();
        let project = project(dir.path(), MANIFEST);

        let report = convert_project(&project, &args(), &Printer::plain().quiet(true)).unwrap();

        assert_eq!(report.puzzles.len(), 2);
        assert_eq!(
            report.written,
            vec![
                dir.path().join("levels/DWS/001.json"),
                dir.path().join("levels/LukaszM/01.json"),
            ]
        );

        let dws = load_puzzle(&report.written[0]).unwrap();
        assert_eq!(dws.identity, "DWS/001");
        assert_eq!(dws.init.player, HexCoord::ORIGIN);
        assert_eq!(dws.author, "David W. Skinner");
    }

    #[test]
    fn test_convert_collects_section_errors() {
        let dir = tempdir().unwrap();
        let project = project(dir.path(), MANIFEST);

        let report = convert_project(&project, &args(), &Printer::plain().quiet(true)).unwrap();

        assert_eq!(report.errors.len(), 1);
        let error = report.errors.iter().next().unwrap();
        assert_eq!(error.index, 2);
        assert!(error.message.contains("Difficulty"), "{}", error.message);
    }

    #[test]
    fn test_convert_only_and_no_center() {
        let dir = tempdir().unwrap();
        let project = project(dir.path(), MANIFEST);
        let args = ConvertArgs {
            only: vec!["DWS".to_string()],
            no_center: true,
            dry_run: true,
            ..args()
        };

        let report = convert_project(&project, &args, &Printer::plain().quiet(true)).unwrap();

        assert_eq!(report.puzzles.len(), 1);
        assert!(report.written.is_empty());
        assert!(!dir.path().join("levels").exists());
        assert_eq!(report.puzzles[0].init.player, HexCoord::new(7, 0));
    }

    #[test]
    fn test_convert_header_mismatch_is_fatal() {
        let dir = tempdir().unwrap();
        let project = project(
            dir.path(),
            "
collections:
  - name: wrong
    input: data/lukaszm.hsb
    dialect: dws
",
        );

        let err = convert_project(&project, &args(), &Printer::plain().quiet(true)).unwrap_err();
        assert!(matches!(err, HexError::Header { .. }));
    }

    #[test]
    fn test_convert_missing_input() {
        let dir = tempdir().unwrap();
        let project = project(
            dir.path(),
            "
collections:
  - name: gone
    input: data/missing.hsb
    dialect: singles
",
        );

        let err = convert_project(&project, &args(), &Printer::plain().quiet(true)).unwrap_err();
        assert!(matches!(err, HexError::Io { .. }));
    }
}
