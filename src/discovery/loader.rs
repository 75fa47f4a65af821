//! Puzzle file loading and writing.
//!
//! Converted puzzles live one per file at `<output>/<id>.json`. Ids contain
//! slashes, so each collection gets its own directory.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{HexError, Result};
use crate::types::Puzzle;

use super::scanner::ScanResult;

/// Load every scanned puzzle file.
///
/// All files are attempted; failures are reported together.
pub fn load_puzzles(scan: &ScanResult) -> Result<Vec<Puzzle>> {
    let mut puzzles = Vec::with_capacity(scan.total());
    let mut errors: Vec<String> = Vec::new();

    for path in &scan.puzzles {
        match load_puzzle(path) {
            Ok(puzzle) => puzzles.push(puzzle),
            Err(e) => errors.push(format!("{}: {}", path.display(), e)),
        }
    }

    if !errors.is_empty() {
        return Err(HexError::Parse {
            message: format!(
                "Failed to load {} file(s):\n  {}",
                errors.len(),
                errors.join("\n  ")
            ),
            help: Some("Re-run `hexaban convert` to regenerate the puzzle files".to_string()),
        });
    }

    Ok(puzzles)
}

/// Load a single puzzle from JSON.
pub fn load_puzzle(path: &Path) -> Result<Puzzle> {
    let content = fs::read_to_string(path).map_err(|e| HexError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| HexError::Parse {
        message: format!("invalid puzzle JSON: {}", e),
        help: None,
    })
}

/// Read a collection text file as raw bytes.
pub fn read_collection(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| HexError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read collection: {}", e),
    })
}

/// Where a puzzle with this identity is written below `dir`.
///
/// Identities become relative paths, so anything that would escape `dir`
/// is refused.
pub fn puzzle_path(dir: &Path, identity: &str) -> Result<PathBuf> {
    let relative = Path::new(identity);
    let escapes = identity.is_empty()
        || relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));

    if escapes {
        return Err(HexError::Validation {
            message: format!("puzzle id '{}' cannot be used as a file path", identity),
            help: Some("Ids must be relative and must not contain '..'".to_string()),
        });
    }

    let mut path = dir.join(relative);
    let mut file_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    file_name.push(".json");
    path.set_file_name(file_name);
    Ok(path)
}

/// Write a puzzle as pretty JSON, creating directories as needed.
pub fn write_puzzle(dir: &Path, puzzle: &Puzzle) -> Result<PathBuf> {
    let path = puzzle_path(dir, &puzzle.identity)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| HexError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    let mut json = serde_json::to_string_pretty(puzzle).map_err(|e| HexError::Parse {
        message: format!("Failed to encode {}: {}", puzzle.identity, e),
        help: None,
    })?;
    json.push('\n');

    fs::write(&path, json).map_err(|e| HexError::Io {
        path: path.clone(),
        message: e.to_string(),
    })?;

    Ok(path)
}
