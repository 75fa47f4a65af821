//! File system scanner for converted puzzle files.
//!
//! Recursively walks directories looking for `.json` puzzle files, as
//! written by `hexaban convert`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{HexError, Result};

/// Puzzle files found below a set of paths.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered puzzle files, sorted per scanned path.
    pub puzzles: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn merge(&mut self, other: ScanResult) {
        self.puzzles.extend(other.puzzles);
    }
}

/// Whether a path looks like a converted puzzle.
pub fn is_puzzle_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Scan a directory for puzzle files.
pub fn scan_directory(root: &Path) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if is_puzzle_file(path) {
            result.puzzles.push(path.to_path_buf());
        }
    }

    result
}

/// Scan files and directories given on the command line.
///
/// Files are taken as they are, whatever their extension. A path that does
/// not exist is an error.
pub fn scan_paths(paths: &[PathBuf]) -> Result<ScanResult> {
    let mut result = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            result.merge(scan_directory(path));
        } else if path.is_file() {
            result.puzzles.push(path.clone());
        } else {
            return Err(HexError::Io {
                path: path.clone(),
                message: "No such file or directory".to_string(),
            });
        }
    }

    Ok(result)
}
