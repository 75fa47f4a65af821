//! File discovery for hexaban projects.
//!
//! A project is a directory with a `hexaban.yaml` manifest naming the
//! collection files to convert. Converted puzzles are written below the
//! manifest's output directory, one JSON file each, and found again by
//! scanning for `.json` files.
//!
//! # Example
//!
//! ```ignore
//! use hexaban::discovery::{discover, load_puzzles, scan_paths};
//!
//! let project = discover("./my-levels")?;
//! println!("{} collections", project.manifest.collections.len());
//!
//! let scan = scan_paths(&[project.output_root()])?;
//! let puzzles = load_puzzles(&scan)?;
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::{HexError, Result};

pub use loader::{load_puzzle, load_puzzles, puzzle_path, read_collection, write_puzzle};
pub use manifest::{CollectionEntry, Manifest};
pub use scanner::{is_puzzle_file, scan_directory, scan_paths, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "hexaban.yaml";

/// A loaded project: its manifest and the directory paths are relative to.
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub manifest: Manifest,
}

impl Project {
    /// Absolute (or cwd-relative) path of a collection's input file.
    pub fn input_path(&self, entry: &CollectionEntry) -> PathBuf {
        self.root.join(&entry.input)
    }

    /// Directory a collection's puzzles are written below.
    pub fn output_dir(&self, entry: &CollectionEntry) -> PathBuf {
        self.manifest.output_dir(&self.root, entry)
    }

    /// Root of all converted output.
    pub fn output_root(&self) -> PathBuf {
        self.root.join(&self.manifest.output)
    }
}

/// Load the project in `root`.
///
/// Unlike asset scanning, conversion needs a manifest; without one there is
/// nothing to tell which dialect a file is in.
pub fn discover(root: impl AsRef<Path>) -> Result<Project> {
    let root = root.as_ref().to_path_buf();
    let manifest_path = root.join(MANIFEST_FILENAME);

    if !manifest_path.exists() {
        return Err(HexError::Config {
            message: format!("no {} found in {}", MANIFEST_FILENAME, root.display()),
            help: Some("Run `hexaban init` to create one".to_string()),
        });
    }

    discover_manifest(&manifest_path)
}

/// Load a project from an explicit manifest path.
pub fn discover_manifest(manifest_path: &Path) -> Result<Project> {
    let manifest = Manifest::load(manifest_path)?;
    let root = manifest_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(Project { root, manifest })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();

        let err = discover(dir.path()).unwrap_err();
        assert!(matches!(err, HexError::Config { .. }));
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILENAME),
            r#"
output: out
collections:
  - name: hexocet
    author: Aymeric du Peloux
    input: data/hexocet.hsb
    dialect: peloux
"#,
        )
        .unwrap();

        let project = discover(dir.path()).unwrap();
        let entry = &project.manifest.collections[0];

        assert_eq!(project.input_path(entry), dir.path().join("data/hexocet.hsb"));
        assert_eq!(project.output_dir(entry), dir.path().join("out"));
        assert_eq!(project.output_root(), dir.path().join("out"));
    }

    #[test]
    fn test_project_relative_to_current_directory() {
        let project = Project {
            root: PathBuf::from(""),
            manifest: Manifest::default(),
        };

        assert_eq!(project.output_root(), PathBuf::from("levels"));
    }
}
