//! Init command implementation.
//!
//! Generates a `hexaban.yaml` manifest listing the known published
//! collections.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{Manifest, MANIFEST_FILENAME};
use crate::error::{HexError, Result};
use crate::output::{display_path, plural, Printer};

const MANIFEST_HEADER: &str = "\
# hexaban project manifest
#
# Each collection names a text file and the dialect it is written in.
# Paths are relative to this file. Run `hexaban convert` to write JSON.
";

/// Initialize a hexaban project (generates hexaban.yaml)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing hexaban.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(HexError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let manifest = Manifest::known_collections();
    let yaml = format!("{}\n{}", MANIFEST_HEADER, manifest.to_yaml()?);

    fs::write(&manifest_path, &yaml).map_err(|e| HexError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    let missing: Vec<String> = manifest
        .collections
        .iter()
        .filter(|c| !args.path.join(&c.input).exists())
        .map(|c| c.input.display().to_string())
        .collect();
    if !missing.is_empty() {
        printer.info("Missing", &missing.join(", "));
    }

    printer.success(
        "Created",
        &format!(
            "{} ({}) in {}",
            MANIFEST_FILENAME,
            plural(manifest.collections.len(), "collection", "collections"),
            display_path(&args.path)
        ),
    );

    Ok(())
}
