//! Project manifest (hexaban.yaml) parsing.
//!
//! The manifest lists the collection files to convert, which reader each one
//! needs and the metadata its puzzles share. Paths are relative to the
//! directory holding the manifest.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::{HexError, Result};
use crate::types::Collection;

/// Project manifest loaded from hexaban.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Root directory for converted puzzles.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Translate every puzzle so the player starts at (0, 0).
    #[serde(default = "default_center")]
    pub center: bool,

    #[serde(default)]
    pub collections: Vec<CollectionEntry>,
}

/// One source file and how to read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    /// Short name, used by `convert --only`.
    pub name: String,

    /// Author of every puzzle in the file. Empty for mixed collections.
    #[serde(default)]
    pub author: String,

    /// Where the collection was published.
    #[serde(default)]
    pub source: String,

    /// Collection text file.
    pub input: PathBuf,

    pub dialect: Dialect,

    /// Subdirectory of the manifest output for this collection's puzzles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

fn default_output() -> PathBuf {
    PathBuf::from("levels")
}

fn default_center() -> bool {
    true
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            center: default_center(),
            collections: vec![],
        }
    }
}

impl CollectionEntry {
    fn new(name: &str, author: &str, source: &str, input: &str, dialect: Dialect) -> Self {
        Self {
            name: name.to_string(),
            author: author.to_string(),
            source: source.to_string(),
            input: PathBuf::from(input),
            dialect,
            output: None,
        }
    }

    /// The metadata handed to the dialect reader.
    pub fn collection(&self) -> Collection {
        Collection::new(&self.author, &self.source)
    }
}

impl Manifest {
    /// Load manifest from a hexaban.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| HexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = serde_yaml::from_str(content).map_err(|e| HexError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check hexaban.yaml syntax".to_string()),
        })?;
        manifest.check_names()?;
        Ok(manifest)
    }

    /// The manifest `hexaban init` writes: every published collection this
    /// crate has a reader for, with the file names they are usually saved as.
    pub fn known_collections() -> Self {
        let marques = "François Marques";
        let marques_site = "http://hexoban.online.fr/";
        let mut more = CollectionEntry::new(
            "more",
            "",
            "http://users.bentonrea.com/~sasquatch/sokoban/morehex.hsb",
            "data/morehex.hsb",
            Dialect::Singles,
        );
        // Loose puzzle ids carry no collection prefix.
        more.output = Some(PathBuf::from("more"));

        Self {
            collections: vec![
                CollectionEntry::new(
                    "DWS",
                    "David W. Skinner",
                    "http://users.bentonrea.com/~sasquatch/sokoban/hex.html",
                    "data/dwshex.hsb",
                    Dialect::Dws,
                ),
                CollectionEntry::new(
                    "SvenHex",
                    "Sven Egevad",
                    "http://web.telia.com/~u40915103/welcome.htm",
                    "data/svenhex.hsb",
                    Dialect::Egevad,
                ),
                CollectionEntry::new(
                    "heloban",
                    marques,
                    marques_site,
                    "data/heloban.hsb",
                    Dialect::Marques,
                ),
                CollectionEntry::new(
                    "heroban",
                    marques,
                    marques_site,
                    "data/heroban.hsb",
                    Dialect::Marques,
                ),
                CollectionEntry::new(
                    "ErimSEVER",
                    "Erim SEVER",
                    "www.erimsever.com/sokoban/Erim_Levels/E_Hexoban.zip",
                    "data/all_E_Hex.hsb",
                    Dialect::Sever,
                ),
                CollectionEntry::new(
                    "hexocet",
                    "Aymeric du Peloux",
                    "http://membres.lycos.fr/nabokos/",
                    "data/hexocet.hsb",
                    Dialect::Peloux,
                ),
                CollectionEntry::new(
                    "LukaszM",
                    "LukaszM",
                    "https://play.fancade.com/5FA6BCFD16EB8B3B",
                    "data/lukaszm.hsb",
                    Dialect::Lukaszm,
                ),
                more,
            ],
            ..Default::default()
        }
    }

    /// Render as YAML for writing to disk.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| HexError::Config {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Collections to convert: all of them, or those named in `only`.
    pub fn select(&self, only: &[String]) -> Result<Vec<&CollectionEntry>> {
        if only.is_empty() {
            return Ok(self.collections.iter().collect());
        }

        let mut selected = Vec::new();
        for name in only {
            let entry = self
                .collections
                .iter()
                .find(|c| &c.name == name)
                .ok_or_else(|| HexError::Config {
                    message: format!("no collection named '{}' in manifest", name),
                    help: Some(format!(
                        "Known collections: {}",
                        self.collections
                            .iter()
                            .map(|c| c.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )),
                })?;
            selected.push(entry);
        }
        Ok(selected)
    }

    /// Directory a collection's puzzles are written below.
    pub fn output_dir(&self, base: &Path, entry: &CollectionEntry) -> PathBuf {
        let root = base.join(&self.output);
        match &entry.output {
            Some(sub) => root.join(sub),
            None => root,
        }
    }

    fn check_names(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.collections {
            if !seen.insert(entry.name.as_str()) {
                return Err(HexError::Config {
                    message: format!("collection '{}' is listed twice", entry.name),
                    help: Some("Collection names must be unique".to_string()),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: out").unwrap();

        assert_eq!(manifest.output, PathBuf::from("out"));
        assert!(manifest.center);
        assert!(manifest.collections.is_empty());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
output: levels
center: false
collections:
  - name: DWS
    author: David W. Skinner
    source: http://users.bentonrea.com/~sasquatch/sokoban/hex.html
    input: data/dwshex.hsb
    dialect: dws
  - name: more
    input: data/morehex.hsb
    dialect: singles
    output: more
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert!(!manifest.center);
        assert_eq!(manifest.collections.len(), 2);

        let dws = &manifest.collections[0];
        assert_eq!(dws.dialect, Dialect::Dws);
        assert_eq!(dws.input, PathBuf::from("data/dwshex.hsb"));
        assert_eq!(dws.collection(), Collection::new("David W. Skinner", &dws.source));

        let more = &manifest.collections[1];
        assert_eq!(more.author, "");
        assert_eq!(
            manifest.output_dir(Path::new("/work"), more),
            PathBuf::from("/work/levels/more")
        );
        assert_eq!(
            manifest.output_dir(Path::new("/work"), dws),
            PathBuf::from("/work/levels")
        );
    }

    #[test]
    fn test_unknown_dialect_is_a_parse_error() {
        let yaml = "collections:\n  - name: x\n    input: x.hsb\n    dialect: sokoban\n";

        assert!(matches!(Manifest::parse(yaml), Err(HexError::Parse { .. })));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let yaml = "collections:
  - name: x
    input: a.hsb
    dialect: dws
  - name: x
    input: b.hsb
    dialect: egevad
";

        assert!(matches!(Manifest::parse(yaml), Err(HexError::Config { .. })));
    }

    #[test]
    fn test_known_collections_round_trip() {
        let manifest = Manifest::known_collections();
        let yaml = manifest.to_yaml().unwrap();

        assert_eq!(Manifest::parse(&yaml).unwrap(), manifest);
        assert!(yaml.contains("dialect: lukaszm"));
    }

    #[test]
    fn test_known_collections_cover_every_dialect() {
        let manifest = Manifest::known_collections();

        for dialect in Dialect::ALL {
            assert!(
                manifest.collections.iter().any(|c| c.dialect == dialect),
                "{}",
                dialect
            );
        }
    }

    #[test]
    fn test_select() {
        let manifest = Manifest::known_collections();

        assert_eq!(manifest.select(&[]).unwrap().len(), manifest.collections.len());

        let picked = manifest
            .select(&["hexocet".to_string(), "DWS".to_string()])
            .unwrap();
        let names: Vec<_> = picked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["hexocet", "DWS"]);

        let err = manifest.select(&["nope".to_string()]).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
