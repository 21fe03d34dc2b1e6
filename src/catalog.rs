//! The `data.json` catalog document.
//!
//! The catalog is a JSON object whose `photo` array this tool owns. Every
//! other top-level field (`video`, and anything future) is opaque: it is
//! carried through a load/save cycle unchanged via a flattened map.
//!
//! Load and save bracket the run as a single read-modify-write: the document
//! is loaded once, the merged result is computed immutably, and one write
//! persists it. A missing file is an empty catalog; an unparsable file is
//! fatal before any candidate work happens.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode catalog: {0}")]
    Encode(serde_json::Error),
}

/// One album record in the gallery index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique within the catalog; new ids continue past the existing maximum.
    pub id: u64,
    pub year: String,
    /// Two-digit.
    pub month: String,
    /// Two-digit.
    pub day: String,
    /// Album display name (the folder name).
    pub name: String,
    /// Deep link into the folder on the share.
    pub link: String,
    /// `dd.mm.yyyy`, fully zero-padded.
    pub date: String,
    pub common: bool,
    /// `[lat, lon]`.
    pub coordinates: [f64; 2],
}

/// The whole document: the `photo` array plus passthrough fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub photo: Vec<CatalogEntry>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl Catalog {
    /// Empty catalog shape used when no file exists yet.
    fn empty() -> Self {
        let mut rest = serde_json::Map::new();
        rest.insert("video".to_string(), serde_json::Value::Array(Vec::new()));
        Catalog {
            photo: Vec::new(),
            rest,
        }
    }
}

/// Load the catalog, treating an absent file as empty.
pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Ok(Catalog::empty());
    }
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| CatalogError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist the full document in one write: two-space pretty JSON with a
/// trailing newline, matching the hand-maintained file's formatting.
pub fn save(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(catalog).map_err(CatalogError::Encode)?;
    fs::write(path, json + "\n")?;
    Ok(())
}
