//! Input dataset loading.
//!
//! The input is a UTF-8 JSON file of shape
//! `{ "nodes": [{"id": ..., "type": ...}], "edges": [[src, dst], ...] }`.
//! Loading only guarantees syntactic well-formedness; referential checks
//! happen (or deliberately don't, see `graph`) at build time.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::VizError;

/// Conventional input location relative to the working directory.
pub const DEFAULT_INPUT: &str = "data/symbols.json";

// ─── Records ─────────────────────────────────────────────────────────────────

/// One symbol as it appears in the input file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeRecord {
    /// Unique identifier; duplicates are last-write-wins at build time.
    pub id: String,
    /// Category label. Missing in the input means uncategorized.
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// One undirected relation, as a `[source, target]` id pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EdgeRecord(pub String, pub String);

/// The whole parsed input file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dataset {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

// ─── Loading ─────────────────────────────────────────────────────────────────

/// Read and parse the dataset at `path`.
///
/// A missing/unreadable file fails with [`VizError::NotFound`], unparseable
/// content with [`VizError::DataFormat`]. Both are fatal to the run.
pub fn load(path: &Path) -> Result<Dataset, VizError> {
    let text = fs::read_to_string(path).map_err(|source| VizError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset =
        serde_json::from_str(&text).map_err(|source| VizError::DataFormat { source })?;
    log::debug!("loaded dataset from {}", path.display());
    Ok(dataset)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
