//! Artifact emission: a self-contained interactive HTML document.
//!
//! The document drives vis-network with the assembled node/edge sets and the
//! physics block embedded as JSON. Writing is all-or-nothing: the full
//! document is rendered to a string first, then written in one call.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::VizError;
use crate::render::Visualization;

/// Conventional output filename in the working directory.
pub const DEFAULT_OUTPUT: &str = "symbol_network.html";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Symbol Network</title>
<script src="https://unpkg.com/vis-network/standalone/umd/vis-network.min.js"></script>
<style>
  html, body { margin: 0; background-color: #222222; color: white; }
  #network { width: 100%; height: 750px; }
</style>
</head>
<body>
<div id="network"></div>
<script>
  const nodes = new vis.DataSet(__NODES__);
  // vis-network wants {from, to} endpoints.
  const edges = new vis.DataSet(__EDGES__.map(function (e) {
    return { from: e.source, to: e.target, color: e.color, width: e.width };
  }));
  const container = document.getElementById("network");
  const options = {
    nodes: { font: { color: "white" } },
    physics: __PHYSICS__
  };
  new vis.Network(container, { nodes: nodes, edges: edges }, options);
</script>
</body>
</html>
"#;

/// Render the full document text.
pub fn render_document(viz: &Visualization) -> Result<String, VizError> {
    let to_json = |r: Result<String, serde_json::Error>| {
        r.map_err(|source| VizError::Render { source })
    };
    let nodes = to_json(serde_json::to_string(&viz.nodes))?;
    let edges = to_json(serde_json::to_string(&viz.edges))?;
    let physics = to_json(serde_json::to_string(&viz.layout))?;

    Ok(TEMPLATE
        .replace("__NODES__", &nodes)
        .replace("__EDGES__", &edges)
        .replace("__PHYSICS__", &physics))
}

/// Write the visualization to `out_path` and return its absolute path.
pub fn emit(viz: &Visualization, out_path: &Path) -> Result<PathBuf, VizError> {
    let doc = render_document(viz)?;
    let write_err = |source| VizError::ArtifactWrite {
        path: out_path.to_path_buf(),
        source,
    };
    fs::write(out_path, &doc).map_err(write_err)?;
    let abs = out_path.canonicalize().map_err(write_err)?;
    log::debug!("artifact written to {}", abs.display());
    Ok(abs)
}

/// Build a `file://` URI from an absolute path, normalizing separators so the
/// result works on Windows paths like `C:\...` too.
pub fn file_uri(path: &Path) -> String {
    let mut uri = path.to_string_lossy().replace('\\', "/");
    if !uri.starts_with('/') {
        uri.insert(0, '/');
    }
    format!("file://{uri}")
}

/// Open the artifact in the default browser. Best-effort: callers log the
/// error and continue, they never fail the run on it.
pub fn open_in_browser(path: &Path) -> Result<(), VizError> {
    open::that(file_uri(path)).map_err(|source| VizError::BrowserLaunch { source })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
