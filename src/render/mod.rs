//! Visualization assembly.
//!
//! Walks the symbol graph and produces the renderable node/edge sets the
//! rendering collaborator expects, with derived per-node colors and uniform
//! edge styling, plus the static layout configuration.

pub mod html;

use rand::Rng;
use serde::Serialize;

use crate::color;
use crate::config::{LayoutConfig, Palette};
use crate::error::VizError;
use crate::graph::SymbolGraph;

/// Uniform edge color; edges are not derived per-edge.
pub const EDGE_COLOR: &str = "#888888";
/// Uniform edge width.
pub const EDGE_WIDTH: f64 = 0.5;

/// One renderable node: `{id, label, color, title}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualNode {
    pub id: String,
    pub label: String,
    pub color: String,
    /// Hover tooltip, "<id> (<kind>)".
    pub title: String,
}

/// One renderable edge: `{source, target, color, width}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualEdge {
    pub source: String,
    pub target: String,
    pub color: String,
    pub width: f64,
}

/// The fully assembled visualization, ready for emission.
#[derive(Debug, Clone)]
pub struct Visualization {
    pub nodes: Vec<VisualNode>,
    pub edges: Vec<VisualEdge>,
    pub layout: LayoutConfig,
}

/// Assemble the renderable form of `graph`.
///
/// Node colors come from the palette base for the node's kind (default base
/// for unknown kinds) nudged by [`color::derive`]. Fails only if a palette
/// entry is malformed.
pub fn assemble<R: Rng>(
    graph: &SymbolGraph,
    palette: &Palette,
    variation: u8,
    rng: &mut R,
) -> Result<Visualization, VizError> {
    let mut nodes = Vec::with_capacity(graph.node_count());
    for node in graph.nodes() {
        let base = palette.base_for(&node.kind);
        let derived = color::derive(base, variation, color::DEFAULT_ALPHA, rng)?;
        nodes.push(VisualNode {
            id: node.id.clone(),
            label: node.id.clone(),
            color: derived,
            title: format!("{} ({})", node.id, node.kind),
        });
    }

    let edges = graph
        .edges()
        .map(|(source, target)| VisualEdge {
            source: source.to_string(),
            target: target.to_string(),
            color: EDGE_COLOR.to_string(),
            width: EDGE_WIDTH,
        })
        .collect();

    Ok(Visualization {
        nodes,
        edges,
        layout: LayoutConfig::default(),
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
