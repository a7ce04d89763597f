//! symnet — interactive force-directed visualization for symbol networks.
//!
//! Reads a JSON description of symbols (nodes with a category) and their
//! relations (undirected edges), builds a petgraph graph, assigns each node
//! a bounded-random variant of its category's base color, and emits one
//! self-contained HTML document rendered by vis-network.
//!
//! Pipeline: `data::load` → `graph::SymbolGraph::build` → `render::assemble`
//! → `render::html::emit`.

pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod render;

use std::path::{Path, PathBuf};

pub use error::VizError;

/// Run the full pipeline with the default palette and return the absolute
/// path of the written artifact.
pub fn render_network(
    input: &Path,
    output: &Path,
    variation: u8,
) -> Result<PathBuf, VizError> {
    let dataset = data::load(input)?;
    let graph = graph::SymbolGraph::build(&dataset);
    let palette = config::Palette::default();
    let mut rng = rand::thread_rng();
    let viz = render::assemble(&graph, &palette, variation, &mut rng)?;
    render::html::emit(&viz, output)
}
