//! Symbol graph construction on top of petgraph.
//!
//! Wraps an undirected `UnGraph` and keeps an id → `NodeIndex` map so nodes
//! can be addressed by their string ids throughout the pipeline.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::data::Dataset;

/// Node data stored in the petgraph graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolNode {
    pub id: String,
    /// Category label; empty means uncategorized.
    pub kind: String,
}

/// Undirected symbol graph plus id lookup.
pub struct SymbolGraph {
    pub graph: UnGraph<SymbolNode, ()>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
}

impl SymbolGraph {
    /// Build the graph from a parsed dataset.
    ///
    /// Duplicate node ids are last-write-wins on the kind attribute.
    /// Edge endpoints that name no declared node are auto-created with an
    /// empty kind (chosen policy; see `ensure_node`), so building never fails.
    pub fn build(data: &Dataset) -> Self {
        let mut sg = Self {
            graph: UnGraph::new_undirected(),
            node_index: HashMap::new(),
        };

        for node in &data.nodes {
            sg.insert_node(&node.id, &node.kind);
        }

        // Duplicate edges are kept; they simply render twice.
        for edge in &data.edges {
            let a = sg.ensure_node(&edge.0);
            let b = sg.ensure_node(&edge.1);
            sg.graph.add_edge(a, b, ());
        }

        log::debug!(
            "built graph: {} nodes, {} edges",
            sg.node_count(),
            sg.edge_count()
        );
        sg
    }

    /// Insert a declared node, overwriting the kind if the id already exists.
    fn insert_node(&mut self, id: &str, kind: &str) -> NodeIndex {
        match self.node_index.get(id) {
            Some(&idx) => {
                self.graph[idx].kind = kind.to_string();
                idx
            }
            None => {
                let idx = self.graph.add_node(SymbolNode {
                    id: id.to_string(),
                    kind: kind.to_string(),
                });
                self.node_index.insert(id.to_string(), idx);
                idx
            }
        }
    }

    /// Get the index for `id`, creating an uncategorized node if absent.
    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        match self.node_index.get(id) {
            Some(&idx) => idx,
            None => self.insert_node(id, ""),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &SymbolNode> {
        self.graph.node_weights()
    }

    /// Edge endpoint ids in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].id.as_str(),
                self.graph[e.target()].id.as_str(),
            )
        })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
