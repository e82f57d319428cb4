// src/graph/stats.rs
//! Read-only degree statistics over a graph store.

use serde::Serialize;

use crate::graph::DotGraph;

/// Min/max in- and out-degree across all nodes. Only meaningful for a
/// non-empty graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DegreeSummary {
    pub min_in: usize,
    pub max_in: usize,
    pub min_out: usize,
    pub max_out: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    /// `None` for the empty graph: degree ranges over zero nodes are not
    /// applicable, never computed.
    pub degrees: Option<DegreeSummary>,
}

impl GraphStats {
    #[must_use]
    pub fn collect(graph: &DotGraph) -> Self {
        let degrees = graph.nodes().first().map(|first| {
            let mut summary = DegreeSummary {
                min_in: first.in_degree,
                max_in: first.in_degree,
                min_out: first.out_degree,
                max_out: first.out_degree,
            };
            for node in &graph.nodes()[1..] {
                summary.min_in = summary.min_in.min(node.in_degree);
                summary.max_in = summary.max_in.max(node.in_degree);
                summary.min_out = summary.min_out.min(node.out_degree);
                summary.max_out = summary.max_out.max(node.out_degree);
            }
            summary
        });
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            degrees,
        }
    }
}
