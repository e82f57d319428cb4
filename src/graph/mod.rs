// src/graph/mod.rs
//! Directed graph store: index-addressed nodes, ordered adjacency, degree counters.
//!
//! Nodes are assigned stable integer indices at insertion time; identifier
//! lookup goes through a separate map. Adjacency is a per-node ordered set of
//! out-neighbor indices, so `out_neighbors` always yields ascending indices.

pub mod parser;
pub mod stats;

use std::collections::{BTreeSet, HashMap};

use crate::error::{DotRankError, Result};

/// Default node capacity when none is configured.
pub const DEFAULT_MAX_NODES: usize = 1000;

/// A single node: unique identifier plus degree counters maintained by
/// [`DotGraph::add_edge`].
#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub in_degree: usize,
    pub out_degree: usize,
}

/// The graph store. Immutable after ingestion; simulators only read it.
#[derive(Debug, Clone)]
pub struct DotGraph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    out: Vec<BTreeSet<usize>>,
    edge_count: usize,
    capacity: usize,
}

impl DotGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_NODES)
    }

    /// Creates an empty graph that will hold at most `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            out: Vec::new(),
            edge_count: 0,
            capacity,
        }
    }

    /// Returns the index of `id`, allocating a fresh node if it is unknown.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if a new node would overflow the configured
    /// capacity.
    pub fn add_node(&mut self, id: &str) -> Result<usize> {
        if let Some(&i) = self.index.get(id) {
            return Ok(i);
        }
        if self.nodes.len() >= self.capacity {
            return Err(DotRankError::CapacityExceeded {
                limit: self.capacity,
            });
        }
        let i = self.nodes.len();
        self.nodes.push(Node {
            id: id.to_string(),
            in_degree: 0,
            out_degree: 0,
        });
        self.index.insert(id.to_string(), i);
        self.out.push(BTreeSet::new());
        Ok(i)
    }

    /// Inserts the edge (source, target), creating endpoints as needed.
    /// Re-adding an existing edge is a silent no-op: degrees and the edge
    /// count each account for a pair exactly once.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if either endpoint would overflow capacity.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Result<()> {
        let s = self.add_node(source)?;
        let t = self.add_node(target)?;
        if self.out[s].insert(t) {
            self.nodes[s].out_degree += 1;
            self.nodes[t].in_degree += 1;
            self.edge_count += 1;
        }
        Ok(())
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn has_edge(&self, source: usize, target: usize) -> bool {
        self.out.get(source).is_some_and(|set| set.contains(&target))
    }

    #[must_use]
    pub fn out_degree(&self, index: usize) -> usize {
        self.nodes[index].out_degree
    }

    /// Out-neighbors of a node in ascending index order.
    pub fn out_neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.out[index].iter().copied()
    }
}

impl Default for DotGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DotRankError;

    #[test]
    fn add_node_returns_existing_index() {
        let mut g = DotGraph::new();
        let a = g.add_node("A").unwrap();
        let b = g.add_node("B").unwrap();
        assert_eq!(g.add_node("A").unwrap(), a);
        assert_ne!(a, b);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn duplicate_edge_is_idempotent() {
        let mut g = DotGraph::new();
        g.add_edge("A", "B").unwrap();
        g.add_edge("A", "B").unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.node(0).out_degree, 1);
        assert_eq!(g.node(1).in_degree, 1);
        assert_eq!(g.node(0).in_degree, 0);
    }

    #[test]
    fn degree_conservation() {
        let mut g = DotGraph::new();
        g.add_edge("A", "B").unwrap();
        g.add_edge("B", "C").unwrap();
        g.add_edge("C", "A").unwrap();
        g.add_edge("A", "C").unwrap();
        let out_sum: usize = g.nodes().iter().map(|n| n.out_degree).sum();
        let in_sum: usize = g.nodes().iter().map(|n| n.in_degree).sum();
        assert_eq!(out_sum, g.edge_count());
        assert_eq!(in_sum, g.edge_count());
    }

    #[test]
    fn capacity_is_enforced() {
        let mut g = DotGraph::with_capacity(2);
        g.add_node("A").unwrap();
        g.add_node("B").unwrap();
        let err = g.add_node("C").unwrap_err();
        assert!(matches!(err, DotRankError::CapacityExceeded { limit: 2 }));
        // Existing nodes are still resolvable at full capacity.
        assert_eq!(g.add_node("A").unwrap(), 0);
    }

    #[test]
    fn out_neighbors_are_index_ordered() {
        let mut g = DotGraph::new();
        g.add_edge("A", "C").unwrap();
        g.add_edge("A", "B").unwrap();
        g.add_edge("A", "D").unwrap();
        let neighbors: Vec<usize> = g.out_neighbors(0).collect();
        let mut sorted = neighbors.clone();
        sorted.sort_unstable();
        assert_eq!(neighbors, sorted);
        assert_eq!(neighbors.len(), 3);
    }
}
