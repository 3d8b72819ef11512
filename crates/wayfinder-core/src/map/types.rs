//! Map data model: named nodes owning directed weighted edges.

use serde::{Deserialize, Serialize};

/// A directed weighted edge to a target node, referenced by name.
///
/// The reference is a name lookup, not an ownership link: the target node is
/// owned by the map's node collection. A target name that does not exist in
/// the current map is tolerated and skipped during traversal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MapEdge {
    target: String,
    distance: u64,
}

impl MapEdge {
    /// Creates an edge to `target` with the given distance.
    #[must_use]
    pub fn new(target: &str, distance: u64) -> Self {
        Self {
            target: target.to_string(),
            distance,
        }
    }

    /// Returns the target node name.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the edge distance.
    #[must_use]
    pub fn distance(&self) -> u64 {
        self.distance
    }
}

/// A named node owning its ordered outgoing edges.
///
/// Names are opaque, case-sensitive keys; no format validation is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MapNode {
    name: String,
    #[serde(default)]
    edges: Vec<MapEdge>,
}

impl MapNode {
    /// Creates a node with no outgoing edges.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            edges: Vec::new(),
        }
    }

    /// Adds a single outgoing edge (builder pattern).
    #[must_use]
    pub fn with_edge(mut self, edge: MapEdge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Replaces the outgoing edges (builder pattern).
    #[must_use]
    pub fn with_edges(mut self, edges: Vec<MapEdge>) -> Self {
        self.edges = edges;
        self
    }

    /// Returns the node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered outgoing edges.
    #[must_use]
    pub fn edges(&self) -> &[MapEdge] {
        &self.edges
    }
}
