//! Snapshot store for the current map.
//!
//! The single shared slot holds an atomically swapped immutable snapshot
//! (`arc-swap`). Readers grab a pointer to the snapshot and work on it
//! privately, so no lock is held during route computation and no reader can
//! observe a map mid-replacement.

use std::sync::Arc;

use arc_swap::ArcSwap;
use indexmap::IndexMap;

use super::route::{self, Route};
use super::types::MapNode;
use crate::error::Result;

/// An immutable point-in-time copy of the map, keyed by node name in
/// insertion order.
#[derive(Debug, Default)]
pub struct MapSnapshot {
    nodes: IndexMap<String, MapNode>,
}

impl MapSnapshot {
    fn from_nodes(nodes: Vec<MapNode>) -> Self {
        let mut map = IndexMap::with_capacity(nodes.len());
        for node in nodes {
            // Duplicate names: last write wins.
            map.insert(node.name().to_string(), node);
        }
        Self { nodes: map }
    }

    /// Looks up a node by name.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&MapNode> {
        self.nodes.get(name)
    }

    /// Returns true if a node with the given name exists.
    #[must_use]
    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the snapshot holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &MapNode> {
        self.nodes.values()
    }
}

/// Owns the current map and serializes replacement against concurrent reads.
///
/// `set_map` swaps the whole snapshot in one atomic store; `map` and
/// `shortest_route` operate on an independent point-in-time snapshot. Under
/// concurrent replacement every caller sees exactly one complete map, never
/// a mixture of two.
#[derive(Debug)]
pub struct MapStore {
    current: ArcSwap<MapSnapshot>,
}

impl Default for MapStore {
    fn default() -> Self {
        Self {
            current: ArcSwap::from_pointee(MapSnapshot::default()),
        }
    }
}

impl MapStore {
    /// Creates a store with an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire map with the given nodes.
    ///
    /// The last concurrent call to complete wins; there is no merging. Edge
    /// targets and weights are not validated, and duplicate node names
    /// resolve to the last occurrence.
    pub fn set_map(&self, nodes: Vec<MapNode>) {
        let snapshot = MapSnapshot::from_nodes(nodes);
        tracing::info!(nodes = snapshot.node_count(), "map replaced");
        self.current.store(Arc::new(snapshot));
    }

    /// Returns an independent copy of the current map in insertion order.
    ///
    /// An empty result means the map was never set or was last set to an
    /// empty node list; the two cases are not distinguished here.
    #[must_use]
    pub fn map(&self) -> Vec<MapNode> {
        let snapshot = self.current.load();
        snapshot.nodes().cloned().collect()
    }

    /// Returns a point-in-time handle to the current map.
    #[must_use]
    pub fn snapshot(&self) -> Arc<MapSnapshot> {
        self.current.load_full()
    }

    /// Computes the least-cost route between two named nodes.
    ///
    /// The computation runs over a private snapshot taken up front, so a
    /// concurrent `set_map` cannot affect a query already in flight.
    pub fn shortest_route(&self, from: &str, to: &str) -> Result<Route> {
        let snapshot = self.snapshot();
        let result = route::shortest_route(&snapshot, from, to);
        if let Ok(route) = &result {
            tracing::debug!(from, to, distance = route.distance, "route computed");
        }
        result
    }
}
