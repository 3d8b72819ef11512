//! Least-cost route search over a map snapshot.
//!
//! Dijkstra with a binary min-heap. Duplicate queue entries for one node are
//! permitted: a node's recorded distance only ever decreases, so a popped
//! entry whose distance no longer matches the recorded best is stale and
//! skipped. Ties on distance are broken by enqueue order, keeping results
//! reproducible across runs.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use super::store::MapSnapshot;
use crate::error::{Result, RouteError};

/// A computed route: node names from start to destination inclusive, plus
/// the total distance along them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Node names in travel order, endpoints included.
    pub path: Vec<String>,
    /// Sum of edge distances along `path`.
    pub distance: u64,
}

/// Computes the least-cost route from `from` to `to` over `snapshot`.
///
/// Edges whose target is not a known node are skipped; a node with no
/// outgoing edges simply never extends the frontier. `from == to` yields a
/// single-node route of distance 0.
///
/// # Errors
///
/// - [`RouteError::UnknownNode`] if either endpoint is absent from the
///   snapshot (checked before the search runs).
/// - [`RouteError::NoRoute`] if both endpoints exist but the destination is
///   unreachable.
pub fn shortest_route(snapshot: &MapSnapshot, from: &str, to: &str) -> Result<Route> {
    // Endpoint check first: borrow the snapshot-owned names so every key in
    // the maps below shares the snapshot's lifetime.
    let Some(start) = snapshot.node(from) else {
        return Err(RouteError::UnknownNode(from.to_string()));
    };
    let Some(end) = snapshot.node(to) else {
        return Err(RouteError::UnknownNode(to.to_string()));
    };
    let (start, end) = (start.name(), end.name());

    let mut best: HashMap<&str, u64> = HashMap::with_capacity(snapshot.node_count());
    let mut previous: HashMap<&str, &str> = HashMap::new();
    // Entries are (distance, enqueue sequence, node); `Reverse` turns the
    // max-heap into a min-heap, oldest entry first on equal distance.
    let mut frontier: BinaryHeap<Reverse<(u64, u64, &str)>> = BinaryHeap::new();
    let mut sequence: u64 = 0;

    best.insert(start, 0);
    frontier.push(Reverse((0, sequence, start)));

    while let Some(Reverse((popped, _, name))) = frontier.pop() {
        if name == end {
            // Final under non-negative weights; nothing cheaper can follow.
            break;
        }
        if best.get(name).is_some_and(|&recorded| popped > recorded) {
            // Stale entry: a cheaper route to this node was already settled.
            continue;
        }
        let Some(node) = snapshot.node(name) else {
            continue;
        };
        for edge in node.edges() {
            // Dangling targets are tolerated and never extend the search.
            let Some(target) = snapshot.node(edge.target()) else {
                continue;
            };
            let target = target.name();
            let candidate = popped.saturating_add(edge.distance());
            if best.get(target).is_none_or(|&recorded| candidate < recorded) {
                best.insert(target, candidate);
                previous.insert(target, name);
                sequence += 1;
                frontier.push(Reverse((candidate, sequence, target)));
            }
        }
    }

    let Some(&distance) = best.get(end) else {
        return Err(RouteError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        });
    };

    Ok(Route {
        path: reconstruct(&previous, start, end),
        distance,
    })
}

/// Walks predecessor pointers back from the destination, then reverses into
/// travel order.
fn reconstruct<'a>(previous: &HashMap<&'a str, &'a str>, start: &'a str, end: &'a str) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut step = end;
    while step != start {
        let Some(&prev) = previous.get(step) else {
            break;
        };
        path.push(prev.to_string());
        step = prev;
    }
    path.reverse();
    path
}
