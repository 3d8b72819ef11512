//! # Wayfinder Core
//!
//! In-memory map storage and shortest-route computation.
//!
//! The crate holds a single replaceable map of named nodes with directed
//! weighted edges, and answers least-cost route queries over it. The map is
//! swapped wholesale — there is no incremental node or edge mutation — and
//! every read works on an immutable point-in-time snapshot, so route
//! computations never block writers and never observe a half-replaced map.
//!
//! ## Quick Start
//!
//! ```rust
//! use wayfinder_core::{MapEdge, MapNode, MapStore};
//!
//! # fn main() -> Result<(), wayfinder_core::RouteError> {
//! let store = MapStore::new();
//! store.set_map(vec![
//!     MapNode::new("A")
//!         .with_edge(MapEdge::new("B", 2))
//!         .with_edge(MapEdge::new("C", 10)),
//!     MapNode::new("B").with_edge(MapEdge::new("C", 3)),
//!     MapNode::new("C"),
//! ]);
//!
//! // The two-hop route is cheaper than the direct edge.
//! let route = store.shortest_route("A", "C")?;
//! assert_eq!(route.path, vec!["A", "B", "C"]);
//! assert_eq!(route.distance, 5);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod map;

pub use error::{Result, RouteError};
pub use map::{MapEdge, MapNode, MapSnapshot, MapStore, Route};
