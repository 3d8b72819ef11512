//! In-memory map module: data model, snapshot store, shortest-route search.
//!
//! # Example
//!
//! ```rust
//! use wayfinder_core::map::{MapEdge, MapNode, MapStore};
//!
//! let store = MapStore::new();
//! store.set_map(vec![
//!     MapNode::new("Depot").with_edge(MapEdge::new("North", 4)),
//!     MapNode::new("North"),
//! ]);
//!
//! let route = store.shortest_route("Depot", "North").unwrap();
//! assert_eq!(route.distance, 4);
//! ```

mod route;
mod store;
mod types;


pub use route::Route;
pub use store::{MapSnapshot, MapStore};
pub use types::{MapEdge, MapNode};
