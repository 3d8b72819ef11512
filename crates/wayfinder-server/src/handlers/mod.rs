//! HTTP handlers for the Wayfinder REST API.
//!
//! - `map`: map replacement, retrieval, and route/distance queries
//! - `health`: liveness probe

pub mod health;
pub mod map;

pub use health::health_check;
pub use map::{get_map, set_map, shortest_distance, shortest_route};
