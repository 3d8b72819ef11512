//! Wayfinder Server - REST API for the Wayfinder routing engine.
//!
//! The server is a thin transport shell: deserialization, parameter checks,
//! capability enforcement, and status-code mapping happen here, while all
//! map state and route computation live in `wayfinder-core`.

pub mod auth;
pub mod config;
pub mod handlers;
pub mod types;

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{middleware, Router};
use utoipa::OpenApi;

use config::Capability;
use wayfinder_core::MapStore;

// 16MB limit for map uploads (an edge serializes to ~40 bytes, so this
// admits maps in the hundreds of thousands of edges).
const MAP_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Shared application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// The map store.
    pub store: MapStore,
    /// Token → capability mapping; empty disables authentication.
    pub api_keys: HashMap<String, Capability>,
}

/// OpenAPI document for the map API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::map::set_map,
        handlers::map::get_map,
        handlers::map::shortest_route,
        handlers::map::shortest_distance,
        handlers::health::health_check,
    ),
    components(schemas(types::ErrorResponse)),
    tags(
        (name = "map", description = "Map management and route queries"),
        (name = "health", description = "Liveness probes")
    )
)]
pub struct ApiDoc;

/// Build the full router: map routes guarded by the capability middleware,
/// plus the unauthenticated health route.
#[must_use]
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/map",
            get(handlers::get_map).post(handlers::set_map),
        )
        .layer(DefaultBodyLimit::max(MAP_BODY_LIMIT))
        .route("/map/route", get(handlers::shortest_route))
        .route("/map/distance", get(handlers::shortest_distance))
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::capability_middleware,
        ))
        .with_state(state)
}
