//! Map HTTP handlers: replace, fetch, and route queries.
//!
//! All map operations delegate to `MapStore` from `wayfinder-core`. The
//! server holds zero routing logic of its own; this module only maps HTTP
//! requests onto the store contract and core results onto status codes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use wayfinder_core::MapNode;

use crate::types::{ErrorResponse, RouteQuery};
use crate::AppState;

/// Replace the entire map.
///
/// An empty node list is rejected before the store is touched; a malformed
/// body never reaches this handler (the JSON extractor rejects it).
#[utoipa::path(
    post,
    path = "/map",
    tag = "map",
    request_body = Object,
    responses(
        (status = 200, description = "Map replaced"),
        (status = 400, description = "Empty or malformed map payload", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 403, description = "Token lacks read-write capability", body = ErrorResponse)
    )
)]
pub async fn set_map(
    State(state): State<Arc<AppState>>,
    Json(nodes): Json<Vec<MapNode>>,
) -> impl IntoResponse {
    if nodes.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid map data.".to_string(),
            }),
        )
            .into_response();
    }

    state.store.set_map(nodes);
    StatusCode::OK.into_response()
}

/// Fetch the current map.
///
/// An empty map is reported as "not set" — the store intentionally does not
/// distinguish "never set" from "set to empty".
#[utoipa::path(
    get,
    path = "/map",
    tag = "map",
    responses(
        (status = 200, description = "The current map as a node array", body = Object),
        (status = 400, description = "Map has not been set", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse)
    )
)]
pub async fn get_map(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let nodes = state.store.map();
    if nodes.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Map has not been set.".to_string(),
            }),
        )
            .into_response();
    }
    Json(nodes).into_response()
}

/// Validate the `from`/`to` query parameters (both required, non-empty).
fn endpoints(params: &RouteQuery) -> Result<(&str, &str), (StatusCode, Json<ErrorResponse>)> {
    match (params.from.as_deref(), params.to.as_deref()) {
        (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => Ok((from, to)),
        _ => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Parameters 'from' and 'to' are required.".to_string(),
            }),
        )),
    }
}

/// Unknown endpoints and unreachable destinations are deliberately not
/// distinguished on the wire, matching the API contract.
fn route_rejected(err: &wayfinder_core::RouteError) -> (StatusCode, Json<ErrorResponse>) {
    tracing::debug!(%err, "route lookup rejected");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Unknown node names or no path found.".to_string(),
        }),
    )
}

/// Shortest route between two nodes, rendered as the node names
/// concatenated in travel order with no separator.
#[utoipa::path(
    get,
    path = "/map/route",
    tag = "map",
    params(RouteQuery),
    responses(
        (status = 200, description = "Concatenated node names along the route", body = String),
        (status = 400, description = "Missing parameters, unknown nodes, or no path", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse)
    )
)]
pub async fn shortest_route(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RouteQuery>,
) -> Result<String, (StatusCode, Json<ErrorResponse>)> {
    let (from, to) = endpoints(&params)?;
    let route = state
        .store
        .shortest_route(from, to)
        .map_err(|err| route_rejected(&err))?;
    Ok(route.path.concat())
}

/// Shortest distance between two nodes, rendered as a bare integer.
#[utoipa::path(
    get,
    path = "/map/distance",
    tag = "map",
    params(RouteQuery),
    responses(
        (status = 200, description = "Total distance of the shortest route", body = String),
        (status = 400, description = "Missing parameters, unknown nodes, or no path", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse)
    )
)]
pub async fn shortest_distance(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RouteQuery>,
) -> Result<String, (StatusCode, Json<ErrorResponse>)> {
    let (from, to) = endpoints(&params)?;
    let route = state
        .store
        .shortest_route(from, to)
        .map_err(|err| route_rejected(&err))?;
    Ok(route.distance.to_string())
}
