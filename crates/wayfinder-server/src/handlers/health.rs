//! Health check endpoint.

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe. Bypasses authentication.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is up", body = Object)
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
