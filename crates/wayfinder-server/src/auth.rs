//! Capability-based API key middleware.
//!
//! Tokens arrive as `X-Api-Key: <token>` or `Authorization: Bearer <token>`
//! and resolve to a capability tier through the configuration-held mapping.
//! Mutating requests require `ReadWrite`; everything else requires `Read`.
//! With no tokens configured the server runs in development mode and skips
//! the check entirely.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::config::Capability;
use crate::types::ErrorResponse;
use crate::AppState;

/// Paths that bypass authentication (health checks, docs).
const BYPASS_PATHS: &[&str] = &["/health", "/swagger-ui", "/api-docs"];

/// Constant-time byte comparison to prevent timing attacks.
///
/// Returns `true` if both slices are equal, using a fixed-time algorithm
/// that does NOT short-circuit on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Resolves a presented token against the configured mapping.
///
/// Scans every entry with a constant-time comparison so a probe cannot
/// learn which configured token it shares a prefix with.
fn resolve_capability(state: &AppState, token: &str) -> Option<Capability> {
    let mut resolved = None;
    for (key, capability) in &state.api_keys {
        if constant_time_eq(key.as_bytes(), token.as_bytes()) {
            resolved = Some(*capability);
        }
    }
    resolved
}

/// Capability a request needs: anything that can mutate the map requires
/// `ReadWrite`, everything else at least `Read`.
fn required_capability(method: &Method) -> Capability {
    if matches!(*method, Method::GET | Method::HEAD) {
        Capability::Read
    } else {
        Capability::ReadWrite
    }
}

/// Axum middleware: enforce the capability check before any handler runs.
///
/// - No tokens configured → development mode, pass through.
/// - Exempt paths (health, docs) → pass through.
/// - Otherwise the token must resolve to a tier satisfying the method's
///   required capability: 401 for a missing or unrecognized token, 403 for
///   a recognized token below the required tier.
pub async fn capability_middleware(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if state.api_keys.is_empty() {
        return next.run(request).await;
    }

    let path = request.uri().path();
    if BYPASS_PATHS.iter().any(|bp| path.starts_with(bp)) {
        return next.run(request).await;
    }

    let bearer = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    let api_key_header = request
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok());

    let Some(token) = bearer.or(api_key_header) else {
        return unauthorized(
            "Missing API key. Set X-Api-Key: <token> or Authorization: Bearer <token>",
        );
    };

    let Some(capability) = resolve_capability(&state, token) else {
        return unauthorized("Invalid API key");
    };

    if !capability.allows(required_capability(request.method())) {
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: "Insufficient permissions".to_string(),
            }),
        )
            .into_response();
    }

    next.run(request).await
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
