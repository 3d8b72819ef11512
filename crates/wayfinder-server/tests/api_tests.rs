//! End-to-end tests driving the router with `tower::ServiceExt::oneshot`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use wayfinder_server::config::Capability;
use wayfinder_server::{build_router, AppState};

fn sample_map_json() -> serde_json::Value {
    serde_json::json!([
        {"name": "A", "edges": [{"target": "B", "distance": 2}, {"target": "C", "distance": 10}]},
        {"name": "B", "edges": [{"target": "C", "distance": 3}]},
        {"name": "C", "edges": []}
    ])
}

/// Router with authentication disabled (no configured tokens).
fn open_router() -> Router {
    build_router(Arc::new(AppState::default()))
}

/// Router with one read-only and one read-write token.
fn secured_router() -> Router {
    let mut api_keys = HashMap::new();
    api_keys.insert("reader-token".to_string(), Capability::Read);
    api_keys.insert("writer-token".to_string(), Capability::ReadWrite);
    build_router(Arc::new(AppState {
        api_keys,
        ..AppState::default()
    }))
}

fn request(method: Method, uri: &str) -> axum::http::request::Builder {
    Request::builder().method(method).uri(uri)
}

fn json_body(value: &serde_json::Value) -> Body {
    Body::from(serde_json::to_vec(value).unwrap())
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn load_sample_map(app: &Router) {
    let response = app
        .clone()
        .oneshot(
            request(Method::POST, "/map")
                .header(header::CONTENT_TYPE, "application/json")
                .body(json_body(&sample_map_json()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_map_before_set_is_rejected() {
    let response = open_router()
        .oneshot(request(Method::GET, "/map").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("Map has not been set"));
}

#[tokio::test]
async fn test_set_then_get_round_trip() {
    let app = open_router();
    load_sample_map(&app).await;

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/map").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body, sample_map_json());
}

#[tokio::test]
async fn test_set_map_rejects_empty_node_list() {
    let response = open_router()
        .oneshot(
            request(Method::POST, "/map")
                .header(header::CONTENT_TYPE, "application/json")
                .body(json_body(&serde_json::json!([])))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("Invalid map data"));
}

#[tokio::test]
async fn test_set_map_rejects_malformed_body() {
    let response = open_router()
        .oneshot(
            request(Method::POST, "/map")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_shortest_route_concatenates_names() {
    let app = open_router();
    load_sample_map(&app).await;

    let response = app
        .clone()
        .oneshot(
            request(Method::GET, "/map/route?from=A&to=C")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ABC");
}

#[tokio::test]
async fn test_shortest_distance_renders_integer() {
    let app = open_router();
    load_sample_map(&app).await;

    let response = app
        .clone()
        .oneshot(
            request(Method::GET, "/map/distance?from=A&to=C")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "5");
}

#[tokio::test]
async fn test_route_requires_both_parameters() {
    let app = open_router();
    load_sample_map(&app).await;

    for uri in ["/map/route", "/map/route?from=A", "/map/route?from=A&to="] {
        let response = app
            .clone()
            .oneshot(request(Method::GET, uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
        assert!(
            body_string(response)
                .await
                .contains("'from' and 'to' are required"),
            "uri: {uri}"
        );
    }
}

#[tokio::test]
async fn test_unknown_node_and_no_path_share_one_rejection() {
    let app = open_router();
    load_sample_map(&app).await;

    // Unknown endpoint and unreachable endpoint produce the same message.
    for uri in ["/map/route?from=A&to=X", "/map/route?from=C&to=A"] {
        let response = app
            .clone()
            .oneshot(request(Method::GET, uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
        assert!(
            body_string(response)
                .await
                .contains("Unknown node names or no path found"),
            "uri: {uri}"
        );
    }
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let response = secured_router()
        .oneshot(request(Method::GET, "/map").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_token_is_unauthorized() {
    let response = secured_router()
        .oneshot(
            request(Method::GET, "/map")
                .header("x-api-key", "wrong-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_read_token_cannot_write() {
    let response = secured_router()
        .oneshot(
            request(Method::POST, "/map")
                .header("x-api-key", "reader-token")
                .header(header::CONTENT_TYPE, "application/json")
                .body(json_body(&sample_map_json()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_write_token_implies_read() {
    let app = secured_router();

    // Load with the read-write token...
    let response = app
        .clone()
        .oneshot(
            request(Method::POST, "/map")
                .header("x-api-key", "writer-token")
                .header(header::CONTENT_TYPE, "application/json")
                .body(json_body(&sample_map_json()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // ...then read with it too.
    let response = app
        .clone()
        .oneshot(
            request(Method::GET, "/map/distance?from=A&to=C")
                .header("x-api-key", "writer-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "5");
}

#[tokio::test]
async fn test_read_token_can_query() {
    let app = secured_router();

    let response = app
        .clone()
        .oneshot(
            request(Method::POST, "/map")
                .header("x-api-key", "writer-token")
                .header(header::CONTENT_TYPE, "application/json")
                .body(json_body(&sample_map_json()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            request(Method::GET, "/map/route?from=A&to=C")
                .header("x-api-key", "reader-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ABC");
}

#[tokio::test]
async fn test_bearer_token_is_accepted() {
    let app = secured_router();

    let response = app
        .clone()
        .oneshot(
            request(Method::POST, "/map")
                .header(header::AUTHORIZATION, "Bearer writer-token")
                .header(header::CONTENT_TYPE, "application/json")
                .body(json_body(&sample_map_json()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_bypasses_auth() {
    let response = secured_router()
        .oneshot(request(Method::GET, "/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("ok"));
}
