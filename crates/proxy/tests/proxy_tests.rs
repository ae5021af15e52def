//! Integration tests for the proxy routes

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use campus_proxy::config::{BackendConfig, ProxyConfig};
use campus_proxy::server::{create_app, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_app(backend_url: &str) -> Router {
    let config = ProxyConfig::default();
    let backend = BackendConfig {
        base_url: backend_url.to_string(),
        timeout_secs: 5,
    };
    let state = AppState::new(backend).unwrap();
    create_app(state, &config)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1_000_000).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn relays_the_backend_listing_verbatim() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/settings/integrations/available"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&backend)
        .await;

    let app = test_app(&backend.uri());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/integrations/available")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"items": []}));
}

#[tokio::test]
async fn backend_error_status_maps_to_the_fixed_500_payload() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/settings/integrations/available"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&backend)
        .await;

    let app = test_app(&backend.uri());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/integrations/available")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Failed to fetch available integrations"})
    );
}

#[tokio::test]
async fn unreachable_backend_maps_to_the_fixed_500_payload() {
    // Nothing listens on this port
    let app = test_app("http://127.0.0.1:1");
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/integrations/available")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Failed to fetch available integrations"})
    );
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = test_app("http://127.0.0.1:1");
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}
