//! HTTP server for the Campus proxy

use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::{BackendConfig, ProxyConfig};
use crate::{ProxyError, Result};

/// Fixed error body returned when the backend listing cannot be fetched.
const INTEGRATIONS_ERROR: &str = "Failed to fetch available integrations";

/// Backend path the integrations listing is relayed from.
const INTEGRATIONS_UPSTREAM_PATH: &str = "/api/v1/settings/integrations/available";

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    http: reqwest::Client,
    backend: BackendConfig,
}

impl AppState {
    /// Build handler state from the backend section of the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the backend HTTP client cannot be constructed
    pub fn new(backend: BackendConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(backend.timeout_secs))
            .build()
            .map_err(|e| ProxyError::Http(format!("Failed to build backend client: {e}")))?;

        Ok(Self { http, backend })
    }
}

/// HTTP server for the proxy
pub struct HttpServer {
    config: ProxyConfig,
    app_state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    ///
    /// # Errors
    ///
    /// Returns an error if server initialization fails
    pub fn new(config: ProxyConfig) -> Result<Self> {
        let app_state = AppState::new(config.backend.clone())?;
        Ok(Self { config, app_state })
    }

    /// Start the HTTP server
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to start
    pub async fn start(&self) -> Result<()> {
        let app = create_app(self.app_state.clone(), &self.config);

        let listener = TcpListener::bind(self.config.http.bind_addr)
            .await
            .map_err(|e| {
                ProxyError::Http(format!("Failed to bind to {}: {e}", self.config.http.bind_addr))
            })?;

        info!("HTTP server listening on {}", self.config.http.bind_addr);

        axum::serve(listener, app)
            .await
            .map_err(|e| ProxyError::Http(format!("HTTP server error: {e}")))?;

        Ok(())
    }
}

/// Create the Axum application with routes
pub fn create_app(state: AppState, config: &ProxyConfig) -> Router {
    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/api/integrations/available", get(available_integrations))
        .with_state(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.http.timeout_secs,
        )));

    app = app.layer(service_builder);

    if config.http.cors_enabled {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Relay the backend's available-integrations listing.
///
/// Any backend failure collapses to a fixed 500 payload; the original error
/// is only logged here, never surfaced to the browser.
async fn available_integrations(State(state): State<AppState>) -> Response {
    let url = format!(
        "{}{INTEGRATIONS_UPSTREAM_PATH}",
        state.backend.base_url.trim_end_matches('/')
    );

    let response = match state.http.get(&url).send().await {
        Ok(response) => response,
        Err(err) => {
            warn!("integrations request to backend failed: {err}");
            return integrations_error();
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!("backend returned {status} for integrations listing");
        return integrations_error();
    }

    match response.json::<JsonValue>().await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            warn!("invalid JSON from backend integrations listing: {err}");
            integrations_error()
        }
    }
}

fn integrations_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTEGRATIONS_ERROR })),
    )
        .into_response()
}
