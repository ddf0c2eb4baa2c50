//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use crowdscope_api::config::ServerConfig;
use crowdscope_api::router::build_app_router;
use crowdscope_api::state::AppState;
use crowdscope_api::store::ObservationStore;
use crowdscope_core::aggregate::PlaceholderAggregateReader;
use crowdscope_core::thresholds::ThresholdRegistry;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a short stream interval so streaming tests run quickly, and a small
/// writer queue.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        stream_interval_ms: 10,
        store_queue_capacity: 16,
        observation_retention_hours: 24,
    }
}

/// Build the shared application state for tests, starting a real
/// observation writer against the given pool.
pub fn build_test_state(pool: PgPool) -> AppState {
    let config = test_config();
    let (store, _writer) = ObservationStore::start(pool.clone(), config.store_queue_capacity);

    AppState {
        pool,
        config: Arc::new(config),
        thresholds: Arc::new(ThresholdRegistry::new()),
        store,
        aggregates: Arc::new(PlaceholderAggregateReader),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = build_test_state(pool);
    let config = state.config.as_ref().clone();
    build_app_router(state, &config)
}

/// Build the router and return the state alongside it, so tests can assert
/// on shared state (e.g. registry contents) after a request.
pub fn build_test_app_with_state(pool: PgPool) -> (Router, AppState) {
    let state = build_test_state(pool);
    let config = state.config.as_ref().clone();
    (build_app_router(state.clone(), &config), state)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into a JSON value.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
