use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crowdscope_core::types::Timestamp;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the database is reachable, `"degraded"` otherwise.
    pub status: &'static str,
    /// Current server time (UTC).
    pub time: Timestamp,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = crowdscope_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        time: Utc::now(),
    })
}

/// Mount health check routes at root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
