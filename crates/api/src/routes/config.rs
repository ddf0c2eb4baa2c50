//! Routes for runtime alert configuration.

use axum::routing::post;
use axum::Router;

use crate::handlers::config;
use crate::state::AppState;

/// ```text
/// POST /config/threshold   -> set_threshold
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/config/threshold", post(config::set_threshold))
}
