//! Routes for the WebSocket observation stream.

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// ```text
/// GET /ws/stream/{location_id}   -> WebSocket upgrade
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/ws/stream/{location_id}", get(ws::ws_stream))
}
