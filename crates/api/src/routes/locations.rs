//! Routes for per-location REST reads (mounted under `/api`).

use axum::routing::get;
use axum::Router;

use crate::handlers::locations;
use crate::state::AppState;

/// ```text
/// GET /locations/{location_id}/latest   -> latest
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/locations/{location_id}/latest", get(locations::latest))
}
