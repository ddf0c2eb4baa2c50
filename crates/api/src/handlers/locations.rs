//! Handlers for per-location REST reads.

use axum::extract::{Path, State};
use axum::Json;

use crowdscope_core::aggregate::LatestAggregate;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/locations/{location_id}/latest
///
/// Last-known aggregate for a location. Currently served by the
/// placeholder [`AggregateReader`](crowdscope_core::aggregate::AggregateReader);
/// reads independent state and never blocks on stream session internals.
pub async fn latest(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
) -> AppResult<Json<LatestAggregate>> {
    let aggregate = state.aggregates.latest(&location_id).await;

    Ok(Json(aggregate))
}
