//! Handlers for runtime alert configuration.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crowdscope_core::validation::{validate_location_id, validate_threshold};

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /config/threshold`.
#[derive(Debug, Deserialize)]
pub struct ThresholdConfig {
    pub location_id: String,
    pub max_density: i32,
}

/// Acknowledgement body: `{ "ok": true }`.
#[derive(Debug, Serialize)]
pub struct ThresholdAck {
    pub ok: bool,
}

/// POST /config/threshold
///
/// Upsert the alert threshold for a location. Takes effect for all current
/// and future stream sessions on that location. Malformed input is rejected
/// with a 400 and leaves the registry untouched.
pub async fn set_threshold(
    State(state): State<AppState>,
    Json(input): Json<ThresholdConfig>,
) -> AppResult<Json<ThresholdAck>> {
    validate_location_id(&input.location_id)?;
    validate_threshold(input.max_density)?;

    state.thresholds.set(&input.location_id, input.max_density);

    tracing::info!(
        location_id = %input.location_id,
        max_density = input.max_density,
        "Alert threshold updated"
    );

    Ok(Json(ThresholdAck { ok: true }))
}
