//! Persisted crowd observation rows.

use serde::Serialize;
use sqlx::FromRow;

use crowdscope_core::types::{DbId, Timestamp};

/// A row in the `crowd_observations` time series.
///
/// Mirrors [`crowdscope_core::observation::Observation`] plus the
/// server-assigned id and insertion time. Write-only from the streaming
/// path's perspective.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoredObservation {
    pub id: DbId,
    pub location_id: String,
    pub observed_at: Timestamp,
    pub count: i32,
    pub density: f64,
    pub created_at: Timestamp,
}
