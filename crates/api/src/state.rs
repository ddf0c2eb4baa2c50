use std::sync::Arc;

use crowdscope_core::aggregate::AggregateReader;
use crowdscope_core::thresholds::ThresholdRegistry;

use crate::config::ServerConfig;
use crate::store::ObservationStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: crowdscope_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Per-location alert thresholds, shared by all stream sessions and
    /// the config endpoint.
    pub thresholds: Arc<ThresholdRegistry>,
    /// Fire-and-forget durable sink for observations.
    pub store: ObservationStore,
    /// Latest-aggregate reader (placeholder implementation).
    pub aggregates: Arc<dyn AggregateReader>,
}
