//! Latest-aggregate read capability.
//!
//! The dashboard's "latest" endpoint is an explicitly stubbed collaborator:
//! real aggregation semantics (time window, statistic) are undefined here.
//! The trait exists so a real aggregator can replace the placeholder
//! without touching the handler.

use async_trait::async_trait;
use chrono::Utc;

use crate::types::Timestamp;

/// Last-known aggregate state for one location.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LatestAggregate {
    pub location_id: String,
    pub count: i32,
    pub density: f64,
    pub timestamp: Timestamp,
}

/// Reads the latest aggregate for a location.
#[async_trait]
pub trait AggregateReader: Send + Sync {
    async fn latest(&self, location_id: &str) -> LatestAggregate;
}

/// Placeholder reader returning zeros with the current time.
pub struct PlaceholderAggregateReader;

#[async_trait]
impl AggregateReader for PlaceholderAggregateReader {
    async fn latest(&self, location_id: &str) -> LatestAggregate {
        LatestAggregate {
            location_id: location_id.to_string(),
            count: 0,
            density: 0.0,
            timestamp: Utc::now(),
        }
    }
}
