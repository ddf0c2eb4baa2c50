//! Repository for the `crowd_observations` table (append-only time-series).

use sqlx::PgPool;

use crowdscope_core::observation::Observation;
use crowdscope_core::types::Timestamp;

use crate::models::observation::StoredObservation;

/// Column list for `crowd_observations` SELECT queries.
const COLUMNS: &str = "id, location_id, observed_at, count, density, created_at";

/// Provides query operations for crowd observations.
pub struct ObservationRepo;

impl ObservationRepo {
    /// Insert a single observation.
    pub async fn insert(
        pool: &PgPool,
        observation: &Observation,
    ) -> Result<StoredObservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO crowd_observations (location_id, observed_at, count, density) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StoredObservation>(&query)
            .bind(&observation.location_id)
            .bind(observation.observed_at)
            .bind(observation.count)
            .bind(observation.density)
            .fetch_one(pool)
            .await
    }

    /// Get observations for a location within a time range, newest first.
    pub async fn get_for_location(
        pool: &PgPool,
        location_id: &str,
        since: Timestamp,
    ) -> Result<Vec<StoredObservation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM crowd_observations \
             WHERE location_id = $1 AND observed_at >= $2 \
             ORDER BY observed_at DESC"
        );
        sqlx::query_as::<_, StoredObservation>(&query)
            .bind(location_id)
            .bind(since)
            .fetch_all(pool)
            .await
    }

    /// Delete observations older than the given cutoff timestamp.
    ///
    /// Returns the number of rows deleted.
    pub async fn delete_older_than(pool: &PgPool, cutoff: Timestamp) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM crowd_observations WHERE observed_at < $1")
            .bind(cutoff)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
