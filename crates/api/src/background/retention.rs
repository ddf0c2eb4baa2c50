//! Periodic cleanup of old crowd observations.
//!
//! The observation table is append-only; without cleanup it grows without
//! bound. This task deletes rows older than the configured retention
//! period on a fixed interval using `tokio::time::interval`.

use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use crowdscope_db::repositories::ObservationRepo;

/// How often the cleanup job runs.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(3600); // 1 hour

/// Run the observation retention cleanup loop.
///
/// Deletes observation rows older than `retention_hours`. Runs until
/// `cancel` is triggered.
pub async fn run(pool: PgPool, retention_hours: i64, cancel: CancellationToken) {
    tracing::info!(
        retention_hours,
        interval_secs = CLEANUP_INTERVAL.as_secs(),
        "Observation retention job started"
    );

    let mut interval = tokio::time::interval(CLEANUP_INTERVAL);

    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                tracing::info!("Observation retention job stopping");
                break;
            }
            _ = interval.tick() => {
                let cutoff = Utc::now() - chrono::Duration::hours(retention_hours);
                match ObservationRepo::delete_older_than(&pool, cutoff).await {
                    Ok(deleted) => {
                        if deleted > 0 {
                            tracing::info!(deleted, "Observation retention: purged old rows");
                        } else {
                            tracing::debug!("Observation retention: no rows to purge");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Observation retention: cleanup failed");
                    }
                }
            }
        }
    }
}
