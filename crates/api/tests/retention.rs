//! Integration test for the observation retention job.

use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use crowdscope_api::background::retention;
use crowdscope_core::observation::Observation;
use crowdscope_db::repositories::ObservationRepo;

#[sqlx::test(migrations = "../../db/migrations")]
async fn retention_purges_only_expired_rows(pool: PgPool) {
    let now = Utc::now();
    ObservationRepo::insert(&pool, &Observation::new("plaza", 10, now - chrono::Duration::hours(48)))
        .await
        .unwrap();
    ObservationRepo::insert(&pool, &Observation::new("plaza", 20, now))
        .await
        .unwrap();

    let cancel = CancellationToken::new();
    let task = tokio::spawn(retention::run(pool.clone(), 24, cancel.clone()));

    // The first cleanup pass runs immediately on startup.
    let mut remaining = Vec::new();
    for _ in 0..200 {
        remaining = ObservationRepo::get_for_location(
            &pool,
            "plaza",
            now - chrono::Duration::hours(72),
        )
        .await
        .unwrap();
        if remaining.len() == 1 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(remaining.len(), 1, "expired row should be purged");
    assert_eq!(remaining[0].count, 20);

    cancel.cancel();
    tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .expect("retention job did not stop")
        .unwrap();
}
