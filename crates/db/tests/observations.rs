//! Integration tests for the observation repository and schema.

use chrono::{Duration, Utc};
use sqlx::PgPool;

use crowdscope_core::observation::Observation;
use crowdscope_db::repositories::ObservationRepo;

#[sqlx::test(migrations = "../../db/migrations")]
async fn insert_returns_stored_row(pool: PgPool) {
    let obs = Observation::new("plaza", 60, Utc::now());

    let stored = ObservationRepo::insert(&pool, &obs).await.unwrap();

    assert!(stored.id > 0);
    assert_eq!(stored.location_id, "plaza");
    assert_eq!(stored.count, 60);
    assert_eq!(stored.density, 0.5);
    assert_eq!(stored.observed_at, obs.observed_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ids_are_monotonic_in_insertion_order(pool: PgPool) {
    let first = ObservationRepo::insert(&pool, &Observation::new("plaza", 10, Utc::now()))
        .await
        .unwrap();
    let second = ObservationRepo::insert(&pool, &Observation::new("plaza", 20, Utc::now()))
        .await
        .unwrap();

    assert!(second.id > first.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_for_location_filters_by_location_and_time(pool: PgPool) {
    let now = Utc::now();

    for (location, offset_mins, count) in [
        ("plaza", 0, 10),
        ("plaza", -30, 20),
        ("plaza", -120, 30), // outside the window
        ("station", 0, 40),  // other location
    ] {
        let obs = Observation::new(location, count, now + Duration::minutes(offset_mins));
        ObservationRepo::insert(&pool, &obs).await.unwrap();
    }

    let rows = ObservationRepo::get_for_location(&pool, "plaza", now - Duration::hours(1))
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    // Newest first.
    assert_eq!(rows[0].count, 10);
    assert_eq!(rows[1].count, 20);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_older_than_purges_only_old_rows(pool: PgPool) {
    let now = Utc::now();

    ObservationRepo::insert(&pool, &Observation::new("plaza", 10, now - Duration::hours(48)))
        .await
        .unwrap();
    ObservationRepo::insert(&pool, &Observation::new("plaza", 20, now))
        .await
        .unwrap();

    let deleted = ObservationRepo::delete_older_than(&pool, now - Duration::hours(24))
        .await
        .unwrap();
    assert_eq!(deleted, 1);

    let remaining = ObservationRepo::get_for_location(&pool, "plaza", now - Duration::hours(72))
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].count, 20);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn schema_rejects_negative_counts(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO crowd_observations (location_id, observed_at, count, density) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind("plaza")
    .bind(Utc::now())
    .bind(-1)
    .bind(0.0)
    .execute(&pool)
    .await;

    assert!(result.is_err(), "CHECK constraint should reject count < 0");
}
