//! Crowd observation model and observation sources.
//!
//! An [`Observation`] is one timestamped crowd measurement for a location.
//! Density is always derived from the head count via [`density_for_count`];
//! it is never set independently, so the two fields cannot drift apart.

use async_trait::async_trait;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Head count at which a location is considered fully saturated.
pub const CAPACITY: i32 = 120;

/// Derive density from a head count: `count / CAPACITY`, clamped to 1.0
/// and rounded to 3 decimal places.
pub fn density_for_count(count: i32) -> f64 {
    let raw = f64::from(count) / f64::from(CAPACITY);
    (raw.min(1.0) * 1000.0).round() / 1000.0
}

/// A single crowd measurement. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub location_id: String,
    pub count: i32,
    pub density: f64,
    pub observed_at: Timestamp,
}

impl Observation {
    /// Build an observation for `location_id`, deriving density from `count`.
    pub fn new(location_id: impl Into<String>, count: i32, observed_at: Timestamp) -> Self {
        Self {
            location_id: location_id.into(),
            count,
            density: density_for_count(count),
            observed_at,
        }
    }
}

/// Capability that produces one observation per invocation.
///
/// Each stream session owns its own source instance, so implementations
/// need no cross-session synchronization. A real capture/inference backend
/// slots in here without touching the session loop.
#[async_trait]
pub trait ObservationSource: Send {
    /// Produce one observation for `location_id`.
    ///
    /// Fails only on an unrecoverable internal fault (e.g. hardware capture
    /// failure); the simulated implementation never fails.
    async fn produce(&mut self, location_id: &str) -> Result<Observation, CoreError>;
}

/// Reference source: a seedable random generator standing in for a real
/// camera/inference pipeline. Counts are uniform in `[0, CAPACITY]`.
pub struct SimulatedSource {
    rng: StdRng,
}

impl SimulatedSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObservationSource for SimulatedSource {
    async fn produce(&mut self, location_id: &str) -> Result<Observation, CoreError> {
        let count = self.rng.random_range(0..=CAPACITY);
        Ok(Observation::new(location_id, count, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_is_count_over_capacity_rounded() {
        assert_eq!(density_for_count(0), 0.0);
        assert_eq!(density_for_count(60), 0.5);
        assert_eq!(density_for_count(120), 1.0);
        // 7 / 120 = 0.05833..., rounds to 0.058.
        assert_eq!(density_for_count(7), 0.058);
    }

    #[test]
    fn density_clamps_above_capacity() {
        assert_eq!(density_for_count(121), 1.0);
        assert_eq!(density_for_count(10_000), 1.0);
    }

    #[test]
    fn density_stays_in_unit_range_for_all_valid_counts() {
        for count in 0..=CAPACITY {
            let d = density_for_count(count);
            assert!((0.0..=1.0).contains(&d), "count {count} gave density {d}");
            let expected = (f64::from(count) / 120.0 * 1000.0).round() / 1000.0;
            assert_eq!(d, expected);
        }
    }

    #[test]
    fn new_derives_density_from_count() {
        let obs = Observation::new("plaza", 90, Utc::now());
        assert_eq!(obs.density, 0.75);
        assert_eq!(obs.location_id, "plaza");
    }

    #[tokio::test]
    async fn simulated_source_stays_within_capacity() {
        let mut source = SimulatedSource::from_seed(7);
        for _ in 0..200 {
            let obs = source.produce("plaza").await.unwrap();
            assert!((0..=CAPACITY).contains(&obs.count));
            assert_eq!(obs.density, density_for_count(obs.count));
        }
    }

    #[tokio::test]
    async fn seeded_sources_are_deterministic() {
        let mut a = SimulatedSource::from_seed(42);
        let mut b = SimulatedSource::from_seed(42);
        for _ in 0..10 {
            let (oa, ob) = (
                a.produce("plaza").await.unwrap(),
                b.produce("plaza").await.unwrap(),
            );
            assert_eq!(oa.count, ob.count);
        }
    }
}
