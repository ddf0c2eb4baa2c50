//! Per-location alert threshold registry.
//!
//! The only mutable state shared across stream sessions. Readers (one per
//! session, once per tick) and writers (the config endpoint) run
//! concurrently; visibility is atomic per key and last-write-wins. All
//! methods are synchronous so no lock is ever held across an await point.

use std::collections::HashMap;
use std::sync::RwLock;

/// Process-wide mapping from location id to its alert threshold.
///
/// Absence of an entry means alerting is not configured for that location
/// (alerts always false), not an error. Shared as `Arc<ThresholdRegistry>`.
#[derive(Debug, Default)]
pub struct ThresholdRegistry {
    inner: RwLock<HashMap<String, i32>>,
}

impl ThresholdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the threshold for a location. Last write wins per key;
    /// writes to distinct keys never interfere.
    pub fn set(&self, location_id: &str, max_density: i32) {
        let mut map = self.inner.write().expect("threshold registry poisoned");
        map.insert(location_id.to_string(), max_density);
    }

    /// The currently visible threshold for a location, if one is set.
    pub fn get(&self, location_id: &str) -> Option<i32> {
        let map = self.inner.read().expect("threshold registry poisoned");
        map.get(location_id).copied()
    }

    /// Whether `count` at `location_id` should raise an alert: a threshold
    /// is configured and the count is at or above it.
    pub fn alert_for(&self, location_id: &str, count: i32) -> bool {
        match self.get(location_id) {
            Some(threshold) => count >= threshold,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn unset_location_never_alerts() {
        let registry = ThresholdRegistry::new();
        assert_eq!(registry.get("unconfigured-zone"), None);
        assert!(!registry.alert_for("unconfigured-zone", 0));
        assert!(!registry.alert_for("unconfigured-zone", 1_000_000));
    }

    #[test]
    fn alert_at_or_above_threshold() {
        let registry = ThresholdRegistry::new();
        registry.set("plaza", 50);

        assert!(registry.alert_for("plaza", 60));
        assert!(registry.alert_for("plaza", 50));
        assert!(!registry.alert_for("plaza", 40));
    }

    #[test]
    fn last_write_wins_per_key() {
        let registry = ThresholdRegistry::new();
        registry.set("plaza", 50);
        registry.set("plaza", 80);

        assert_eq!(registry.get("plaza"), Some(80));
        assert!(!registry.alert_for("plaza", 60));
    }

    #[test]
    fn distinct_keys_are_independent() {
        let registry = ThresholdRegistry::new();
        registry.set("plaza", 50);
        registry.set("station", 10);

        // Re-setting one location never changes the other's computation.
        registry.set("station", 90);
        assert_eq!(registry.get("plaza"), Some(50));
        assert!(registry.alert_for("plaza", 60));
        assert!(!registry.alert_for("station", 60));
    }

    #[test]
    fn concurrent_writers_and_readers() {
        let registry = Arc::new(ThresholdRegistry::new());

        let writers: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for n in 0..100 {
                        registry.set(&format!("location-{i}"), n);
                        // Reads must never observe a partially written entry.
                        if let Some(t) = registry.get(&format!("location-{i}")) {
                            assert!((0..100).contains(&t));
                        }
                    }
                })
            })
            .collect();

        for w in writers {
            w.join().unwrap();
        }

        for i in 0..8 {
            assert_eq!(registry.get(&format!("location-{i}")), Some(99));
        }
    }
}
