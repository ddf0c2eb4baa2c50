//! Fire-and-forget durable sink for observations.
//!
//! [`ObservationStore`] decouples stream sessions from storage latency: a
//! session hands each observation to a bounded queue and moves on; a single
//! writer task drains the queue into `crowd_observations`. A full queue
//! drops the observation with a counted warning rather than blocking the
//! session, and a failed insert is counted and logged but never surfaced
//! to the client-facing path.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crowdscope_core::observation::Observation;
use crowdscope_db::repositories::ObservationRepo;
use crowdscope_db::DbPool;

/// Cloneable handle to the observation writer task.
///
/// Dropping every clone closes the queue; the writer drains what remains
/// and exits, so graceful shutdown lets in-flight writes complete.
#[derive(Clone)]
pub struct ObservationStore {
    tx: mpsc::Sender<Observation>,
    dropped: Arc<AtomicU64>,
    write_failures: Arc<AtomicU64>,
}

impl ObservationStore {
    /// Spawn the writer task and return a handle plus its `JoinHandle`.
    pub fn start(pool: DbPool, queue_capacity: usize) -> (Self, tokio::task::JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(queue_capacity);
        let write_failures = Arc::new(AtomicU64::new(0));

        let handle = tokio::spawn(writer_loop(pool, rx, Arc::clone(&write_failures)));

        let store = Self {
            tx,
            dropped: Arc::new(AtomicU64::new(0)),
            write_failures,
        };
        (store, handle)
    }

    /// Submit an observation for persistence without waiting.
    ///
    /// Never blocks and never errors: when the queue is full (or the writer
    /// has shut down) the observation is dropped and counted.
    pub fn append(&self, observation: Observation) {
        match self.tx.try_send(observation) {
            Ok(()) => {}
            Err(TrySendError::Full(obs)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    location_id = %obs.location_id,
                    "Observation queue full, dropping observation"
                );
            }
            Err(TrySendError::Closed(obs)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    location_id = %obs.location_id,
                    "Observation writer stopped, dropping observation"
                );
            }
        }
    }

    /// Number of observations dropped before reaching the queue.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Number of observations the writer failed to persist.
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Store with a queue but no writer task, so tests can inspect what was
    /// dispatched and overflow deterministically.
    #[cfg(test)]
    pub(crate) fn detached(queue_capacity: usize) -> (Self, mpsc::Receiver<Observation>) {
        let (tx, rx) = mpsc::channel(queue_capacity);
        let store = Self {
            tx,
            dropped: Arc::new(AtomicU64::new(0)),
            write_failures: Arc::new(AtomicU64::new(0)),
        };
        (store, rx)
    }
}

/// Drain the queue into the database until every sender is dropped.
async fn writer_loop(
    pool: DbPool,
    mut rx: mpsc::Receiver<Observation>,
    write_failures: Arc<AtomicU64>,
) {
    while let Some(obs) = rx.recv().await {
        if let Err(e) = ObservationRepo::insert(&pool, &obs).await {
            write_failures.fetch_add(1, Ordering::Relaxed);
            tracing::error!(
                error = %e,
                location_id = %obs.location_id,
                "Failed to persist observation"
            );
        }
    }
    tracing::info!("Observation writer shutting down");
}
