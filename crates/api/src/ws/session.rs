//! Per-connection stream session.
//!
//! A [`StreamSession`] drives one client connection: on a fixed cadence it
//! produces an observation, hands it to the durable store without waiting,
//! derives the alert flag from the threshold registry, and pushes the
//! enriched payload to the outbound channel. The loop holds no lock across
//! any await point, and storage latency never gates the client feed.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::Message;
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crowdscope_core::observation::{Observation, ObservationSource};
use crowdscope_core::thresholds::ThresholdRegistry;
use crowdscope_core::types::Timestamp;

use crate::store::ObservationStore;

/// One JSON text message emitted per tick.
#[derive(Debug, Clone, Serialize)]
pub struct StreamPayload {
    pub location_id: String,
    pub count: i32,
    pub density: f64,
    /// ISO-8601 with UTC offset (chrono's RFC 3339 serde format).
    pub timestamp: Timestamp,
    pub alert: bool,
}

impl StreamPayload {
    fn new(observation: &Observation, alert: bool) -> Self {
        Self {
            location_id: observation.location_id.clone(),
            count: observation.count,
            density: observation.density,
            timestamp: observation.observed_at,
            alert,
        }
    }
}

/// How a session terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The client went away. Expected, not an error.
    Disconnect,
    /// Producing or serializing an observation failed. The session ends;
    /// other sessions are unaffected.
    Fault,
}

/// State for one active streaming connection.
pub struct StreamSession<S> {
    location_id: String,
    source: S,
    store: ObservationStore,
    thresholds: Arc<ThresholdRegistry>,
    interval: Duration,
    outbound: mpsc::UnboundedSender<Message>,
    cancel: CancellationToken,
}

impl<S: ObservationSource> StreamSession<S> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        location_id: String,
        source: S,
        store: ObservationStore,
        thresholds: Arc<ThresholdRegistry>,
        interval: Duration,
        outbound: mpsc::UnboundedSender<Message>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            location_id,
            source,
            store,
            thresholds,
            interval,
            outbound,
            cancel,
        }
    }

    /// Run the produce/store/send loop until disconnect, cancellation, or
    /// a fault. Cancellation stops the loop within one interval.
    pub async fn run(mut self) -> SessionEnd {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                () = self.cancel.cancelled() => return SessionEnd::Disconnect,
                _ = ticker.tick() => {}
            }

            let produced = tokio::select! {
                () = self.cancel.cancelled() => return SessionEnd::Disconnect,
                result = self.source.produce(&self.location_id) => result,
            };
            let observation = match produced {
                Ok(obs) => obs,
                Err(e) => {
                    tracing::error!(
                        location_id = %self.location_id,
                        error = %e,
                        "Observation source failed, ending session"
                    );
                    return SessionEnd::Fault;
                }
            };

            // Dispatch the store write before the client send (program
            // order); completion order between the two is unspecified.
            self.store.append(observation.clone());

            let alert = self
                .thresholds
                .alert_for(&observation.location_id, observation.count);

            let payload = StreamPayload::new(&observation, alert);
            let text = match serde_json::to_string(&payload) {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(
                        location_id = %self.location_id,
                        error = %e,
                        "Failed to serialize stream payload, ending session"
                    );
                    return SessionEnd::Fault;
                }
            };

            if self.outbound.send(Message::Text(text.into())).is_err() {
                // The forwarder task is gone, so the client is too.
                return SessionEnd::Disconnect;
            }
        }
    }
}
