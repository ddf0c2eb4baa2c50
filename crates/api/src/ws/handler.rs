//! WebSocket upgrade handler for observation streams.

use std::time::Duration;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crowdscope_core::observation::SimulatedSource;

use crate::state::AppState;
use crate::ws::session::{SessionEnd, StreamSession};

/// GET /ws/stream/{location_id} -- upgrade and start streaming.
pub async fn ws_stream(
    ws: WebSocketUpgrade,
    Path(location_id): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, location_id, state))
}

/// Manage one streaming connection after upgrade.
///
/// Splits the socket, then:
///   1. Spawns a forwarder task pumping session output into the sink.
///   2. Spawns a watcher that cancels the session when the client closes
///      the connection (or the transport errors).
///   3. Runs the session loop on the current task.
///   4. Cleans up both helper tasks on termination.
async fn handle_socket(socket: WebSocket, location_id: String, state: AppState) {
    let conn_id = uuid::Uuid::new_v4();
    tracing::info!(conn_id = %conn_id, location_id = %location_id, "Stream connected");

    let (mut sink, mut stream) = socket.split();
    let (outbound, mut rx) = mpsc::unbounded_channel::<Message>();
    let cancel = CancellationToken::new();

    // Forwarder: channel -> WebSocket sink. Exits (dropping `rx`) when the
    // sink fails, which the session observes as a disconnect.
    let forward_conn_id = conn_id;
    let forward_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %forward_conn_id, "WebSocket sink closed");
                break;
            }
        }
    });

    // Watcher: cancel the session as soon as the client goes away. No
    // client-to-server messages are consumed mid-stream.
    let watch_cancel = cancel.clone();
    let watch_conn_id = conn_id;
    let watch_task = tokio::spawn(async move {
        while let Some(result) = stream.next().await {
            match result {
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(conn_id = %watch_conn_id, error = %e, "WebSocket receive error");
                    break;
                }
            }
        }
        watch_cancel.cancel();
    });

    // Each session owns its own source instance.
    let session = StreamSession::new(
        location_id.clone(),
        SimulatedSource::new(),
        state.store.clone(),
        state.thresholds.clone(),
        Duration::from_millis(state.config.stream_interval_ms),
        outbound,
        cancel.clone(),
    );

    match session.run().await {
        SessionEnd::Disconnect => {
            tracing::info!(conn_id = %conn_id, location_id = %location_id, "Stream disconnected");
        }
        SessionEnd::Fault => {
            tracing::error!(conn_id = %conn_id, location_id = %location_id, "Stream ended on fault");
        }
    }

    cancel.cancel();
    watch_task.abort();
    forward_task.abort();
}
