//! WebSocket streaming infrastructure.
//!
//! - [`handler`]: axum upgrade handler wiring a connection to a session.
//! - [`session`]: the per-connection produce/store/send loop.

pub mod handler;
pub mod session;

pub use handler::ws_stream;
pub use session::{SessionEnd, StreamPayload, StreamSession};
