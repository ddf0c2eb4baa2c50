//! Route definitions.
//!
//! Route hierarchy:
//!
//! ```text
//! /health                                GET   service + database health
//! /config/threshold                      POST  set per-location alert threshold
//! /ws/stream/{location_id}               GET   WebSocket observation stream
//! /api/locations/{location_id}/latest    GET   latest aggregate (stub)
//! ```

pub mod config;
pub mod health;
pub mod locations;
pub mod stream;
