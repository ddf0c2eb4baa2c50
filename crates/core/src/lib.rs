//! Crowdscope domain core.
//!
//! I/O-free building blocks shared by the persistence and API crates:
//! the observation model, the per-location threshold registry, validation
//! helpers, and the error taxonomy.

pub mod aggregate;
pub mod error;
pub mod observation;
pub mod thresholds;
pub mod types;
pub mod validation;
