//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod observation_repo;

pub use observation_repo::ObservationRepo;
