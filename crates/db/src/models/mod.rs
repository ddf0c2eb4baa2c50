//! Database entity models.

pub mod observation;
