//! Request handlers.

pub mod config;
pub mod locations;
