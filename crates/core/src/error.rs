//! Domain error taxonomy.

use crate::types::DbId;

/// Errors produced by the domain core.
///
/// HTTP mapping lives in the API crate; the core only distinguishes the
/// cases that callers handle differently.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Caller-supplied input failed validation. Maps to a client error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An unrecoverable internal fault (e.g. a capture backend failure).
    #[error("Internal error: {0}")]
    Internal(String),
}
