//! Domain-level error type shared by all crates.

use crate::types::DbId;

/// Errors produced by domain rules and surfaced through the API layer.
///
/// The API layer maps each variant to an HTTP status:
/// NotFound → 404, Validation → 400, Conflict → 409, Unauthorized → 401,
/// Forbidden → 403, State → 409, Internal → 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup came back empty.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed or out-of-range input. Field-level messages are joined
    /// with "; " when several items fail at once.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A uniqueness or concurrent-modification conflict.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed (role or ownership mismatch).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The operation is invalid for the entity's current status.
    /// Recoverable by changing state first.
    #[error("Invalid state: {0}")]
    State(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a [`CoreError::Validation`] aggregating several item-level
    /// messages into one error.
    ///
    /// Used where a payload carries many items and all failures should be
    /// reported at once instead of failing on the first.
    pub fn validation_from(messages: Vec<String>) -> Self {
        CoreError::Validation(messages.join("; "))
    }
}
