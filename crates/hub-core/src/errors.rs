//! Error types for the pure review core.
//!
//! Storage and configuration errors live in their own crates (`DatabaseError`,
//! `ConfigError`). The derivation engine itself has no failure modes.

use thiserror::Error;

/// Errors raised when building or validating core entities.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
