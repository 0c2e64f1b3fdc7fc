//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - the outcomes a caller of the post service must handle.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: PostId,
    },

    #[error("Validation failed: missing required field `{field}`")]
    Validation { field: &'static str },

    #[error("Storage unavailable: {0}")]
    Storage(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
