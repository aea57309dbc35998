//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// A missing row on lookup is not an error; lookups return `Option`.
/// `NotFound` is reserved for writes whose target row vanished between
/// the lookup and the write.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}
