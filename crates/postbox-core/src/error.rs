//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    #[error("Item with id: {id} was not found")]
    NotFound { id: i64 },
}
