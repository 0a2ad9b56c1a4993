//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building probe requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A request path is not a relative path.
    #[error("invalid request path: {0}")]
    InvalidPath(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
