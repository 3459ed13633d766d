//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Errors raised by a remote post API adapter.
///
/// These never cross the view model boundary: the view model logs them and
/// keeps its current state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, timeout, DNS...).
    #[error("Network error: {0}")]
    Network(String),

    /// The body was not JSON, or not the JSON we expected.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The server answered with a non-2xx status.
    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),
}

/// Post store errors (server-side storage).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

// Lets in-process adapters report store failures the way HTTP would.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Constraint(_) => ApiError::UnexpectedStatus(400),
        }
    }
}
