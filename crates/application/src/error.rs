//! Executor error taxonomy
//!
//! Five categories, surfaced unmodified to the caller: a bad request
//! detected before send, a transport failure during the exchange,
//! malformed HTTP framing, an undecodable JSON body, and illegal use of a
//! consumed or closed handle. The executor performs no recovery and no
//! retries; the surrounding test framework turns each of these into a
//! test failure.

use thiserror::Error;

use apiprobe_domain::{DomainError, HandleError};

use crate::ports::TransportError;

/// Errors returned by [`crate::RequestExecutor`] operations.
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// The URL or method was rejected before anything was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] DomainError),

    /// The HTTP exchange failed (DNS, connection, timeout, or I/O).
    #[error("transport failure: {0}")]
    Transport(TransportError),

    /// The response could not be parsed as HTTP.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The response body is not valid UTF-8 JSON.
    #[error("response body is not valid JSON: {0}")]
    Parse(String),

    /// The body was read twice, or the handle was already released.
    #[error("resource error: {0}")]
    Resource(#[from] HandleError),
}

impl From<TransportError> for ExecutorError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::InvalidUrl(msg) => {
                Self::InvalidRequest(DomainError::InvalidUrl(msg))
            }
            TransportError::MalformedResponse(msg) => Self::Protocol(msg),
            other => Self::Transport(other),
        }
    }
}

/// Result type alias for executor operations.
pub type ExecutorResult<T> = Result<T, ExecutorError>;
