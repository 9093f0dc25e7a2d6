//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during request validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The URL scheme is not http or https.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A header name is empty or contains illegal characters.
    #[error("invalid header name: {0}")]
    InvalidHeaderName(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
