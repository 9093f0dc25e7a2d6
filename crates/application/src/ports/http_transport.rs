//! HTTP transport port

use thiserror::Error;

use apiprobe_domain::{RequestSpec, ResponseHandle};

/// Failures while carrying out the HTTP exchange itself.
///
/// A non-2xx status is never a transport error; these variants cover only
/// failure to complete the exchange, each carrying the underlying cause.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The URL was rejected by the transport.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// DNS resolution failed for the target host.
    #[error("DNS resolution failed for {host}: {message}")]
    Dns {
        /// Host that could not be resolved.
        host: String,
        /// Underlying resolver message.
        message: String,
    },

    /// The server actively refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Host that refused the connection.
        host: String,
        /// Port the connection was attempted on.
        port: u16,
    },

    /// The connection could not be established for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The configured timeout elapsed before the response arrived.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// An I/O failure occurred during send or receive.
    #[error("I/O failure: {0}")]
    Io(String),

    /// The response could not be parsed as HTTP (truncated or malformed
    /// framing).
    #[error("malformed HTTP response: {0}")]
    MalformedResponse(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing the
/// executor to be independent of any specific HTTP library. Execution is
/// synchronous: `execute` blocks the calling thread until the response
/// status line and headers are available, then returns an owning handle
/// with the body already received.
///
/// Implementations are `Send + Sync` so one transport instance can be
/// shared by every call for the life of the process.
pub trait HttpTransport: Send + Sync {
    /// Executes one HTTP request, exactly once, with no retries.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] only when the HTTP exchange itself
    /// fails; any received status code is a successful return.
    fn execute(&self, request: &RequestSpec) -> Result<ResponseHandle, TransportError>;
}
