//! One-shot response handle
//!
//! A `ResponseHandle` is the caller-owned representation of one HTTP
//! reply. It moves through an explicit state machine:
//!
//! ```text
//! Unread --take_body--> Read --close--> Closed
//!    \___________________close__________/^
//! ```
//!
//! Status and header inspection are legal in every state and never change
//! it. The body may be consumed at most once; once the decoded JSON has
//! been cached, later consumers share read-only references instead of
//! re-reading the body.

use thiserror::Error;

use super::StatusCode;
use crate::request::Headers;

/// Lifecycle state of a [`ResponseHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    /// Body has not been consumed yet.
    Unread,
    /// Body has been consumed exactly once.
    Read,
    /// Handle has been released.
    Closed,
}

/// Errors from illegal response-handle operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandleError {
    /// The body was already consumed by an earlier read.
    #[error("body already consumed")]
    BodyAlreadyConsumed,

    /// The handle was released and no longer owns a body.
    #[error("handle closed")]
    Closed,
}

/// The caller-owned result of one executed HTTP request.
#[derive(Debug)]
pub struct ResponseHandle {
    status: StatusCode,
    headers: Headers,
    body: Option<Vec<u8>>,
    cached_json: Option<serde_json::Value>,
    state: HandleState,
}

impl ResponseHandle {
    /// Creates a handle in the `Unread` state from raw response data.
    #[must_use]
    pub fn new(status: impl Into<StatusCode>, headers: Headers, body: Vec<u8>) -> Self {
        Self {
            status: status.into(),
            headers,
            body: Some(body),
            cached_json: None,
            state: HandleState::Unread,
        }
    }

    /// Returns the numeric status code. Legal in any state.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns the status code with its semantic helpers.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response headers as received.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Gets a response header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> HandleState {
        self.state
    }

    /// Consumes the body, driving the handle `Unread` → `Read`.
    ///
    /// # Errors
    ///
    /// Returns [`HandleError::BodyAlreadyConsumed`] in the `Read` state
    /// and [`HandleError::Closed`] in the `Closed` state.
    pub fn take_body(&mut self) -> Result<Vec<u8>, HandleError> {
        match self.state {
            HandleState::Read => Err(HandleError::BodyAlreadyConsumed),
            HandleState::Closed => Err(HandleError::Closed),
            HandleState::Unread => {
                self.state = HandleState::Read;
                Ok(self.body.take().unwrap_or_default())
            }
        }
    }

    /// Stores the decoded JSON tree for later read-only consumers.
    pub fn cache_json(&mut self, value: serde_json::Value) {
        self.cached_json = Some(value);
    }

    /// Returns the decoded JSON tree, if the body has been decoded.
    #[must_use]
    pub const fn cached_json(&self) -> Option<&serde_json::Value> {
        self.cached_json.as_ref()
    }

    /// Releases the handle, driving it to `Closed` from any state.
    ///
    /// Idempotent; the undecoded body, if any, is dropped.
    pub fn close(&mut self) {
        self.body = None;
        self.state = HandleState::Closed;
    }
}
