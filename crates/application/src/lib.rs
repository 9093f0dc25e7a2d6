//! Apiprobe Application - Request executor and ports
//!
//! This crate holds the core of the test client: the [`RequestExecutor`]
//! facade over GET/POST/PUT/DELETE, the [`HttpTransport`] port it drives,
//! the error taxonomy, and the JSON-path extractor used by assertions.

pub mod error;
pub mod executor;
pub mod json_path;
pub mod ports;

pub use error::{ExecutorError, ExecutorResult};
pub use executor::RequestExecutor;
pub use json_path::{JsonPathError, extract, extract_string};
pub use ports::{HttpTransport, TransportError};
