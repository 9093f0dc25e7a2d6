//! Apiprobe Domain - Core request/response types
//!
//! This crate defines the domain model for the apiprobe REST test client.
//! All types here are pure Rust with no I/O dependencies: request values,
//! the header set, the status code, and the one-shot response handle.

pub mod error;
pub mod request;
pub mod response;

pub use error::{DomainError, DomainResult};
pub use request::{Header, Headers, HttpMethod, RequestSpec};
pub use response::{HandleError, HandleState, ResponseHandle, StatusCode};
