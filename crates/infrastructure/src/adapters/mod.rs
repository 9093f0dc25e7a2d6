//! Transport adapters
//!
//! Concrete implementations of the application layer's `HttpTransport`
//! port.

mod reqwest_transport;

pub use reqwest_transport::{ReqwestTransport, TransportConfig};
