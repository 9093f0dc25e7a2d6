//! Port definitions (interfaces)
//!
//! Ports define the boundary between the executor and external systems.
//! The single port here is the HTTP transport, implemented by an adapter
//! in the infrastructure layer.

mod http_transport;

pub use http_transport::{HttpTransport, TransportError};
