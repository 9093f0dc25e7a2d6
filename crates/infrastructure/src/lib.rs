//! Apiprobe Infrastructure - Adapters and configuration
//!
//! This crate provides the concrete transport behind the
//! `HttpTransport` port, the properties-file loader that supplies the
//! base host URL to test suites, and explicit tracing initialization.

pub mod adapters;
pub mod config;
pub mod logging;

pub use adapters::{ReqwestTransport, TransportConfig};
pub use config::{ConfigError, PropertySource};
