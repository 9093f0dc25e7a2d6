//! Tracing initialization
//!
//! Nothing in the library logs through an ambient global by default; the
//! test suite decides when a subscriber exists. [`init`] installs a
//! process-wide subscriber once, while [`init_scoped`] ties the
//! subscriber's lifetime to a guard for per-test setups.

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

fn subscriber() -> impl tracing::Subscriber + Send + Sync {
    Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
}

/// Installs the process-wide subscriber (console output, `RUST_LOG`
/// filtering, `info` default).
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    subscriber().try_init()
}

/// Installs a subscriber scoped to the current thread.
///
/// Logging stops when the returned guard is dropped, giving the caller an
/// explicit shutdown point.
#[must_use]
pub fn init_scoped() -> DefaultGuard {
    tracing::subscriber::set_default(subscriber())
}
