//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port with a single
//! `reqwest::blocking::Client` built once and shared by every call;
//! requests are per-call values, the connection machinery is not.

use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::Client;
use tracing::debug;

use apiprobe_application::ports::{HttpTransport, TransportError};
use apiprobe_domain::{Headers, HttpMethod, RequestSpec, ResponseHandle};

/// Configuration for [`ReqwestTransport`].
///
/// The absence of a timeout is an explicit choice: `timeout` defaults to
/// `None`, meaning a call may block indefinitely on an unresponsive
/// server unless the test suite opts into a bound. There is no retry in
/// any configuration.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout; `None` disables the bound entirely.
    pub timeout: Option<Duration>,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: concat!("apiprobe/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl TransportConfig {
    /// Returns a configuration with the given per-request timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::default()
        }
    }
}

/// Blocking HTTP transport backed by reqwest.
///
/// Created once per process and injected into the executor; every call
/// sends exactly one request on the shared client. The returned
/// [`ResponseHandle`] owns the fully-received body, so releasing the
/// network resources is just dropping or closing the handle.
pub struct ReqwestTransport {
    client: Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// Creates the transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Io(e.to_string()))?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// Converts the domain method to a reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to the port's `TransportError` taxonomy.
    fn map_error(&self, error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                timeout_ms: self
                    .timeout
                    .map_or(0, |t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
            };
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return TransportError::Dns { host, message };
            }
            if lowered.contains("refused") {
                return TransportError::ConnectionRefused {
                    host,
                    port: error
                        .url()
                        .and_then(url::Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return TransportError::ConnectionFailed(message);
        }

        if error.is_decode() {
            return TransportError::MalformedResponse(error.to_string());
        }

        TransportError::Io(error.to_string())
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: &RequestSpec) -> Result<ResponseHandle, TransportError> {
        let url = url::Url::parse(&request.url)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {}", request.url)))?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url);

        // Only headers the caller supplied; nothing is added implicitly,
        // in particular no content-type for raw bodies.
        for header in &request.headers {
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        debug!(method = %request.method, url = %request.url, "executing request");

        // Blocks until the status line and headers are in.
        let response = builder.send().map_err(|e| self.map_error(&e))?;

        let status = response.status().as_u16();
        let headers: Headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or("<binary>").to_string(),
                )
            })
            .collect();

        // The body is received eagerly so the handle owns everything and
        // release is a plain drop.
        let body = response
            .bytes()
            .map_err(|e| self.map_error(&e))?
            .to_vec();

        Ok(ResponseHandle::new(status, headers, body))
    }
}
