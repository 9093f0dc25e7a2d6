//! Request specification type

use url::Url;

use super::{Headers, HttpMethod};
use crate::error::{DomainError, DomainResult};

/// Complete specification for one HTTP request.
///
/// A `RequestSpec` is built fresh per call, owned by the call that creates
/// it, and discarded after execution. The body is present only for POST
/// and PUT and is sent verbatim; no content-type is implied by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Target URL (scheme + host + path + query)
    pub url: String,
    /// HTTP headers
    pub headers: Headers,
    /// Raw request body, present only for methods that carry one
    pub body: Option<String>,
}

impl RequestSpec {
    /// Creates a GET request for the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Creates a POST request with a raw string payload.
    #[must_use]
    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Headers::new(),
            body: Some(body.into()),
        }
    }

    /// Creates a PUT request with a raw string payload.
    #[must_use]
    pub fn put(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Put,
            url: url.into(),
            headers: Headers::new(),
            body: Some(body.into()),
        }
    }

    /// Creates a DELETE request for the given URL.
    #[must_use]
    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Delete,
            url: url.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Copies every header pair from the caller-supplied set.
    ///
    /// Existing names are overwritten (last write wins).
    pub fn attach_headers(&mut self, headers: &Headers) {
        for header in headers {
            self.headers.set(header.name.clone(), header.value.clone());
        }
    }

    /// Validates the URL and returns the parsed form.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the URL does not parse and
    /// `DomainError::UnsupportedScheme` if the scheme is not http or https.
    pub fn parse_url(&self) -> DomainResult<Url> {
        let parsed = Url::parse(&self.url)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.url)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(DomainError::UnsupportedScheme(other.to_string())),
        }
    }
}
