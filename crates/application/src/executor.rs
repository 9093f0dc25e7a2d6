//! Request executor facade
//!
//! One public operation per HTTP verb, a shared injected transport, and
//! the two response-inspection operations. The executor validates the
//! URL, copies every caller-supplied header onto the request, executes
//! synchronously through the transport, and hands back the owning
//! [`ResponseHandle`].

use std::sync::Arc;

use tracing::{debug, info};

use apiprobe_domain::{Headers, RequestSpec, ResponseHandle};

use crate::error::{ExecutorError, ExecutorResult};
use crate::ports::HttpTransport;

/// Facade for issuing HTTP requests against a REST API under test.
///
/// The transport is created once, injected here, and shared by every
/// call for the life of the process; each call still gets its own
/// request value and its own response handle. A non-2xx status is a
/// normal, successful return; only failure to complete the HTTP
/// exchange is an error. Exactly one attempt per call, no retries.
///
/// # Example
///
/// ```ignore
/// let transport = Arc::new(ReqwestTransport::new(&TransportConfig::default())?);
/// let executor = RequestExecutor::new(transport);
///
/// let mut response = executor.get("http://localhost/api/users?page=2")?;
/// assert_eq!(executor.status_code(&response), 200);
/// let json = executor.response_json(&mut response)?;
/// ```
pub struct RequestExecutor<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> RequestExecutor<T> {
    /// Creates an executor around a shared transport.
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Issues a GET request with no headers and no body.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutorError::InvalidRequest`] for a malformed URL or
    /// unsupported scheme, and [`ExecutorError::Transport`] /
    /// [`ExecutorError::Protocol`] when the exchange fails.
    pub fn get(&self, url: &str) -> ExecutorResult<ResponseHandle> {
        self.dispatch(RequestSpec::get(url))
    }

    /// Issues a GET request with the caller-supplied headers attached.
    ///
    /// Every pair in `headers` is copied onto the request before send.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::get`].
    pub fn get_with_headers(&self, url: &str, headers: &Headers) -> ExecutorResult<ResponseHandle> {
        let mut spec = RequestSpec::get(url);
        spec.attach_headers(headers);
        self.dispatch(spec)
    }

    /// Issues a POST request with a raw string payload.
    ///
    /// The body is sent verbatim; no content-type is set unless the
    /// caller supplies one via `headers`.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::get`].
    pub fn post(&self, url: &str, body: &str, headers: &Headers) -> ExecutorResult<ResponseHandle> {
        let mut spec = RequestSpec::post(url, body);
        spec.attach_headers(headers);
        self.dispatch(spec)
    }

    /// Issues a PUT request. Identical contract to [`Self::post`],
    /// different method.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::get`].
    pub fn put(&self, url: &str, body: &str, headers: &Headers) -> ExecutorResult<ResponseHandle> {
        let mut spec = RequestSpec::put(url, body);
        spec.attach_headers(headers);
        self.dispatch(spec)
    }

    /// Issues a DELETE request with no headers and no body.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::get`].
    pub fn delete(&self, url: &str) -> ExecutorResult<ResponseHandle> {
        self.dispatch(RequestSpec::delete(url))
    }

    /// Returns the integer status code of a response.
    ///
    /// No side effects and no state change; legal in any handle state and
    /// any number of times.
    #[must_use]
    pub fn status_code(&self, response: &ResponseHandle) -> u16 {
        response.status_code()
    }

    /// Reads the entire body once as UTF-8 text and parses it as JSON.
    ///
    /// Drives the handle `Unread` → `Read` and caches the decoded tree on
    /// it, so later consumers can share `response.cached_json()` without
    /// another read.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutorError::Resource`] on a `Read` or `Closed` handle
    /// and [`ExecutorError::Parse`] if the text is not valid JSON.
    pub fn response_json(&self, response: &mut ResponseHandle) -> ExecutorResult<serde_json::Value> {
        let body = response.take_body()?;
        let text = String::from_utf8(body)
            .map_err(|e| ExecutorError::Parse(format!("body is not valid UTF-8: {e}")))?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| ExecutorError::Parse(e.to_string()))?;
        debug!(status = response.status_code(), "decoded response body as JSON");
        response.cache_json(value.clone());
        Ok(value)
    }

    /// Validates, executes, and wraps one request.
    fn dispatch(&self, spec: RequestSpec) -> ExecutorResult<ResponseHandle> {
        spec.parse_url()?;
        info!(method = %spec.method, url = %spec.url, "sending request");
        let response = self.transport.execute(&spec).map_err(ExecutorError::from)?;
        info!(status = response.status_code(), "received response");
        Ok(response)
    }
}

impl<T: HttpTransport> Clone for RequestExecutor<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use apiprobe_domain::{HandleError, HttpMethod};

    use super::*;
    use crate::ports::TransportError;

    /// Transport double that records the request it was given and returns
    /// a canned response.
    struct FakeTransport {
        status: u16,
        body: &'static str,
        seen: Mutex<Option<RequestSpec>>,
    }

    impl FakeTransport {
        fn returning(status: u16, body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body,
                seen: Mutex::new(None),
            })
        }

        fn seen(&self) -> RequestSpec {
            self.seen.lock().unwrap().clone().unwrap()
        }
    }

    impl HttpTransport for FakeTransport {
        fn execute(&self, request: &RequestSpec) -> Result<ResponseHandle, TransportError> {
            *self.seen.lock().unwrap() = Some(request.clone());
            Ok(ResponseHandle::new(
                self.status,
                Headers::new(),
                self.body.as_bytes().to_vec(),
            ))
        }
    }

    /// Transport double that always fails with the given error.
    struct FailingTransport(TransportError);

    impl HttpTransport for FailingTransport {
        fn execute(&self, _request: &RequestSpec) -> Result<ResponseHandle, TransportError> {
            Err(self.0.clone())
        }
    }

    #[test]
    fn test_get_builds_bare_request() {
        let transport = FakeTransport::returning(200, "{}");
        let executor = RequestExecutor::new(Arc::clone(&transport));
        executor.get("http://localhost/api/users").unwrap();

        let seen = transport.seen();
        assert_eq!(seen.method, HttpMethod::Get);
        assert_eq!(seen.url, "http://localhost/api/users");
        assert!(seen.headers.is_empty());
        assert!(seen.body.is_none());
    }

    #[test]
    fn test_caller_headers_reach_the_transport() {
        let transport = FakeTransport::returning(200, "{}");
        let executor = RequestExecutor::new(Arc::clone(&transport));

        let mut headers = Headers::new();
        headers.set("X-Test", "1");
        executor
            .get_with_headers("http://localhost/", &headers)
            .unwrap();

        assert_eq!(transport.seen().headers.get("X-Test"), Some("1"));
    }

    #[test]
    fn test_post_sends_exact_body_without_content_type() {
        let transport = FakeTransport::returning(201, "{}");
        let executor = RequestExecutor::new(Arc::clone(&transport));
        executor
            .post("http://localhost/api/users", r#"{"name":"x"}"#, &Headers::new())
            .unwrap();

        let seen = transport.seen();
        assert_eq!(seen.method, HttpMethod::Post);
        assert_eq!(seen.body.as_deref(), Some(r#"{"name":"x"}"#));
        assert!(!seen.headers.contains("content-type"));
    }

    #[test]
    fn test_put_mirrors_post_contract() {
        let transport = FakeTransport::returning(200, "{}");
        let executor = RequestExecutor::new(Arc::clone(&transport));
        executor
            .put("http://localhost/api/users/2", r#"{"name":"y"}"#, &Headers::new())
            .unwrap();

        let seen = transport.seen();
        assert_eq!(seen.method, HttpMethod::Put);
        assert_eq!(seen.body.as_deref(), Some(r#"{"name":"y"}"#));
    }

    #[test]
    fn test_delete_has_no_body() {
        let transport = FakeTransport::returning(204, "");
        let executor = RequestExecutor::new(Arc::clone(&transport));
        executor.delete("http://localhost/api/users/2").unwrap();

        let seen = transport.seen();
        assert_eq!(seen.method, HttpMethod::Delete);
        assert!(seen.body.is_none());
    }

    #[test]
    fn test_non_2xx_is_a_normal_return() {
        let transport = FakeTransport::returning(404, "not found");
        let executor = RequestExecutor::new(transport);
        let response = executor.get("http://localhost/missing").unwrap();
        assert_eq!(executor.status_code(&response), 404);
    }

    #[test]
    fn test_invalid_url_rejected_before_send() {
        let transport = FakeTransport::returning(200, "{}");
        let executor = RequestExecutor::new(Arc::clone(&transport));
        let err = executor.get("not a url").unwrap_err();
        assert!(matches!(err, ExecutorError::InvalidRequest(_)));
        assert!(transport.seen.lock().unwrap().is_none());
    }

    #[test]
    fn test_transport_failure_surfaces_unmodified() {
        let executor = RequestExecutor::new(Arc::new(FailingTransport(
            TransportError::Dns {
                host: "no.such.host".to_string(),
                message: "resolution failed".to_string(),
            },
        )));
        let err = executor.get("http://no.such.host/").unwrap_err();
        assert!(matches!(
            err,
            ExecutorError::Transport(TransportError::Dns { .. })
        ));
    }

    #[test]
    fn test_response_json_decodes_object() {
        let transport = FakeTransport::returning(200, r#"{"a":1}"#);
        let executor = RequestExecutor::new(transport);
        let mut response = executor.get("http://localhost/").unwrap();
        let json = executor.response_json(&mut response).unwrap();
        assert_eq!(json["a"], 1);
        // The decoded tree is cached for later consumers.
        assert_eq!(response.cached_json().unwrap()["a"], 1);
    }

    #[test]
    fn test_second_response_json_fails_with_resource_error() {
        let transport = FakeTransport::returning(200, r#"{"a":1}"#);
        let executor = RequestExecutor::new(transport);
        let mut response = executor.get("http://localhost/").unwrap();
        executor.response_json(&mut response).unwrap();

        let err = executor.response_json(&mut response).unwrap_err();
        assert!(matches!(
            err,
            ExecutorError::Resource(HandleError::BodyAlreadyConsumed)
        ));
    }

    #[test]
    fn test_response_json_on_closed_handle_fails() {
        let transport = FakeTransport::returning(200, "{}");
        let executor = RequestExecutor::new(transport);
        let mut response = executor.get("http://localhost/").unwrap();
        response.close();
        let err = executor.response_json(&mut response).unwrap_err();
        assert!(matches!(err, ExecutorError::Resource(HandleError::Closed)));
    }

    #[test]
    fn test_invalid_json_body_fails_with_parse_error() {
        let transport = FakeTransport::returning(200, "<html>oops</html>");
        let executor = RequestExecutor::new(transport);
        let mut response = executor.get("http://localhost/").unwrap();
        let err = executor.response_json(&mut response).unwrap_err();
        assert!(matches!(err, ExecutorError::Parse(_)));
    }

    #[test]
    fn test_status_code_readable_after_json_decode() {
        let transport = FakeTransport::returning(200, r#"{"a":1}"#);
        let executor = RequestExecutor::new(transport);
        let mut response = executor.get("http://localhost/").unwrap();
        executor.response_json(&mut response).unwrap();
        assert_eq!(executor.status_code(&response), 200);
    }
}
