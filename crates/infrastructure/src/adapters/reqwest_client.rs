//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It resolves probe paths against a fixed base address and sends JSON
//! bodies with an `application/json` content type.

use std::error::Error as _;
use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Method, Url};
use taskcheck_application::ports::{HttpClient, HttpClientError};
use taskcheck_domain::{HttpMethod, ProbeRequest, ProbeResponse};
use tracing::trace;

/// HTTP client implementation using reqwest.
///
/// Wraps `reqwest::Client` together with the base address of the service
/// under test and implements the `HttpClient` port from the application
/// layer.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    base_url: Url,
    timeout: Option<Duration>,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client for the given base address.
    ///
    /// Default configuration:
    /// - No request timeout (a hung request blocks the run)
    /// - Redirects are not followed, so status codes reach the test as sent
    /// - User-Agent: "taskcheck/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the base address cannot carry paths or the
    /// client cannot be created.
    pub fn new(base_url: Url) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("taskcheck/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Self::with_client(client, base_url)
    }

    /// Creates a new HTTP client with a custom reqwest client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base address cannot carry paths
    /// (e.g. `mailto:` or `data:` URLs).
    pub fn with_client(client: Client, base_url: Url) -> Result<Self, HttpClientError> {
        Ok(Self {
            client,
            base_url: Self::normalize_base(base_url)?,
            timeout: None,
        })
    }

    /// Sets a per-request timeout (builder pattern).
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base address requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves the request path against the base address.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not relative or does not form a
    /// valid URL.
    pub fn url_for(&self, request: &ProbeRequest) -> Result<Url, HttpClientError> {
        let path = request
            .relative_path()
            .map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;
        self.base_url
            .join(path)
            .map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {path}")))
    }

    /// Ensures the base path ends with `/` so joins append instead of
    /// replacing the last segment.
    fn normalize_base(mut base_url: Url) -> Result<Url, HttpClientError> {
        if base_url.cannot_be_a_base() {
            return Err(HttpClientError::InvalidUrl(format!(
                "{base_url} cannot be used as a base address"
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(base_url)
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout: Option<Duration>) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout {
                timeout_ms: timeout
                    .map_or(0, |t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
            };
        }

        let message = error_chain(error);

        if error.is_connect() {
            if message.to_lowercase().contains("refused") {
                let url = error.url();
                return HttpClientError::ConnectionRefused {
                    host: url
                        .and_then(Url::host_str)
                        .unwrap_or("unknown")
                        .to_string(),
                    port: url.and_then(Url::port_or_known_default).unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_builder() {
            return HttpClientError::InvalidBody(message);
        }

        HttpClientError::Other(message)
    }
}

/// Joins an error with all of its sources.
///
/// reqwest keeps the OS-level cause ("Connection refused") in the source
/// chain, not in its own message.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &ProbeRequest,
    ) -> impl Future<Output = Result<ProbeResponse, HttpClientError>> + Send {
        // Resolve everything borrowed from the request before the async block
        let url = self.url_for(request);
        let method = Self::to_reqwest_method(request.method);
        let body = request.body.clone();
        let timeout = self.timeout;

        async move {
            let url = url?;

            trace!(%method, %url, "sending request");

            // Build request
            let mut builder = self.client.request(method, url);
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(body) = &body {
                builder = builder.json(body);
            }

            // Execute request
            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout))?;

            let status = response.status().as_u16();
            trace!(status, "received response headers");

            // Read body
            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::Other(format!("failed to read body: {e}")))?
                .to_vec();

            Ok(ProbeResponse::new(status, body_bytes))
        }
    }
}
