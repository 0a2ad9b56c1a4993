//! HTTP Client port

use std::future::Future;

use taskcheck_domain::{Failure, ProbeRequest, ProbeResponse};
use thiserror::Error;

/// Errors the transport can report for a single request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// The target URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The service refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Host that refused the connection.
        host: String,
        /// Port that refused the connection.
        port: u16,
    },

    /// The connection could not be established for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The request body could not be encoded.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Any other transport error.
    #[error("{0}")]
    Other(String),
}

impl From<HttpClientError> for Failure {
    fn from(error: HttpClientError) -> Self {
        Self::Transport(error.to_string())
    }
}

/// Port for executing probe requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the harness to be independent of specific HTTP libraries.
pub trait HttpClient: Send + Sync {
    /// Executes a request and returns the normalized response.
    ///
    /// Any status code the service answers with is a successful call; only
    /// transport problems are errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues,
    /// timeout, or other HTTP-related problems.
    fn execute(
        &self,
        request: &ProbeRequest,
    ) -> impl Future<Output = Result<ProbeResponse, HttpClientError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_errors_become_transport_failures() {
        let failure = Failure::from(HttpClientError::ConnectionRefused {
            host: "localhost".to_string(),
            port: 8080,
        });
        assert_eq!(
            failure,
            Failure::Transport("connection refused by localhost:8080".to_string())
        );

        let failure = Failure::from(HttpClientError::Timeout { timeout_ms: 5000 });
        assert!(matches!(failure, Failure::Transport(_)));
        assert_eq!(
            failure.to_string(),
            "transport failure: request timed out after 5000ms"
        );
    }
}
