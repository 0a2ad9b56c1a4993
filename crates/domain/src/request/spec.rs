//! Probe request specification

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::HttpMethod;
use crate::error::{DomainError, DomainResult};

/// One request the probe sends to the service under test.
///
/// The path is relative to the configured base address. A leading `/` is
/// accepted and stripped, so `"user/123"` and `"/user/123"` are the same
/// request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the base address
    pub path: String,
    /// Optional JSON body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ProbeRequest {
    /// Creates a request without a body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attaches a JSON body (builder pattern).
    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the path without its leading slash.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is absolute (`http://...`) or
    /// protocol-relative (`//host`), since either would escape the base
    /// address.
    pub fn relative_path(&self) -> DomainResult<&str> {
        if self.path.contains("://") || self.path.starts_with("//") {
            return Err(DomainError::InvalidPath(self.path.clone()));
        }
        Ok(self.path.trim_start_matches('/'))
    }

    /// Returns true if a JSON body is attached.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

impl std::fmt::Display for ProbeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} /{}", self.method, self.path.trim_start_matches('/'))
    }
}
