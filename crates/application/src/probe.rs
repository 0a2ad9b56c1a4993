//! HTTP probe used by test cases.
//!
//! The probe turns a method, a relative path and an optional JSON body into
//! a request on the `HttpClient` port. Transport errors come back as
//! [`Failure::Transport`] so a case can propagate them with `?` exactly like
//! a failed assertion.

use serde_json::Value;
use taskcheck_domain::{Failure, HttpMethod, ProbeRequest, ProbeResponse};
use tracing::{debug, warn};

use crate::fixtures::Fixtures;
use crate::ports::HttpClient;

/// Issues requests against the service under test.
///
/// Each call completes (or fails) before it returns; the probe never has
/// more than one request in flight.
#[derive(Debug)]
pub struct Probe<C> {
    client: C,
}

impl<C: HttpClient> Probe<C> {
    /// Creates a probe on top of the given client.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Returns the fixture builder bound to this probe.
    #[must_use]
    pub const fn fixtures(&self) -> Fixtures<'_, C> {
        Fixtures::new(self)
    }

    /// Sends a prepared request.
    ///
    /// # Errors
    ///
    /// Returns [`Failure::Transport`] if the request could not be completed.
    pub async fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse, Failure> {
        debug!(%request, has_body = request.has_body(), "sending probe request");

        let response = self.client.execute(request).await.map_err(|error| {
            warn!(%request, %error, "probe request failed");
            Failure::from(error)
        })?;

        debug!(
            %request,
            status = response.status,
            bytes = response.len(),
            "probe response received"
        );
        Ok(response)
    }

    /// Builds and sends a request, attaching `body` as JSON when given.
    ///
    /// # Errors
    ///
    /// Returns [`Failure::Transport`] if the request could not be completed.
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<ProbeResponse, Failure> {
        let mut request = ProbeRequest::new(method, path);
        request.body = body;
        self.send(&request).await
    }

    /// Sends a `GET` request.
    ///
    /// # Errors
    ///
    /// Returns [`Failure::Transport`] if the request could not be completed.
    pub async fn get(&self, path: &str) -> Result<ProbeResponse, Failure> {
        self.execute(HttpMethod::Get, path, None).await
    }

    /// Sends a `POST` request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Failure::Transport`] if the request could not be completed.
    pub async fn post(&self, path: &str, body: Value) -> Result<ProbeResponse, Failure> {
        self.execute(HttpMethod::Post, path, Some(body)).await
    }

    /// Sends a `PUT` request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Failure::Transport`] if the request could not be completed.
    pub async fn put(&self, path: &str, body: Value) -> Result<ProbeResponse, Failure> {
        self.execute(HttpMethod::Put, path, Some(body)).await
    }

    /// Sends a `DELETE` request.
    ///
    /// # Errors
    ///
    /// Returns [`Failure::Transport`] if the request could not be completed.
    pub async fn delete(&self, path: &str) -> Result<ProbeResponse, Failure> {
        self.execute(HttpMethod::Delete, path, None).await
    }
}
