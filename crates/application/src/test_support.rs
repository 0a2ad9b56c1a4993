//! Scripted HTTP client shared by the unit tests in this crate.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use taskcheck_domain::{ProbeRequest, ProbeResponse};

use crate::ports::{HttpClient, HttpClientError};

/// Mock HTTP client that replays queued results and records every request.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<ProbeResponse, HttpClientError>>>,
    seen: Mutex<Vec<ProbeRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and body.
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(ProbeResponse::new(status, body.as_bytes().to_vec())));
        self
    }

    /// Queues a transport error.
    pub fn fail(self, error: HttpClientError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<ProbeRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl HttpClient for ScriptedClient {
    fn execute(
        &self,
        request: &ProbeRequest,
    ) -> impl Future<Output = Result<ProbeResponse, HttpClientError>> + Send {
        self.seen.lock().unwrap().push(request.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpClientError::Other("no scripted reply".to_string())));
        async move { reply }
    }
}
