//! Fixture builder.
//!
//! Creates the users and tasks a case needs through the API under test.
//! Every call creates a new entity on the server; nothing is cached.

use serde_json::json;
use taskcheck_domain::Failure;
use tracing::debug;
use uuid::Uuid;

use crate::ports::HttpClient;
use crate::probe::Probe;

/// Returns a fresh email address for users nobody refers to by email.
#[must_use]
pub fn placeholder_email() -> String {
    format!("random-{}@email.com", Uuid::new_v4().simple())
}

/// Creates users and tasks via a [`Probe`].
#[derive(Debug)]
pub struct Fixtures<'p, C> {
    probe: &'p Probe<C>,
}

impl<'p, C: HttpClient> Fixtures<'p, C> {
    /// Binds a fixture builder to a probe.
    #[must_use]
    pub const fn new(probe: &'p Probe<C>) -> Self {
        Self { probe }
    }

    /// Creates a user with `POST /user` and returns the response body.
    ///
    /// The body is the new user's id. Its shape is not checked here.
    ///
    /// # Errors
    ///
    /// Returns [`Failure::Transport`] if the request could not be completed.
    pub async fn create_user(&self, email: &str) -> Result<String, Failure> {
        let response = self.probe.post("user", json!({ "email": email })).await?;
        let user_id = response.text();
        debug!(email, %user_id, status = response.status, "created user fixture");
        Ok(user_id)
    }

    /// Creates a task with `POST /user/{userId}/tasks` and returns the
    /// response body (the new task's id).
    ///
    /// Without a `user_id`, a user with a placeholder email is created first.
    ///
    /// # Errors
    ///
    /// Returns [`Failure::Transport`] if either request could not be completed.
    pub async fn create_task(
        &self,
        description: &str,
        user_id: Option<&str>,
    ) -> Result<String, Failure> {
        let user_id = match user_id {
            Some(id) => id.to_owned(),
            None => self.create_user(&placeholder_email()).await?,
        };

        let response = self
            .probe
            .post(
                &format!("user/{user_id}/tasks"),
                json!({ "description": description }),
            )
            .await?;
        let task_id = response.text();
        debug!(%user_id, %task_id, status = response.status, "created task fixture");
        Ok(task_id)
    }
}
