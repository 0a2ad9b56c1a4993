//! Typed views of the resources the users/tasks API returns.

use serde::{Deserialize, Serialize};

/// A user as returned by `GET /user/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Email the user was created with.
    pub email: String,
    /// False once the user has been soft-deleted.
    pub active: bool,
}

/// A task as returned in the array of `GET /user/{id}/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Free-form task description.
    pub description: String,
    /// False once the task has been soft-deleted.
    pub active: bool,
}
