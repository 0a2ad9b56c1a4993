//! Failure signals raised inside a test case.
//!
//! Every way a case can fail is a variant of [`Failure`]. Test bodies return
//! [`CaseResult`] and propagate failures with `?`, so the first failure ends
//! the case. The runner converts the failure into a failed outcome.

use thiserror::Error;

/// A failure signaled by a running test case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Failure {
    /// An expectation about a response did not hold.
    #[error("Expected [true] but got [false] - {0}")]
    Assertion(String),

    /// The probe could not complete a request.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A body expected to be JSON was not.
    #[error("decode failure: {0}")]
    Decode(String),
}

impl Failure {
    /// Creates an assertion failure.
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion(message.into())
    }

    /// Creates a transport failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a decode failure.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

/// Result of running one test case body.
pub type CaseResult = Result<(), Failure>;
