//! Taskcheck Domain - Core harness types
//!
//! This crate defines the domain model for the taskcheck API test harness.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod failure;
pub mod request;
pub mod resources;
pub mod response;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use failure::{CaseResult, Failure};
pub use request::{HttpMethod, ProbeRequest};
pub use resources::{Task, User};
pub use response::{ProbeResponse, StatusCode};
pub use testing::{RunReport, RunSummary, TestOutcome, assert_true};
