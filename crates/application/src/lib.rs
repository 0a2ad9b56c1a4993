//! Taskcheck Application - Harness orchestration and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the HTTP transport and the report sink)
//! - The probe and fixture builder test cases call into
//! - Suite registration and the sequential test runner

pub mod fixtures;
pub mod ports;
pub mod probe;
pub mod runner;
pub mod suite;

pub use fixtures::{Fixtures, placeholder_email};
pub use ports::{HttpClient, HttpClientError, Reporter};
pub use probe::Probe;
pub use runner::TestRunner;
pub use suite::{CaseFuture, Suite, TestCase};

#[cfg(test)]
mod test_support;
