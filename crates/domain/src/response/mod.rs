//! Probe response domain types

mod spec;

pub use spec::{ProbeResponse, StatusCode};
