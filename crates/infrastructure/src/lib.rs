//! Taskcheck Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus the environment-backed
//! harness configuration.

pub mod adapters;
pub mod config;
pub mod reporting;

pub use adapters::ReqwestHttpClient;
pub use config::{ConfigError, HarnessConfig, HarnessEnv};
pub use reporting::ConsoleReporter;
