//! Taskcheck - integration-test harness for the users/tasks REST API.
//!
//! Wires the reqwest-backed [`Probe`] to the [`user_task_suite`] and runs
//! it once against the configured base address.

pub mod suite;

pub use suite::user_task_suite;

use taskcheck_application::{HttpClientError, Probe, TestRunner};
use taskcheck_domain::RunReport;
use taskcheck_infrastructure::{HarnessConfig, ReqwestHttpClient};

/// Runs the full suite against the service described by `config`.
///
/// # Errors
///
/// Returns an error only when the HTTP client cannot be built. Failures
/// of individual cases, including unreachable servers, are recorded in
/// the report instead.
pub async fn run(config: &HarnessConfig) -> Result<RunReport, HttpClientError> {
    let client = ReqwestHttpClient::new(config.base_url.clone())?.with_timeout(config.timeout);
    tracing::info!(base_url = %client.base_url(), "running suite");

    let probe = Probe::new(client);
    let suite = user_task_suite();
    Ok(TestRunner::new().run(&suite, &probe).await)
}
