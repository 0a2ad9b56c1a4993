//! Taskcheck binary.

use std::process::ExitCode;

use taskcheck_application::Reporter;
use taskcheck_infrastructure::{ConsoleReporter, HarnessConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = HarnessConfig::load()?;
    tracing::debug!(?config, "loaded configuration");

    let report = taskcheck::run(&config).await?;
    ConsoleReporter::stdout(config.color).report(&report)?;

    if report.summary.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
