//! Test runner implementation.
//!
//! Executes the cases of a [`Suite`] one after another and records one
//! outcome per case. A failing case never stops the run.

use std::time::Instant;

use taskcheck_domain::{CaseResult, RunReport, TestOutcome};
use tracing::{debug, info};

use crate::suite::{Suite, TestCase};

/// Sequential runner for a [`Suite`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TestRunner;

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run every case of `suite` against `ctx`, in registration order.
    ///
    /// Each case is awaited to completion before the next one starts. Every
    /// failure a case signals is captured in its outcome; the returned
    /// report always holds exactly one outcome per registered case.
    pub async fn run<Ctx>(&self, suite: &Suite<Ctx>, ctx: &Ctx) -> RunReport {
        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(suite.len());

        info!(suite = suite.name(), cases = suite.len(), "starting test run");

        for (position, case) in suite.cases().iter().enumerate() {
            let outcome = Self::run_case(suite, case, position + 1, ctx).await;
            outcomes.push(outcome);
        }

        let report = RunReport::new(suite.name(), outcomes);
        info!(
            suite = suite.name(),
            total = report.summary.total(),
            passed = report.summary.passed(),
            failed = report.summary.failed(),
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "test run finished"
        );
        report
    }

    async fn run_case<Ctx>(
        suite: &Suite<Ctx>,
        case: &TestCase<Ctx>,
        index: usize,
        ctx: &Ctx,
    ) -> TestOutcome {
        debug!(index, name = case.name(), "running test case");
        let start = Instant::now();

        let outcome = match Self::before_each(suite, ctx).await {
            Err(failure) => {
                TestOutcome::fail(index, case.name(), format!("setup failed: {failure}"))
            }
            Ok(()) => TestOutcome::from_result(index, case.name(), &case.execute(ctx).await),
        };

        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &outcome.message {
            None => debug!(index, name = case.name(), elapsed_ms, "test case passed"),
            Some(message) => {
                info!(index, name = case.name(), elapsed_ms, %message, "test case failed");
            }
        }
        outcome
    }

    async fn before_each<Ctx>(suite: &Suite<Ctx>, ctx: &Ctx) -> CaseResult {
        match suite.before_each_hook() {
            Some(hook) => hook.execute(ctx).await,
            None => Ok(()),
        }
    }
}
