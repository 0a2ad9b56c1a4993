//! Test outcomes and assertions.
//!
//! This module provides the assertion primitive test bodies use and the
//! types the runner records: one [`TestOutcome`] per case and a
//! [`RunSummary`] of the whole run.

use serde::{Deserialize, Serialize};

use crate::failure::{CaseResult, Failure};

/// Fails the current case with `message` when `condition` is false.
///
/// Propagate the result with `?` so that no later assertion in the same case
/// runs after the first failure.
///
/// # Errors
///
/// Returns [`Failure::Assertion`] carrying `message` if `condition` is false.
pub fn assert_true(condition: bool, message: impl Into<String>) -> CaseResult {
    if condition {
        Ok(())
    } else {
        Err(Failure::assertion(message))
    }
}

/// Result of running a single test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// 1-based position of the case in the run.
    pub index: usize,
    /// Name the case was registered with.
    pub name: String,
    /// Whether the case passed.
    pub passed: bool,
    /// Failure message if the case failed.
    pub message: Option<String>,
}

impl TestOutcome {
    /// Create a passed outcome.
    #[must_use]
    pub fn pass(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            passed: true,
            message: None,
        }
    }

    /// Create a failed outcome.
    #[must_use]
    pub fn fail(index: usize, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            passed: false,
            message: Some(message.into()),
        }
    }

    /// Create an outcome from the result of a case body.
    #[must_use]
    pub fn from_result(index: usize, name: impl Into<String>, result: &CaseResult) -> Self {
        match result {
            Ok(()) => Self::pass(index, name),
            Err(failure) => Self::fail(index, name, failure.to_string()),
        }
    }
}

/// Pass/fail counters for one run.
///
/// Only [`RunSummary::record`] changes the counters, so
/// `total == passed + failed` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    total: usize,
    passed: usize,
    failed: usize,
}

impl RunSummary {
    /// Create an empty summary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
        }
    }

    /// Count one outcome.
    pub const fn record(&mut self, outcome: &TestOutcome) {
        self.total += 1;
        if outcome.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Number of cases executed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of cases that passed.
    #[must_use]
    pub const fn passed(&self) -> usize {
        self.passed
    }

    /// Number of cases that failed.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Check if all cases passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Everything one run produced, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Name of the suite that was run.
    pub suite_name: String,
    /// One outcome per registered case.
    pub outcomes: Vec<TestOutcome>,
    /// Counters over `outcomes`.
    pub summary: RunSummary,
}

impl RunReport {
    /// Create a report by counting the given outcomes.
    #[must_use]
    pub fn new(suite_name: impl Into<String>, outcomes: Vec<TestOutcome>) -> Self {
        let mut summary = RunSummary::new();
        for outcome in &outcomes {
            summary.record(outcome);
        }
        Self {
            suite_name: suite_name.into(),
            outcomes,
            summary,
        }
    }

    /// Iterate over the failed outcomes.
    pub fn failures(&self) -> impl Iterator<Item = &TestOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}
