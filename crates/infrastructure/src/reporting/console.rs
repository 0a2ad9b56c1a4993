//! Console reporter.
//!
//! Prints one line per outcome and a closing summary line:
//!
//! ```text
//! 1: GET /user when user does not exist returns 404 : PASSED
//! 2: POST /user creates a new user : FAILED - Expected [true] but got [false] - ...
//! Executed a total of 2 tests 1 PASSED but 1 FAILED
//! ```

use std::io::{self, Write};

use colored::Colorize;
use taskcheck_application::ports::Reporter;
use taskcheck_domain::{RunReport, RunSummary, TestOutcome};

/// Writes a run report as human-readable text.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
    color: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Creates a reporter that writes to standard output.
    #[must_use]
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter that writes to `out`.
    pub const fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Consumes the reporter and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn outcome_line(&self, outcome: &TestOutcome) -> String {
        let status = match (&outcome.message, self.color) {
            (None, true) => "PASSED".green().to_string(),
            (None, false) => "PASSED".to_string(),
            (Some(message), true) => format!("{}{message}", "FAILED - ".red().bold()),
            (Some(message), false) => format!("FAILED - {message}"),
        };
        format!("{}: {} : {status}", outcome.index, outcome.name)
    }

    fn summary_line(&self, summary: &RunSummary) -> String {
        let passed = format!("{} PASSED", summary.passed());
        let passed = if self.color {
            passed.green().to_string()
        } else {
            passed
        };

        let failed = match (summary.failed(), self.color) {
            (0, _) => String::new(),
            (count, true) => format!(" but {}", format!("{count} FAILED").red().bold()),
            (count, false) => format!(" but {count} FAILED"),
        };
        format!("Executed a total of {} tests {passed}{failed}", summary.total())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, report: &RunReport) -> io::Result<()> {
        for outcome in &report.outcomes {
            let line = self.outcome_line(outcome);
            writeln!(self.out, "{line}")?;
        }
        let summary = self.summary_line(&report.summary);
        writeln!(self.out, "{summary}")?;
        self.out.flush()
    }
}
