//! Reporter port

use std::io;

use taskcheck_domain::RunReport;

/// Port for presenting a finished run.
///
/// A reporter is a read-only consumer of the report. It is invoked once,
/// after every case has run.
pub trait Reporter {
    /// Writes the per-case lines and the summary line.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output cannot be written.
    fn report(&mut self, report: &RunReport) -> io::Result<()>;
}
