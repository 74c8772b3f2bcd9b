//! Mirrors entries to the process's standard-error stream.

use super::Sink;
use crate::entry::LogEntry;

use std::fmt;
use std::io::{self, Write};

/// Writes the raw formatted line; the writer is swappable so hosts (and
/// tests) can redirect the mirror.
pub struct StderrSink {
    writer: Box<dyn Write + Send>,
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StderrSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StderrSink").finish_non_exhaustive()
    }
}

impl StderrSink {
    /// Writes to `stderr`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: Box::new(io::stderr()),
        }
    }

    /// Writes to any other sink instead.
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }
}

impl Sink for StderrSink {
    fn name(&self) -> &'static str {
        "stderr"
    }

    fn write(&mut self, entry: &LogEntry) -> Result<(), crate::Error> {
        self.writer.write_all(entry.line().as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
