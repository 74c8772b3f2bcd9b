//! Fan-out of one entry to every sink enabled in the mode.

use super::{DatabaseSink, FileSink, Sink, SinkMode, StderrSink};
use crate::entry::LogEntry;
use crate::internal;

/// Owns the sinks and the current mode.
///
/// The mode only ever shrinks: once the database sink is found missing it is
/// cleared for the rest of the dispatcher's life.
#[derive(Debug)]
pub struct Dispatcher {
    mode: SinkMode,
    file: FileSink,
    stderr: StderrSink,
    database: Option<DatabaseSink>,
    downgraded: bool,
}

impl Dispatcher {
    #[must_use]
    pub const fn new(mode: SinkMode, file: FileSink, stderr: StderrSink) -> Self {
        Self {
            mode,
            file,
            stderr,
            database: None,
            downgraded: false,
        }
    }

    /// Supplies the database handle. After a downgrade the handle is kept
    /// but the database bit stays cleared.
    pub fn attach_database(&mut self, sink: DatabaseSink) {
        if self.downgraded {
            internal::warn(
                "DISPATCH",
                "Database attached after downgrade; database sink stays disabled",
            );
        }
        self.database = Some(sink);
    }

    #[must_use]
    pub const fn mode(&self) -> SinkMode {
        self.mode
    }

    #[must_use]
    pub const fn is_downgraded(&self) -> bool {
        self.downgraded
    }

    #[must_use]
    pub const fn has_database(&self) -> bool {
        self.database.is_some()
    }

    #[must_use]
    pub const fn file(&self) -> &FileSink {
        &self.file
    }

    /// Delivers `entry` to each enabled sink and returns how many accepted it.
    ///
    /// Sink failures are reported on the diagnostic channel and otherwise ignored.
    pub fn dispatch(&mut self, entry: &LogEntry) -> usize {
        if self.mode.contains(SinkMode::DATABASE) && self.database.is_none() {
            self.mode = self.mode.without(SinkMode::DATABASE);
            self.downgraded = true;
            internal::warn(
                "DISPATCH",
                &format!("No database attached, sink mode downgraded to {}", self.mode),
            );
        }

        let mut delivered = 0;
        if self.mode.contains(SinkMode::FILE) {
            delivered += usize::from(deliver(&mut self.file, entry));
        }
        if self.mode.contains(SinkMode::STDERR) {
            delivered += usize::from(deliver(&mut self.stderr, entry));
        }
        if self.mode.contains(SinkMode::DATABASE)
            && let Some(db) = self.database.as_mut()
        {
            delivered += usize::from(deliver(db, entry));
        }
        delivered
    }
}

fn deliver(sink: &mut dyn Sink, entry: &LogEntry) -> bool {
    match sink.write(entry) {
        Ok(()) => true,
        Err(e) => {
            internal::error(
                "DISPATCH",
                &format!(
                    "{} sink failed for stream '{}': {e}",
                    sink.name(),
                    entry.stream()
                ),
            );
            false
        }
    }
}
