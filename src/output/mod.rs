//! Physical destinations for formatted entries and the dispatcher that fans
//! each entry out to the enabled ones.

mod database;
mod dispatch;
mod file;
mod mode;
mod stderr;

pub use database::DatabaseSink;
pub use dispatch::Dispatcher;
pub use file::FileSink;
pub use mode::SinkMode;
pub use stderr::StderrSink;

use crate::entry::LogEntry;

/// One physical destination.
///
/// Sinks report failures to the dispatcher, which logs them on the
/// diagnostic channel: nothing here ever reaches the host application.
pub trait Sink: Send {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Delivers one entry.
    ///
    /// # Errors
    /// I/O or database errors from the underlying destination.
    fn write(&mut self, entry: &LogEntry) -> Result<(), crate::Error>;
}
