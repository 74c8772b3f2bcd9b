//! The logger facade: formats entries, hands them to the store, and flushes
//! deferred entries exactly once when its owning scope ends.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::db::Database;
use crate::entry::{LogEntry, SystemInfo};
use crate::internal;
use crate::level::Level;
use crate::message::{Context, Render, interpolate};
use crate::output::{DatabaseSink, Dispatcher, SinkMode};
use crate::request::RequestContext;
use crate::store::LogStore;
use chrono::Local;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Request-scoped logger.
///
/// All methods take `&self`; mutable state sits behind a mutex so a logger
/// can be shared across threads. Deferred entries are written by
/// [`Logger::close`] or, failing that, when the logger is dropped.
pub struct Logger {
    inner: Mutex<Inner>,
}

struct Inner {
    store: LogStore,
    dispatcher: Dispatcher,
    stream: String,
    level: Level,
    system_info: SystemInfo,
    request: RequestContext,
    table: String,
    retention_days: u32,
    closed: bool,
}

impl Inner {
    fn submit(&mut self, stream: Option<&str>, level: Level, body: String) {
        let stream = stream.filter(|s| !s.is_empty()).unwrap_or(self.stream.as_str());
        let entry = LogEntry::new(
            stream,
            level,
            body,
            &self.request,
            self.system_info,
            Local::now().fixed_offset(),
        );
        self.store.append(entry, &mut self.dispatcher);
    }

    fn flush(&mut self) -> usize {
        let drained = self.store.flush_all(&mut self.dispatcher);
        if drained > 0 {
            internal::debug("LOGGER", &format!("Flushed {drained} entries"));
        }
        drained
    }
}

impl Logger {
    /// Guided construction; see [`LoggerBuilder`].
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock must not silence logging for good.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Core entry point: filters by level, interpolates, and writes to the default stream.
    pub fn log(&self, level: Level, message: &str, context: &Context) {
        self.log_to("", level, message, context);
    }

    /// Like [`Logger::log`] for a named stream; an empty name means the default stream.
    pub fn log_to(&self, stream: &str, level: Level, message: &str, context: &Context) {
        let mut inner = self.lock();
        if level < inner.level {
            return;
        }
        let body = interpolate(message, context);
        inner.submit(Some(stream), level, body);
    }

    /// System is unusable.
    pub fn emergency(&self, message: &str, context: &Context) {
        self.log(Level::Emergency, message, context);
    }

    /// Action must be taken immediately.
    pub fn alert(&self, message: &str, context: &Context) {
        self.log(Level::Alert, message, context);
    }

    /// Critical conditions.
    pub fn critical(&self, message: &str, context: &Context) {
        self.log(Level::Critical, message, context);
    }

    /// Runtime errors that do not require immediate action.
    pub fn error(&self, message: &str, context: &Context) {
        self.log(Level::Error, message, context);
    }

    /// Exceptional occurrences that are not errors.
    pub fn warning(&self, message: &str, context: &Context) {
        self.log(Level::Warning, message, context);
    }

    /// Normal but significant events.
    pub fn notice(&self, message: &str, context: &Context) {
        self.log(Level::Notice, message, context);
    }

    /// Interesting events.
    pub fn info(&self, message: &str, context: &Context) {
        self.log(Level::Info, message, context);
    }

    /// Detailed debug information.
    pub fn debug(&self, message: &str, context: &Context) {
        self.log(Level::Debug, message, context);
    }

    /// Logs any renderable value verbatim (no interpolation), tagged with the
    /// configured level. `None` targets the default stream.
    pub fn append<T: Render + ?Sized>(&self, stream: Option<&str>, value: &T) {
        let mut inner = self.lock();
        let level = inner.level;
        inner.submit(stream, level, value.render());
    }

    /// Writes each item of `lines` as its own entry on one stream.
    pub fn log_lines<I>(&self, stream: Option<&str>, level: Level, lines: I)
    where
        I: IntoIterator,
        I::Item: Render,
    {
        let mut inner = self.lock();
        if level < inner.level {
            return;
        }
        for line in lines {
            inner.submit(stream, level, line.render());
        }
    }

    /// Writes every buffered entry now. Returns how many were drained.
    pub fn flush(&self) -> usize {
        self.lock().flush()
    }

    /// Flushes and ends the logger's life.
    pub fn close(self) -> usize {
        let mut inner = self.lock();
        let drained = inner.flush();
        inner.closed = true;
        drained
    }

    /// Supplies the database handle after construction.
    ///
    /// Rows older than the retention period are purged first. If the sink
    /// mode has already been downgraded, the handle is kept but unused.
    ///
    /// # Errors
    /// The handle failing the table check or creation.
    pub fn attach_database(&self, db: impl Database + 'static) -> Result<(), crate::Error> {
        let mut inner = self.lock();
        let mut sink = DatabaseSink::new(Box::new(db), inner.table.clone())?;
        if let Err(e) = sink.purge_older_than(inner.retention_days, Local::now().fixed_offset()) {
            internal::warn("LOGGER", &format!("Database retention purge failed: {e}"));
        }
        inner.dispatcher.attach_database(sink);
        Ok(())
    }

    /// Changes the default stream; empty names are ignored.
    pub fn set_stream(&self, stream: impl Into<String>) {
        let stream = stream.into();
        if !stream.is_empty() {
            self.lock().stream = stream;
        }
    }

    /// Changes the minimum level (and the tag of untagged appends).
    pub fn set_level(&self, level: Level) {
        self.lock().level = level;
    }

    pub fn set_system_info(&self, info: SystemInfo) {
        self.lock().system_info = info;
    }

    /// Replaces the request context used for subsequent headers.
    pub fn set_request(&self, request: RequestContext) {
        self.lock().request = request;
    }

    #[must_use]
    pub fn stream(&self) -> String {
        self.lock().stream.clone()
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.lock().level
    }

    #[must_use]
    pub fn system_info(&self) -> SystemInfo {
        self.lock().system_info
    }

    /// Current mode, after any downgrade.
    #[must_use]
    pub fn sink_mode(&self) -> SinkMode {
        self.lock().dispatcher.mode()
    }

    #[must_use]
    pub fn is_immediate(&self) -> bool {
        self.lock().store.is_immediate()
    }

    /// Entries waiting for the next flush.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.lock().store.pending()
    }

    /// The directory all stream files live in.
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.lock().dispatcher.file().resolver().directory()
    }

    /// Current file of a stream (the default stream when empty).
    #[must_use]
    pub fn path_for(&self, stream: &str) -> PathBuf {
        let inner = self.lock();
        let stream = if stream.is_empty() {
            inner.stream.as_str()
        } else {
            stream
        };
        inner.dispatcher.file().path_for(stream)
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let inner = self
            .inner
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if !inner.closed {
            inner.flush();
            inner.closed = true;
        }
    }
}
