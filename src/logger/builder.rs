//! Stepwise logger construction. The one-time directory setup and the
//! retention sweep run in [`LoggerBuilder::build`].

use super::{Inner, Logger};
use crate::config::{DatabaseConfig, FileConfig, GeneralConfig, MEGABYTE};
use crate::db::{self, Database};
use crate::entry::SystemInfo;
use crate::internal;
use crate::level::Level;
use crate::output::{DatabaseSink, Dispatcher, FileSink, SinkMode, StderrSink};
use crate::path::{self, PathResolver};
use crate::request::RequestContext;
use crate::retention;
use crate::store::LogStore;
use chrono::Local;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Collects settings; nothing touches the filesystem until `build`.
pub struct LoggerBuilder {
    root_dir: String,
    path: String,
    log_dir: String,
    stream: String,
    level: Level,
    save_now: bool,
    system_info: SystemInfo,
    max_bytes: u64,
    retention_days: u32,
    mode: SinkMode,
    request: Option<RequestContext>,
    database: Option<Box<dyn Database>>,
    table: String,
    stderr: Option<StderrSink>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Same defaults as an empty config file.
    #[must_use]
    pub fn new() -> Self {
        let general = GeneralConfig::default();
        let file = FileConfig::default();
        Self {
            root_dir: file.root_dir,
            path: file.path,
            log_dir: file.log_dir,
            stream: general.stream,
            level: Level::Debug,
            save_now: general.save_now,
            system_info: SystemInfo::Full,
            max_bytes: file.max_size_mb * MEGABYTE,
            retention_days: file.retention_days,
            mode: SinkMode::FILE,
            request: None,
            database: None,
            table: DatabaseConfig::default().table,
            stderr: None,
        }
    }

    /// Root directory; when missing, `DOCUMENT_ROOT` or the state dir is used.
    #[must_use]
    pub fn root_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.root_dir = dir.as_ref().to_string_lossy().into_owned();
        self
    }

    /// Segment between root and log directory.
    #[must_use]
    pub fn path(mut self, segment: impl Into<String>) -> Self {
        self.path = segment.into();
        self
    }

    #[must_use]
    pub fn log_dir(mut self, dir: impl Into<String>) -> Self {
        self.log_dir = dir.into();
        self
    }

    /// Default stream; empty names are ignored.
    #[must_use]
    pub fn stream(mut self, stream: impl Into<String>) -> Self {
        let stream = stream.into();
        if !stream.is_empty() {
            self.stream = stream;
        }
        self
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// `true` writes every entry immediately; `false` buffers until close.
    #[must_use]
    pub const fn save_now(mut self, save_now: bool) -> Self {
        self.save_now = save_now;
        self
    }

    #[must_use]
    pub const fn system_info(mut self, info: SystemInfo) -> Self {
        self.system_info = info;
        self
    }

    /// Rotation threshold in megabytes, clamped to at least 1.
    #[must_use]
    pub const fn max_size_mb(mut self, mb: u64) -> Self {
        let mb = if mb < 1 { 1 } else { mb };
        self.max_bytes = mb.saturating_mul(MEGABYTE);
        self
    }

    /// Exact rotation threshold in bytes, for callers that need finer control than megabytes.
    #[must_use]
    pub const fn max_size_bytes(mut self, bytes: u64) -> Self {
        self.max_bytes = bytes;
        self
    }

    /// Retention in days, clamped to at least 1.
    #[must_use]
    pub const fn retention_days(mut self, days: u32) -> Self {
        self.retention_days = if days < 1 { 1 } else { days };
        self
    }

    #[must_use]
    pub const fn sinks(mut self, mode: SinkMode) -> Self {
        self.mode = mode;
        self
    }

    /// Header fields; defaults to [`RequestContext::from_env`].
    #[must_use]
    pub fn request(mut self, request: RequestContext) -> Self {
        self.request = Some(request);
        self
    }

    /// Database handle for the database sink.
    #[must_use]
    pub fn database(mut self, db: impl Database + 'static) -> Self {
        self.database = Some(Box::new(db));
        self
    }

    /// Table the database sink writes to.
    #[must_use]
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Redirects the stderr sink.
    #[must_use]
    pub fn stderr_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.stderr = Some(StderrSink::with_writer(writer));
        self
    }

    /// Creates the log directory, sweeps it, and attaches the database.
    ///
    /// A database handle that fails its table check is reported and left
    /// out, so the first write downgrades the mode.
    ///
    /// # Errors
    /// [`crate::Error::CreateDir`] when the log directory can't be created,
    /// [`crate::Error::InvalidTableName`] for a bad table name.
    pub fn build(self) -> Result<Logger, crate::Error> {
        internal::init();
        db::validate_table_name(&self.table)?;

        let root = path::resolve_root(&self.root_dir);
        let resolver = PathResolver::new(root)
            .path(self.path)
            .log_dir(self.log_dir);
        let dir = resolver.ensure_log_dir()?;
        internal::debug("LOGGER", &format!("Log directory: {}", dir.display()));

        match retention::sweep(&dir, self.retention_days) {
            Ok(result) => {
                for (path, err) in &result.failed {
                    internal::warn("LOGGER", &format!("Retention skipped {path}: {err}"));
                }
            }
            Err(e) => internal::warn("LOGGER", &format!("Retention sweep failed: {e}")),
        }

        let mut dispatcher = Dispatcher::new(
            self.mode,
            FileSink::new(resolver, self.max_bytes),
            self.stderr.unwrap_or_default(),
        );

        if let Some(db) = self.database {
            match DatabaseSink::new(db, self.table.clone()) {
                Ok(mut sink) => {
                    if let Err(e) =
                        sink.purge_older_than(self.retention_days, Local::now().fixed_offset())
                    {
                        internal::warn("LOGGER", &format!("Database retention purge failed: {e}"));
                    }
                    dispatcher.attach_database(sink);
                }
                Err(e) => internal::error("LOGGER", &format!("Database unavailable: {e}")),
            }
        }

        internal::debug(
            "LOGGER",
            &format!(
                "Sinks: {}, immediate: {}, stream: {}",
                dispatcher.mode(),
                self.save_now,
                self.stream
            ),
        );

        Ok(Logger {
            inner: Mutex::new(Inner {
                store: LogStore::new(self.save_now),
                dispatcher,
                stream: self.stream,
                level: self.level,
                system_info: self.system_info,
                request: self.request.unwrap_or_else(RequestContext::from_env),
                table: self.table,
                retention_days: self.retention_days,
                closed: false,
            }),
        })
    }
}
