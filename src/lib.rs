#![forbid(unsafe_code)]

//! `flog` - request-scoped flat-file logger.
//!
//! Each entry becomes one line in `<root>/<path>/<log_dir>/<stream>.log`,
//! prefixed with the client address, timestamp, level, request URI, and
//! user agent. Entries can also go to stderr or a database table.
//!
//! - Size-based rotation with dated archive names
//! - Age-based retention, applied when a logger is built
//! - Immediate or deferred (buffered until close) writes
//! - PSR-3 style levels with `{placeholder}` interpolation
//!
//! # Example
//!
//! ```no_run
//! use flog::{Context, Level, Logger, SinkMode};
//!
//! let logger = Logger::builder()
//!     .root_dir("/var/www")
//!     .stream("site")
//!     .sinks(SinkMode::FILE_STDERR)
//!     .build()?;
//!
//! logger.info("User {user} logged in", &Context::new().with("user", "alice"));
//! logger.log_to("payments", Level::Error, "Card declined", &Context::new());
//! logger.close();
//! # Ok::<(), flog::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `flog` binary
//! - `sqlite`: [`db::SqliteDatabase`] for the database sink

mod error;

pub mod config;
pub mod db;
pub mod entry;
pub mod internal;
pub mod level;
pub mod logger;
pub mod message;
pub mod output;
pub mod path;
pub mod request;
pub mod retention;
pub mod rotation;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use db::{Database, Row};
pub use entry::{LogEntry, SystemInfo};
pub use error::Error;
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use message::{Context, Dump, Render, interpolate};
pub use output::{Dispatcher, SinkMode};
pub use path::PathResolver;
pub use request::RequestContext;
pub use retention::{LogStats, SweepResult, stats, sweep};
pub use rotation::rotate_if_needed;
pub use store::LogStore;

#[cfg(feature = "sqlite")]
pub use db::SqliteDatabase;
