//! Utility functions for the CLI.

use crate::config::Config;
use crate::logger::Logger;
use crate::path::{self, PathResolver};
use std::path::Path;

/// Loads the explicit config file, or the default one when none is given.
///
/// # Errors
/// Unreadable or malformed config file.
pub fn load_config(path: Option<&Path>) -> Result<Config, crate::Error> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Path layout described by the config, without touching the filesystem.
#[must_use]
pub fn resolver(config: &Config) -> PathResolver {
    PathResolver::new(path::resolve_root(&config.file.root_dir))
        .path(config.file.path.as_str())
        .log_dir(config.file.log_dir.as_str())
}

/// Stream named on the command line, or the configured default.
#[must_use]
pub fn stream_or_default<'a>(stream: Option<&'a str>, config: &'a Config) -> &'a str {
    stream
        .filter(|s| !s.is_empty())
        .unwrap_or(config.general.stream.as_str())
}

/// Builds the logger and, with the `sqlite` feature, opens `database.path`.
///
/// # Errors
/// Anything [`Logger::from_config`] reports.
pub fn build_logger(config: &Config) -> Result<Logger, crate::Error> {
    let logger = Logger::from_config(config)?;
    #[cfg(feature = "sqlite")]
    attach_sqlite(&logger, config);
    Ok(logger)
}

/// A database that can't be opened leaves the logger to downgrade on first write.
#[cfg(feature = "sqlite")]
fn attach_sqlite(logger: &Logger, config: &Config) {
    let Some(db_path) = config.database.path.as_deref() else {
        return;
    };
    let expanded = shellexpand::tilde(db_path);
    match crate::db::SqliteDatabase::open(Path::new(expanded.as_ref())) {
        Ok(db) => {
            if let Err(e) = logger.attach_database(db) {
                crate::internal::error("CLI", &format!("Database unavailable: {e}"));
            }
        }
        Err(e) => crate::internal::error("CLI", &format!("Cannot open {db_path}: {e}")),
    }
}
