//! Unified error type for all flog operations.
//!
//! Only construction, configuration, and the standalone maintenance helpers
//! (sweep, rotation) return these: the logging path itself swallows sink
//! failures and reports them on the diagnostic channel instead.

use std::path::PathBuf;

/// Error type for flog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// The log directory (or one of its parents) could not be created.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Sink mode outside the valid `0..=6` range, or an unknown sink name.
    InvalidSinkMode(String),
    /// Table names are interpolated into SQL, so only plain identifiers are accepted.
    InvalidTableName(String),
    /// Failure reported by a database handle.
    Database(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CreateDir { path, source } => {
                write!(f, "unable to create folder {}: {source}", path.display())
            }
            Self::InvalidSinkMode(mode) => write!(f, "invalid sink mode: {mode}"),
            Self::InvalidTableName(name) => write!(f, "invalid table name: {name}"),
            Self::Database(msg) => write!(f, "database error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::CreateDir { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}
