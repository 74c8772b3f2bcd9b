//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level; also the tag of untagged appends.
    pub level: String,
    /// Stream used when a call doesn't name one.
    pub stream: String,
    /// Write every entry through immediately instead of buffering until close.
    pub save_now: bool,
    /// Header verbosity (simple, advanced, full).
    pub system_info: String,
    /// Enabled sinks (file, stderr, database).
    pub sinks: Vec<String>,
    /// Threshold of flog's own diagnostic channel.
    pub internal_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            stream: "site".to_string(),
            save_now: false,
            system_info: "full".to_string(),
            sinks: vec!["file".to_string()],
            internal_level: "warning".to_string(),
        }
    }
}

/// File sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Root directory; empty or missing falls back to `DOCUMENT_ROOT` or the state dir.
    pub root_dir: String,
    /// Optional segment between the root and the log directory.
    pub path: String,
    /// Log directory name under root (and path).
    pub log_dir: String,
    /// Rotation threshold in megabytes.
    pub max_size_mb: u64,
    /// Files older than this are deleted at startup.
    pub retention_days: u32,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            root_dir: String::new(),
            path: String::new(),
            log_dir: "logs".to_string(),
            max_size_mb: 2,
            retention_days: 365,
        }
    }
}

/// Database sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Table receiving one row per entry.
    pub table: String,
    /// `SQLite` file opened by the CLI when built with the `sqlite` feature.
    pub path: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            table: "flog_logs".to_string(),
            path: None,
        }
    }
}
