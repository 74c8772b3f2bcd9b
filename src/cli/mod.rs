//! Command-line interface for one-shot logging and log directory maintenance.

pub mod commands;
pub mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Notice,
    #[value(alias = "warn")]
    Warning,
    #[value(alias = "err")]
    Error,
    #[value(alias = "crit")]
    Critical,
    Alert,
    #[value(alias = "emerg")]
    Emergency,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Notice => Self::Notice,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
            LogLevel::Critical => Self::Critical,
            LogLevel::Alert => Self::Alert,
            LogLevel::Emergency => Self::Emergency,
        }
    }
}

/// flog - write and maintain flat-file request logs.
#[derive(Parser)]
#[command(
    name = "flog",
    version,
    about = "Write and maintain flat-file request logs"
)]
pub struct Cli {
    /// Config file (defaults to <config_dir>/flog/flog.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Write one entry.
    Log {
        /// Target stream (defaults to the configured one)
        #[arg(short, long)]
        stream: Option<String>,
        /// Log level
        #[arg(value_enum)]
        level: LogLevel,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Delete log files older than the retention period.
    Sweep {
        /// Override the configured retention in days
        #[arg(long, value_name = "N")]
        days: Option<u32>,
    },
    /// Rotate a stream's file if it exceeds the size threshold.
    Rotate {
        /// Stream to check (defaults to the configured one)
        #[arg(short, long)]
        stream: Option<String>,
    },
    /// Show log directory statistics.
    Stats,
    /// Print the file a stream writes to.
    Path {
        /// Stream name (defaults to the configured one)
        #[arg(short, long)]
        stream: Option<String>,
    },
}

pub use commands::{cmd_log, cmd_path, cmd_rotate, cmd_stats, cmd_sweep};
pub use util::{build_logger, load_config, resolver};
