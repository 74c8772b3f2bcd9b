//! `flog` binary: one-shot logging plus sweep, rotate, stats, and path
//! helpers over the same config the library reads.
//!
//! Usage:
//!   flog log [--stream S] <level> <msg>...   Write one entry
//!   flog sweep [--days N]                    Apply retention now
//!   flog rotate [--stream S]                 Rotate an oversized file
//!   flog stats                               Show directory statistics
//!   flog path [--stream S]                   Print a stream's file path

use clap::Parser;
use flog::cli::{Cli, Command, cmd_log, cmd_path, cmd_rotate, cmd_stats, cmd_sweep, load_config};
use flog::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config decides the diagnostic threshold, so it loads before anything logs
    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };
    internal::init_with_config(&config);

    match cli.command {
        Command::Log {
            stream,
            level,
            message,
        } => cmd_log(&config, stream.as_deref(), level.into(), &message),
        Command::Sweep { days } => cmd_sweep(&config, days),
        Command::Rotate { stream } => cmd_rotate(&config, stream.as_deref()),
        Command::Stats => cmd_stats(&config),
        Command::Path { stream } => cmd_path(&config, stream.as_deref()),
    }
}
