//! Stats command implementation.

use crate::cli::util::resolver;
use crate::config::Config;
use crate::internal;
use crate::retention::stats;
use std::process::ExitCode;

/// Handles `flog stats`.
#[must_use]
pub fn cmd_stats(config: &Config) -> ExitCode {
    let dir = resolver(config).directory();
    if !dir.is_dir() {
        println!("No log directory at {}", dir.display());
        return ExitCode::SUCCESS;
    }

    match stats(&dir) {
        Ok(s) => {
            println!("Directory:   {}", dir.display());
            print!("{s}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("STATS", &format!("{e}"));
            ExitCode::FAILURE
        }
    }
}
