//! Retention on demand, for hosts that keep one logger alive for days.

use crate::cli::util::resolver;
use crate::config::Config;
use crate::internal;
use crate::retention::sweep;
use std::process::ExitCode;

/// Handles `flog sweep [--days N]`. The CLI flag wins over the config.
#[must_use]
pub fn cmd_sweep(config: &Config, days: Option<u32>) -> ExitCode {
    let days = days.map_or_else(|| config.retention_days(), |d| d.max(1));
    let dir = resolver(config).directory();
    internal::debug(
        "SWEEP",
        &format!("Dir: {}, max age: {days} days", dir.display()),
    );

    match sweep(&dir, days) {
        Ok(result) => {
            print!("{result}");
            if result.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            internal::error("SWEEP", &format!("{e}"));
            ExitCode::FAILURE
        }
    }
}
