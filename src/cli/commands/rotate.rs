//! Rotation without writing an entry.

use crate::cli::util::{resolver, stream_or_default};
use crate::config::Config;
use crate::internal;
use crate::rotation::rotate_if_needed;
use std::process::ExitCode;

/// Handles `flog rotate [--stream S]`.
#[must_use]
pub fn cmd_rotate(config: &Config, stream: Option<&str>) -> ExitCode {
    let path = resolver(config).resolve(stream_or_default(stream, config));

    match rotate_if_needed(&path, config.max_size_bytes()) {
        Ok(Some(archive)) => {
            println!("{} -> {}", path.display(), archive.display());
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("{} is below the rotation threshold", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("ROTATE", &format!("{}: {e}", path.display()));
            ExitCode::FAILURE
        }
    }
}
