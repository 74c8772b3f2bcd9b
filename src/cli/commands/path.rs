use crate::cli::util::{resolver, stream_or_default};
use crate::config::Config;
use std::process::ExitCode;

/// Handles `flog path [--stream S]`.
#[must_use]
pub fn cmd_path(config: &Config, stream: Option<&str>) -> ExitCode {
    println!(
        "{}",
        resolver(config)
            .resolve(stream_or_default(stream, config))
            .display()
    );
    ExitCode::SUCCESS
}
