//! Emits a single entry from a shell script without linking the library.

use crate::cli::util::build_logger;
use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::message::Context;
use std::process::ExitCode;

/// Handles `flog log [--stream S] <level> <message>...`.
#[must_use]
pub fn cmd_log(
    config: &Config,
    stream: Option<&str>,
    level: Level,
    message: &[String],
) -> ExitCode {
    let logger = match build_logger(config) {
        Ok(logger) => logger,
        Err(e) => {
            internal::error("CLI", &format!("{e}"));
            return ExitCode::FAILURE;
        }
    };

    logger.log_to(
        stream.unwrap_or_default(),
        level,
        &message.join(" "),
        &Context::new(),
    );
    logger.close();
    ExitCode::SUCCESS
}
