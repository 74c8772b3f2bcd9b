//! Logger construction from `flog.toml`.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Builds a logger from the default config file plus `FLOG_*` overrides.
    ///
    /// # Errors
    /// Config file errors, plus everything [`Logger::from_config`] reports.
    pub fn from_default_config() -> Result<Self, crate::Error> {
        let config = Config::load()?;
        Self::from_config(&config)
    }

    /// Builds a logger from an already loaded config.
    ///
    /// No database handle is attached here; a mode that includes the
    /// database sink needs [`Logger::attach_database`] before the first
    /// write, otherwise it is downgraded.
    ///
    /// # Errors
    /// Invalid sink names or mode, invalid table name, or a log directory
    /// that can't be created.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        internal::init_with_config(config);
        internal::debug("LOGGER", "Building logger from config");

        Self::configure(LoggerBuilder::new(), config)?.build()
    }

    fn configure(builder: LoggerBuilder, config: &Config) -> Result<LoggerBuilder, crate::Error> {
        let mode = config.sink_mode()?;
        internal::debug(
            "LOGGER",
            &format!("Level: {}, sinks: {mode}", config.general.level),
        );

        Ok(builder
            .root_dir(&config.file.root_dir)
            .path(config.file.path.as_str())
            .log_dir(config.file.log_dir.as_str())
            .stream(config.general.stream.as_str())
            .level(config.parse_level())
            .save_now(config.general.save_now)
            .system_info(config.parse_system_info())
            .max_size_mb(config.file.max_size_mb)
            .retention_days(config.retention_days())
            .sinks(mode)
            .table(config.database.table.as_str()))
    }
}
