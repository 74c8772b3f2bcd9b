//! TOML configuration loading and environment overrides.
//!
//! The serde schema lives in `structs`; this module reads the file, overlays
//! `FLOG_*` variables, and clamps values.

mod structs;

pub use structs::{DatabaseConfig, FileConfig, GeneralConfig};

use crate::entry::SystemInfo;
use crate::internal;
use crate::level::Level;
use crate::output::SinkMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Bytes per configured megabyte.
pub const MEGABYTE: u64 = 1_048_576;

/// Seconds per configured retention day.
pub const DAY_SECS: u64 = 86_400;

/// Every section is `#[serde(default)]`; an empty file yields a working logger.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Level, default stream, buffering mode, header verbosity and sinks.
    pub general: GeneralConfig,
    /// Directory layout, rotation threshold and retention.
    pub file: FileConfig,
    /// Table name and optional `SQLite` file.
    pub database: DatabaseConfig,
}

impl Config {
    /// Loads the default config file (if any) and applies environment overrides.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let path = Self::get_config_path()?;
        let mut config = Self::load_file(&path)?;
        config.apply_env();
        Ok(config)
    }

    /// Loads configuration from an explicit path, then applies environment overrides.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let mut config = Self::load_file(path)?;
        config.apply_env();
        Ok(config)
    }

    /// Parses a TOML document without consulting the environment.
    ///
    /// # Errors
    /// Returns the TOML syntax or type error.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    fn load_file(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", path.display()),
        );
        Ok(config)
    }

    /// `<config_dir>/flog/flog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("flog").join("flog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Applies `FLOG_*` environment variables on top of the loaded values.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Same as [`Config::apply_env`] with an arbitrary lookup: tests pass a map.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("FLOG_ROOT_PATH") {
            self.file.root_dir = v;
        }
        if let Some(v) = get("FLOG_PATH") {
            self.file.path = v;
        }
        if let Some(v) = get("FLOG_DIR") {
            self.file.log_dir = v;
        }
        if let Some(v) = get("FLOG_NAME") {
            self.general.stream = v;
        }
        if let Some(v) = get("FLOG_SIZE") {
            match v.trim().parse() {
                Ok(mb) => self.file.max_size_mb = mb,
                Err(_) => internal::warn("CONFIG", &format!("Ignoring FLOG_SIZE={v}")),
            }
        }
        if let Some(v) = get("FLOG_TIME") {
            match v.trim().parse() {
                Ok(days) => self.file.retention_days = days,
                Err(_) => internal::warn("CONFIG", &format!("Ignoring FLOG_TIME={v}")),
            }
        }
        if let Some(v) = get("FLOG_LEVEL") {
            self.general.level = v;
        }
        if let Some(v) = get("FLOG_SAVE_NOW") {
            self.general.save_now = matches!(
                v.trim().to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
        if let Some(v) = get("FLOG_SYSTEM_INFO") {
            self.general.system_info = v;
        }
        if let Some(v) = get("FLOG_SINKS") {
            self.general.sinks = v.split(',').map(|s| s.trim().to_string()).collect();
        }
    }

    /// Unknown strings fall back to `Debug`, which records everything.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or_else(|_| {
            internal::warn(
                "CONFIG",
                &format!("Unknown level '{}', using debug", self.general.level),
            );
            Level::Debug
        })
    }

    /// Unknown strings fall back to `Full`.
    #[must_use]
    pub fn parse_system_info(&self) -> SystemInfo {
        self.general.system_info.parse().unwrap_or_else(|_| {
            internal::warn(
                "CONFIG",
                &format!(
                    "Unknown system_info '{}', using full",
                    self.general.system_info
                ),
            );
            SystemInfo::Full
        })
    }

    /// Folds the configured sink names into a mode.
    ///
    /// # Errors
    /// Unknown names, or all three sinks together (mode 7).
    pub fn sink_mode(&self) -> Result<SinkMode, crate::Error> {
        SinkMode::from_names(&self.general.sinks)
    }

    /// Rotation threshold in bytes, never below one megabyte.
    #[must_use]
    pub fn max_size_bytes(&self) -> u64 {
        self.file.max_size_mb.max(1).saturating_mul(MEGABYTE)
    }

    /// Retention in days, never below one.
    #[must_use]
    pub fn retention_days(&self) -> u32 {
        self.file.retention_days.max(1)
    }
}
