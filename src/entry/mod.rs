//! One formatted log line plus the structured fields it was built from.
//!
//! File and stderr sinks write [`LogEntry::line`]; the database sink reads the
//! fields directly, so a body that happens to contain the separator can't
//! shift columns.

use crate::level::Level;
use crate::request::RequestContext;
use chrono::{DateTime, FixedOffset};
use std::fmt;
use std::str::FromStr;

/// Separator between header fields and before the body.
pub const SEPARATOR: &str = " - ";

/// Line terminator appended to every entry.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator appended to every entry.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// `[17/Oct/2026 14:03:59 +0300]`
const HEADER_TIME_FORMAT: &str = "[%d/%b/%Y %H:%M:%S %z]";

/// How much request information goes into the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemInfo {
    /// Date, level, URI.
    Simple,
    /// IP, date, level, URI.
    Advanced,
    /// IP, date, level, URI, user agent.
    #[default]
    Full,
}

impl SystemInfo {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Advanced => "advanced",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SystemInfo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "advanced" => Ok(Self::Advanced),
            "full" => Ok(Self::Full),
            _ => Err(format!("unknown system info level: '{s}'")),
        }
    }
}

/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    stream: String,
    timestamp: DateTime<FixedOffset>,
    level: Level,
    ip: String,
    uri: String,
    user_agent: String,
    message: String,
    line: String,
}

impl LogEntry {
    /// Formats the header for `info` and joins it with the body.
    #[must_use]
    pub fn new(
        stream: impl Into<String>,
        level: Level,
        message: impl Into<String>,
        request: &RequestContext,
        info: SystemInfo,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        let message = message.into();
        let ip = request.ip_or_placeholder().to_string();
        let uri = request.uri_or_placeholder().to_string();
        let user_agent = request.user_agent_or_placeholder().to_string();

        let mut line = format!(
            "{} {}{SEPARATOR}{uri}",
            timestamp.format(HEADER_TIME_FORMAT),
            level.tag()
        );
        if info != SystemInfo::Simple {
            line = format!("{ip}{SEPARATOR}{line}");
        }
        if info == SystemInfo::Full {
            line.push_str(SEPARATOR);
            line.push('"');
            line.push_str(&user_agent);
            line.push('"');
        }
        line.push_str(SEPARATOR);
        line.push_str(&message);
        line.push_str(LINE_ENDING);

        Self {
            stream: stream.into(),
            timestamp,
            level,
            ip,
            uri,
            user_agent,
            message,
            line,
        }
    }

    #[must_use]
    pub fn stream(&self) -> &str {
        &self.stream
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn ip(&self) -> &str {
        &self.ip
    }

    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Body after interpolation, without header or terminator.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Full line including the terminator, as written to file and stderr.
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }
}
