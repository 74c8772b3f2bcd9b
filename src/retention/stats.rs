//! The stats command needs structured data to display: these types carry
//! the metadata from the directory scan to the CLI.

use super::format_size;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Inventory of one log directory.
#[derive(Debug, Default)]
pub struct LogStats {
    /// Number of regular files.
    pub total_files: usize,
    /// Combined byte size of all files.
    pub total_size: u64,
    /// File with the highest age: shows how far back retention reaches.
    pub oldest_file: Option<PathBuf>,
    /// Most recently modified file: confirms logging is still active.
    pub newest_file: Option<PathBuf>,
    /// Per-file metadata, sorted by name.
    pub files: Vec<LogFileInfo>,
}

impl fmt::Display for LogStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total files: {}", self.total_files)?;
        writeln!(f, "Total size:  {}", format_size(self.total_size))?;
        if let Some(oldest) = &self.oldest_file {
            writeln!(f, "Oldest:      {}", oldest.display())?;
        }
        if let Some(newest) = &self.newest_file {
            writeln!(f, "Newest:      {}", newest.display())?;
        }
        if !self.files.is_empty() {
            writeln!(f, "Files:")?;
            for file in &self.files {
                let age = match file.age_days() {
                    0 => "today".to_string(),
                    1 => "1 day".to_string(),
                    n => format!("{n} days"),
                };
                writeln!(
                    f,
                    "  {} ({}, {age})",
                    file.path.display(),
                    format_size(file.size)
                )?;
            }
        }
        Ok(())
    }
}

/// Per-file metadata gathered at scan time.
#[derive(Debug, Clone)]
pub struct LogFileInfo {
    pub path: PathBuf,
    pub size: u64,
    /// Time since last modification at scan time.
    pub age: Duration,
}

impl LogFileInfo {
    /// Whole days since last modification.
    #[must_use]
    pub const fn age_days(&self) -> u64 {
        self.age.as_secs() / crate::config::DAY_SECS
    }
}
