//! Age-based retention for the log directory.
//!
//! Runs once when a logger is built: every regular file whose last
//! modification is strictly older than the limit is deleted. One file
//! failing never stops the rest of the sweep.

mod files;
mod result;
mod size;
mod stats;

pub use result::SweepResult;
pub use size::format_size;
pub use stats::{LogFileInfo, LogStats};

use crate::config::DAY_SECS;
use crate::internal;
use files::collect_files;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Deletes files in `dir` older than `max_age_days`, measured from now.
///
/// # Errors
/// Only when the directory itself can't be read; per-file failures land in
/// [`SweepResult::failed`].
pub fn sweep(dir: &Path, max_age_days: u32) -> Result<SweepResult, crate::Error> {
    sweep_at(dir, max_age_days, SystemTime::now())
}

/// [`sweep`] against an explicit clock.
///
/// A file exactly `max_age_days * 86400` seconds old is kept.
///
/// # Errors
/// Only when the directory itself can't be read.
pub fn sweep_at(
    dir: &Path,
    max_age_days: u32,
    now: SystemTime,
) -> Result<SweepResult, crate::Error> {
    internal::debug(
        "RETENTION",
        &format!(
            "Sweeping {} (max age {max_age_days} days)",
            dir.display()
        ),
    );

    let mut result = SweepResult::default();
    if !dir.is_dir() {
        internal::debug("RETENTION", "Directory does not exist, nothing to sweep");
        return Ok(result);
    }

    let limit = u64::from(max_age_days).saturating_mul(DAY_SECS);
    let (files, failed) = collect_files(dir, now)?;
    result.failed = failed;

    for file in files {
        if file.age.as_secs() <= limit {
            continue;
        }
        match fs::remove_file(&file.path) {
            Ok(()) => {
                internal::debug("RETENTION", &format!("Deleted: {}", file.path.display()));
                result.freed += file.size;
                result.deleted.push(file.path);
            }
            Err(e) => {
                internal::warn(
                    "RETENTION",
                    &format!("Failed to delete {}: {e}", file.path.display()),
                );
                result.failed.push((file.path.display().to_string(), e.to_string()));
            }
        }
    }

    internal::info(
        "RETENTION",
        &format!(
            "Sweep complete: {} files, {} freed",
            result.count(),
            format_size(result.freed)
        ),
    );
    Ok(result)
}

/// Read-only inventory of the same directory the sweep walks.
///
/// # Errors
/// Directory traversal may fail on permission issues.
pub fn stats(dir: &Path) -> Result<LogStats, crate::Error> {
    let mut stats = LogStats::default();
    if !dir.is_dir() {
        return Ok(stats);
    }

    let (mut files, _) = collect_files(dir, SystemTime::now())?;
    files.sort_by(|a, b| a.path.cmp(&b.path));

    stats.total_files = files.len();
    stats.total_size = files.iter().map(|f| f.size).sum();
    stats.oldest_file = files.iter().max_by_key(|f| f.age).map(|f| f.path.clone());
    stats.newest_file = files.iter().min_by_key(|f| f.age).map(|f| f.path.clone());
    stats.files = files;

    Ok(stats)
}
