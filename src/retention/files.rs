//! Inventory of the regular files in one directory, shared by sweep and stats.

use super::stats::LogFileInfo;
use crate::internal;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

/// Lists the regular files directly inside `dir` with size and age at `now`.
///
/// Entries whose metadata can't be read are returned in the second list
/// instead of failing the whole scan.
pub(super) fn collect_files(
    dir: &Path,
    now: SystemTime,
) -> Result<(Vec<LogFileInfo>, Vec<(String, String)>), crate::Error> {
    internal::debug(
        "RETENTION",
        &format!("Collecting files from {}", dir.display()),
    );
    let mut files = Vec::new();
    let mut failed = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                failed.push((dir.display().to_string(), e.to_string()));
                continue;
            }
        };
        let path = entry.path();

        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(e) => {
                failed.push((path.display().to_string(), e.to_string()));
                continue;
            }
        };
        if !meta.is_file() {
            continue;
        }

        // Files stamped in the future count as brand new.
        let age = meta
            .modified()
            .ok()
            .and_then(|m| now.duration_since(m).ok())
            .unwrap_or(Duration::ZERO);

        files.push(LogFileInfo {
            path,
            size: meta.len(),
            age,
        });
    }

    internal::debug("RETENTION", &format!("Found {} files", files.len()));
    Ok((files, failed))
}
