//! Size-based rotation of a stream's current file.
//!
//! Checked right before every physical write, never speculatively. File size
//! and modification time are read fresh each time so another writer growing
//! the file is noticed. Two processes rotating the same file at once can
//! still race; nothing here locks.

use crate::internal;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Renames `path` to a dated archive name when it is larger than `max_bytes`.
///
/// `site.log` modified on 2026-10-17 becomes `site20261017.log`, or
/// `site20261017_1.log`, `_2`, … when earlier archives of that day exist.
/// Returns the archive path, or `None` when the file is missing or small
/// enough.
///
/// # Errors
/// Metadata or rename failures.
pub fn rotate_if_needed(path: &Path, max_bytes: u64) -> Result<Option<PathBuf>, crate::Error> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    if meta.len() <= max_bytes {
        return Ok(None);
    }

    let date = DateTime::<Local>::from(meta.modified()?)
        .format("%Y%m%d")
        .to_string();
    let target = archive_path(path, &date);

    fs::rename(path, &target)?;
    internal::info(
        "ROTATE",
        &format!(
            "Rotated {} ({} bytes) to {}",
            path.display(),
            meta.len(),
            target.display()
        ),
    );
    Ok(Some(target))
}

/// First free name among `<base><date><ext>`, `<base><date>_1<ext>`, ….
#[must_use]
pub fn archive_path(path: &Path, date: &str) -> PathBuf {
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (base, ext) = split_name(&name);

    let first = dir.join(format!("{base}{date}{ext}"));
    if !first.exists() {
        return first;
    }
    (1_u64..)
        .map(|n| dir.join(format!("{base}{date}_{n}{ext}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}

/// Splits at the first dot: `site.log.old` → (`site`, `.log.old`).
fn split_name(name: &str) -> (&str, &str) {
    match name.find('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => name.split_at(idx),
        _ => (name, ""),
    }
}
