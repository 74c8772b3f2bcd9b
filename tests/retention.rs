//! Age-based sweep of the log directory.

use flog::retention::{format_size, sweep_at};
use flog::{stats, sweep};
use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::tempdir;

const DAY: u64 = 86_400;

fn write_aged(path: &Path, modified: SystemTime) {
    fs::write(path, "entry\n").unwrap();
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(modified)
        .unwrap();
}

#[test]
fn format_size_units() {
    assert_eq!(format_size(100), "100 B");
    assert_eq!(format_size(1024), "1.00 KB");
    assert_eq!(format_size(1024 * 1024), "1.00 MB");
}

#[test]
fn missing_directory_is_not_an_error() {
    let dir = tempdir().unwrap();
    let result = sweep(&dir.path().join("absent"), 30).unwrap();
    assert_eq!(result.count(), 0);
    assert!(result.is_clean());
}

#[test]
fn deletes_only_files_older_than_limit() {
    let dir = tempdir().unwrap();
    let now = SystemTime::now();
    let old = dir.path().join("old.log");
    let fresh = dir.path().join("fresh.log");
    write_aged(&old, now - Duration::from_secs(2 * DAY));
    write_aged(&fresh, now - Duration::from_secs(12 * 3600));

    let result = sweep_at(dir.path(), 1, now).unwrap();

    assert_eq!(result.deleted, vec![old.clone()]);
    assert_eq!(result.freed, 6);
    assert!(!old.exists());
    assert!(fresh.exists());
}

#[test]
fn file_exactly_at_limit_is_kept() {
    let dir = tempdir().unwrap();
    let now = SystemTime::now();
    let edge = dir.path().join("edge.log");
    let past = dir.path().join("past.log");
    write_aged(&edge, now - Duration::from_secs(3 * DAY));
    write_aged(&past, now - Duration::from_secs(3 * DAY + 1));

    let result = sweep_at(dir.path(), 3, now).unwrap();

    assert!(edge.exists());
    assert!(!past.exists());
    assert_eq!(result.count(), 1);
}

#[test]
fn subdirectories_are_left_alone() {
    let dir = tempdir().unwrap();
    let now = SystemTime::now();
    let nested = dir.path().join("archive");
    fs::create_dir(&nested).unwrap();
    write_aged(&nested.join("ancient.log"), now - Duration::from_secs(900 * DAY));

    let result = sweep_at(dir.path(), 1, now).unwrap();

    assert_eq!(result.count(), 0);
    assert!(nested.join("ancient.log").exists());
}

#[test]
fn future_timestamps_count_as_new() {
    let dir = tempdir().unwrap();
    let now = SystemTime::now();
    let ahead = dir.path().join("ahead.log");
    write_aged(&ahead, now + Duration::from_secs(DAY));

    sweep_at(dir.path(), 1, now).unwrap();
    assert!(ahead.exists());
}

#[cfg(unix)]
#[test]
fn unreadable_entry_does_not_stop_the_sweep() {
    let dir = tempdir().unwrap();
    let now = SystemTime::now();
    let first = dir.path().join("a.log");
    let last = dir.path().join("z.log");
    write_aged(&first, now - Duration::from_secs(10 * DAY));
    write_aged(&last, now - Duration::from_secs(10 * DAY));
    let dangling = dir.path().join("m.log");
    std::os::unix::fs::symlink(dir.path().join("gone.log"), &dangling).unwrap();

    let result = sweep_at(dir.path(), 1, now).unwrap();

    assert_eq!(result.count(), 2);
    assert!(!first.exists());
    assert!(!last.exists());
    assert_eq!(result.failed.len(), 1);
    assert_eq!(result.failed[0].0, dangling.display().to_string());
    assert!(!result.is_clean());
}

#[cfg(unix)]
#[test]
fn failed_deletions_are_collected_per_file() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let logs = dir.path().join("logs");
    fs::create_dir(&logs).unwrap();
    let now = SystemTime::now();
    let a = logs.join("a.log");
    let b = logs.join("b.log");
    write_aged(&a, now - Duration::from_secs(10 * DAY));
    write_aged(&b, now - Duration::from_secs(10 * DAY));

    fs::set_permissions(&logs, fs::Permissions::from_mode(0o555)).unwrap();
    if fs::write(logs.join("writable"), "").is_ok() {
        // Permission bits are not enforced for this user.
        fs::set_permissions(&logs, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }
    let result = sweep_at(&logs, 1, now);
    fs::set_permissions(&logs, fs::Permissions::from_mode(0o755)).unwrap();

    let result = result.unwrap();
    assert_eq!(result.count(), 0);
    assert_eq!(result.failed.len(), 2);
    assert!(a.exists());
    assert!(b.exists());
}

#[test]
fn stats_empty() {
    let dir = tempdir().unwrap();
    let stats = stats(dir.path()).unwrap();
    assert_eq!(stats.total_files, 0);
    assert_eq!(stats.total_size, 0);
    assert!(stats.oldest_file.is_none());
}

#[test]
fn stats_with_files() {
    let dir = tempdir().unwrap();
    let now = SystemTime::now();
    let a = dir.path().join("a.log");
    let b = dir.path().join("b.log");
    write_aged(&a, now - Duration::from_secs(5 * DAY));
    write_aged(&b, now - Duration::from_secs(60));

    let stats = stats(dir.path()).unwrap();
    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.total_size, 12);
    assert_eq!(stats.oldest_file.as_deref(), Some(a.as_path()));
    assert_eq!(stats.newest_file.as_deref(), Some(b.as_path()));
    assert_eq!(stats.files[0].path, a);
    assert_eq!(stats.files[0].age_days(), 5);
    assert!(stats.to_string().contains("Total files: 2"));
}
