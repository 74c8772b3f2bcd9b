//! Size-triggered rotation to dated archive names.

use chrono::{DateTime, Local};
use flog::rotate_if_needed;
use flog::rotation::archive_path;
use std::fs::{self, File};
use std::path::Path;
use std::time::SystemTime;
use tempfile::tempdir;

fn mtime_date(path: &Path) -> String {
    let modified: SystemTime = fs::metadata(path).unwrap().modified().unwrap();
    DateTime::<Local>::from(modified).format("%Y%m%d").to_string()
}

#[test]
fn missing_file_is_not_rotated() {
    let dir = tempdir().unwrap();
    let result = rotate_if_needed(&dir.path().join("site.log"), 10).unwrap();
    assert!(result.is_none());
}

#[test]
fn file_at_threshold_is_not_rotated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("site.log");
    fs::write(&path, vec![b'x'; 10]).unwrap();

    assert!(rotate_if_needed(&path, 10).unwrap().is_none());
    assert!(path.exists());
}

#[test]
fn oversized_file_gets_dated_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("site.log");
    fs::write(&path, vec![b'x'; 11]).unwrap();
    let date = mtime_date(&path);

    let archive = rotate_if_needed(&path, 10).unwrap().unwrap();

    assert_eq!(archive, dir.path().join(format!("site{date}.log")));
    assert!(archive.exists());
    assert!(!path.exists());
}

#[test]
fn second_rotation_same_day_gets_suffix() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("site.log");

    fs::write(&path, vec![b'x'; 11]).unwrap();
    let date = mtime_date(&path);
    let first = rotate_if_needed(&path, 10).unwrap().unwrap();

    fs::write(&path, vec![b'y'; 11]).unwrap();
    File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(fs::metadata(&first).unwrap().modified().unwrap())
        .unwrap();
    let second = rotate_if_needed(&path, 10).unwrap().unwrap();

    assert_eq!(second, dir.path().join(format!("site{date}_1.log")));
    assert_eq!(fs::read(&first).unwrap(), vec![b'x'; 11]);
    assert_eq!(fs::read(&second).unwrap(), vec![b'y'; 11]);
}

#[test]
fn archive_path_splits_at_first_dot() {
    let dir = tempdir().unwrap();
    assert_eq!(
        archive_path(&dir.path().join("site.log.old"), "20261017"),
        dir.path().join("site20261017.log.old")
    );
    assert_eq!(
        archive_path(&dir.path().join("noext"), "20261017"),
        dir.path().join("noext20261017")
    );
}

#[test]
fn archive_path_probes_past_taken_suffixes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("site20261017.log"), "").unwrap();
    fs::write(dir.path().join("site20261017_1.log"), "").unwrap();
    assert_eq!(
        archive_path(&dir.path().join("site.log"), "20261017"),
        dir.path().join("site20261017_2.log")
    );
}
