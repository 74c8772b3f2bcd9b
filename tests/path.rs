//! Path composition and root fallbacks.

use flog::PathResolver;
use flog::path::{file_name, resolve_root_with};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn stream_file_under_all_segments() {
    let resolver = PathResolver::new("/srv/www").path("app").log_dir("logs");
    assert_eq!(resolver.directory(), PathBuf::from("/srv/www/app/logs"));
    assert_eq!(
        resolver.resolve("site"),
        PathBuf::from("/srv/www/app/logs/site.log")
    );
}

#[test]
fn empty_segments_are_skipped() {
    let resolver = PathResolver::new("/srv/www").path("").log_dir("/");
    assert_eq!(resolver.resolve("site"), PathBuf::from("/srv/www/site.log"));
}

#[test]
fn slashes_around_segments_are_trimmed() {
    let resolver = PathResolver::new("/srv").path("/app/").log_dir("logs/");
    assert_eq!(resolver.directory(), PathBuf::from("/srv/app/logs"));
}

#[test]
fn extension_is_not_doubled() {
    assert_eq!(file_name("site"), "site.log");
    assert_eq!(file_name("site.log"), "site.log");
    assert_eq!(file_name("site.old"), "site.old.log");
}

#[test]
fn stream_names_cannot_leave_log_dir() {
    let resolver = PathResolver::new("/srv/www").log_dir("logs");
    assert_eq!(resolver.root(), PathBuf::from("/srv/www"));

    for stream in ["../escaped", "..\\escaped", "a/b/c", "/etc/passwd", ".."] {
        let path = resolver.resolve(stream);
        assert_eq!(path.parent(), Some(resolver.directory().as_path()), "{stream}");
    }
    assert_eq!(file_name("../escaped"), ".._escaped.log");
    assert_eq!(file_name("a/b.log"), "a_b.log");
}

#[test]
fn ensure_log_dir_creates_parents() {
    let tmp = TempDir::new().unwrap();
    let resolver = PathResolver::new(tmp.path()).path("a/b").log_dir("logs");
    let dir = resolver.ensure_log_dir().unwrap();
    assert!(dir.is_dir());
    assert_eq!(dir, tmp.path().join("a/b/logs"));
    // Second call is a no-op.
    assert_eq!(resolver.ensure_log_dir().unwrap(), dir);
}

#[cfg(unix)]
#[test]
fn ensure_log_dir_reports_failure() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("file");
    std::fs::write(&blocker, "x").unwrap();

    let resolver = PathResolver::new(&blocker).log_dir("logs");
    let err = resolver.ensure_log_dir().unwrap_err();
    assert!(matches!(err, flog::Error::CreateDir { .. }));
}

#[test]
fn existing_configured_root_wins() {
    let tmp = TempDir::new().unwrap();
    let configured = tmp.path().to_string_lossy().into_owned();
    assert_eq!(
        resolve_root_with(&configured, Some("/var/www".to_string())),
        tmp.path()
    );
}

#[test]
fn document_root_is_next() {
    assert_eq!(
        resolve_root_with("/definitely/not/here", Some("/var/www/".to_string())),
        PathBuf::from("/var/www")
    );
    assert_eq!(
        resolve_root_with("", Some("/var/www".to_string())),
        PathBuf::from("/var/www")
    );
}

#[test]
fn falls_back_without_document_root() {
    let root = resolve_root_with("", None);
    assert!(!root.as_os_str().is_empty());
}
