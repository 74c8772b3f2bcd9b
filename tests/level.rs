//! Tests for log level functionality.

use flog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Notice);
    assert!(Level::Notice < Level::Warning);
    assert!(Level::Warning < Level::Error);
    assert!(Level::Error < Level::Critical);
    assert!(Level::Critical < Level::Alert);
    assert!(Level::Alert < Level::Emergency);
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Warning.to_string(), "warning");
    assert_eq!(Level::Emergency.to_string(), "emergency");
}

#[test]
fn level_tag_is_uppercase() {
    for level in Level::all() {
        assert_eq!(level.tag(), level.as_str().to_uppercase());
    }
}

#[test]
fn level_from_str() {
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Notice".parse::<Level>().unwrap(), Level::Notice);
    assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("crit".parse::<Level>().unwrap(), Level::Critical);
    assert_eq!(" emerg ".parse::<Level>().unwrap(), Level::Emergency);
}

#[test]
fn level_from_str_invalid() {
    let err = "trace".parse::<Level>().unwrap_err();
    assert!(err.to_string().contains("trace"));
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Debug);
}
