//! Database sink against a real `SQLite` file.

#![cfg(feature = "sqlite")]

use flog::{Context, Logger, RequestContext, SinkMode, SqliteDatabase};
use rusqlite::Connection;
use tempfile::TempDir;

#[test]
fn entries_land_in_the_table() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("flog.db");

    let logger = Logger::builder()
        .root_dir(tmp.path())
        .sinks(SinkMode::FILE_DATABASE)
        .request(RequestContext::new().ip("2001:db8::1234:5678:9abc").uri("/api"))
        .database(SqliteDatabase::open(&db_path).unwrap())
        .build()
        .unwrap();
    logger.warning("disk at {pct}%", &Context::new().with("pct", 91));
    logger.info("second", &Context::new());
    logger.close();

    let conn = Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM flog_logs", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 2);

    let (name, ip, level, path, text): (String, String, String, String, String) = conn
        .query_row(
            "SELECT log_name, ip, level, path, text FROM flog_logs ORDER BY id LIMIT 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?)),
        )
        .unwrap();
    assert_eq!(name, "site");
    assert_eq!(ip, "2001:db8::1234:");
    assert_eq!(level, "warning");
    assert_eq!(path, "/api");
    assert_eq!(text, "disk at 91%");
}

#[test]
fn old_rows_are_purged_on_attach() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("flog.db");

    let mut db = SqliteDatabase::open(&db_path).unwrap();
    flog::Database::execute(&mut db, &flog::db::create_table_sql("flog_logs")).unwrap();
    db.connection()
        .execute(
            "INSERT INTO flog_logs (log_name, date, text) VALUES ('site', '2000-01-01 00:00:00', 'ancient')",
            [],
        )
        .unwrap();

    let logger = Logger::builder()
        .root_dir(tmp.path())
        .retention_days(30)
        .build()
        .unwrap();
    logger.attach_database(db).unwrap();
    logger.close();

    let conn = Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM flog_logs", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}
