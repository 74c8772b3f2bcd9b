//! `SQLite` backend over `rusqlite`.

use super::{Database, Row};
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use std::path::Path;

/// Owns one connection; the host decides where the file lives.
#[derive(Debug)]
pub struct SqliteDatabase {
    conn: Connection,
}

impl SqliteDatabase {
    /// Opens (or creates) a database file.
    ///
    /// # Errors
    /// Open failures from `SQLite`.
    pub fn open(path: &Path) -> Result<Self, crate::Error> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    /// Private in-memory database, mostly for tests.
    ///
    /// # Errors
    /// Open failures from `SQLite`.
    pub fn in_memory() -> Result<Self, crate::Error> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Wraps a connection the host already configured.
    #[must_use]
    pub const fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl Database for SqliteDatabase {
    fn table_exists(&mut self, table: &str) -> Result<bool, crate::Error> {
        let found: Option<String> = self
            .conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn execute(&mut self, sql: &str) -> Result<(), crate::Error> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    fn insert(&mut self, table: &str, row: &Row) -> Result<(), crate::Error> {
        self.conn
            .execute(&row.insert_sql(table), params_from_iter(row.values()))?;
        Ok(())
    }
}
