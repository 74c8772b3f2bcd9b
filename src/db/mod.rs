//! The database handle the database sink writes through.
//!
//! Connection lifecycle belongs to the host; flog only needs to check for its
//! table, run a couple of fixed statements, and insert one row per entry.

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;

use regex::Regex;
use std::sync::LazyLock;

static TABLE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,63}$").expect("Invalid table name regex")
});

/// Minimal capability set a database must expose.
pub trait Database: Send {
    /// Whether `table` already exists.
    ///
    /// # Errors
    /// Backend failures.
    fn table_exists(&mut self, table: &str) -> Result<bool, crate::Error>;

    /// Runs a statement that returns no rows.
    ///
    /// # Errors
    /// Backend failures.
    fn execute(&mut self, sql: &str) -> Result<(), crate::Error>;

    /// Inserts one row; see [`Row::insert_sql`] for a ready-made statement.
    ///
    /// # Errors
    /// Backend failures.
    fn insert(&mut self, table: &str, row: &Row) -> Result<(), crate::Error>;
}

/// Ordered column-to-value mapping for one insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(&'static str, String)>,
}

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((column, value.into()));
        self
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(c, _)| *c)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    /// `INSERT INTO table (a, b) VALUES (?1, ?2)`: values are bound, never inlined.
    #[must_use]
    pub fn insert_sql(&self, table: &str) -> String {
        let columns: Vec<&str> = self.columns().collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
        format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            columns.join(", "),
            placeholders.join(", ")
        )
    }
}

/// Rejects anything but a plain SQL identifier.
///
/// # Errors
/// [`crate::Error::InvalidTableName`].
pub fn validate_table_name(table: &str) -> Result<(), crate::Error> {
    if TABLE_NAME.is_match(table) {
        Ok(())
    } else {
        Err(crate::Error::InvalidTableName(table.to_string()))
    }
}

/// Fixed schema of the log table.
#[must_use]
pub fn create_table_sql(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (\
         id INTEGER PRIMARY KEY AUTOINCREMENT, \
         log_name VARCHAR(255) NOT NULL, \
         date DATETIME NOT NULL, \
         ip VARCHAR(15), \
         level VARCHAR(16), \
         path VARCHAR(250), \
         browser TEXT, \
         text TEXT)"
    )
}

/// Retention statement: rows dated before `cutoff` (`YYYY-MM-DD HH:MM:SS`).
#[must_use]
pub fn purge_sql(table: &str, cutoff: &str) -> String {
    format!("DELETE FROM {table} WHERE date < '{cutoff}'")
}
