//! One row per entry in a fixed-schema table.

use super::Sink;
use crate::db::{self, Database, Row};
use crate::entry::LogEntry;
use crate::internal;

use chrono::{DateTime, Duration, FixedOffset};
use std::fmt;

/// Column limits of the fixed schema.
const IP_MAX_CHARS: usize = 15;
const PATH_MAX_CHARS: usize = 250;

/// Normalized `date` column format.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes the structured fields of each entry; the formatted line is never parsed back.
pub struct DatabaseSink {
    db: Box<dyn Database>,
    table: String,
}

impl fmt::Debug for DatabaseSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSink")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

impl DatabaseSink {
    /// Validates the table name and creates the table when it's missing.
    ///
    /// # Errors
    /// Invalid table name, or the handle failing the existence check or the
    /// `CREATE TABLE`.
    pub fn new(mut db: Box<dyn Database>, table: impl Into<String>) -> Result<Self, crate::Error> {
        let table = table.into();
        db::validate_table_name(&table)?;

        if !db.table_exists(&table)? {
            internal::info("DATABASE", &format!("Creating table {table}"));
            db.execute(&db::create_table_sql(&table))?;
        }

        Ok(Self { db, table })
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Deletes rows dated more than `days` before `now`.
    ///
    /// # Errors
    /// Failure reported by the handle.
    pub fn purge_older_than(
        &mut self,
        days: u32,
        now: DateTime<FixedOffset>,
    ) -> Result<(), crate::Error> {
        let cutoff = now - Duration::days(i64::from(days));
        let sql = db::purge_sql(&self.table, &cutoff.format(DATE_FORMAT).to_string());
        internal::debug("DATABASE", &format!("Purging rows before {cutoff}"));
        self.db.execute(&sql)
    }

    /// Column values for one entry.
    #[must_use]
    pub fn row(entry: &LogEntry) -> Row {
        Row::new()
            .field("log_name", entry.stream())
            .field("date", entry.timestamp().format(DATE_FORMAT).to_string())
            .field("ip", truncate(entry.ip(), IP_MAX_CHARS))
            .field("level", entry.level().as_str())
            .field("path", truncate(entry.uri(), PATH_MAX_CHARS))
            .field("browser", entry.user_agent())
            .field("text", entry.message())
    }
}

impl Sink for DatabaseSink {
    fn name(&self) -> &'static str {
        "database"
    }

    fn write(&mut self, entry: &LogEntry) -> Result<(), crate::Error> {
        self.db.insert(&self.table, &Self::row(entry))
    }
}

/// Truncates on a char boundary.
fn truncate(s: &str, max_chars: usize) -> &str {
    s.char_indices().nth(max_chars).map_or(s, |(idx, _)| &s[..idx])
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("ééééé", 2), "éé");
    }
}
