//! Helpers shared by the integration tests.

#![allow(dead_code)]

use flog::{Database, Error, Row};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Cloneable in-memory writer for capturing the stderr sink.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Records statements and rows instead of talking to a real database.
#[derive(Clone, Default)]
pub struct MockDb {
    pub rows: Arc<Mutex<Vec<(String, Row)>>>,
    pub statements: Arc<Mutex<Vec<String>>>,
    pub has_table: bool,
    pub broken: bool,
}

impl MockDb {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl Database for MockDb {
    fn table_exists(&mut self, _table: &str) -> Result<bool, Error> {
        if self.broken {
            return Err(Error::Database("connection refused".to_string()));
        }
        Ok(self.has_table)
    }

    fn execute(&mut self, sql: &str) -> Result<(), Error> {
        self.statements.lock().unwrap().push(sql.to_string());
        Ok(())
    }

    fn insert(&mut self, table: &str, row: &Row) -> Result<(), Error> {
        self.rows
            .lock()
            .unwrap()
            .push((table.to_string(), row.clone()));
        Ok(())
    }
}
