//! Appends entries to `<log_dir>/<stream>.log`, rotating first when the file is too big.

use super::Sink;
use crate::entry::LogEntry;
use crate::internal;
use crate::path::PathResolver;
use crate::rotation;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// File sink configuration.
#[derive(Debug, Clone)]
pub struct FileSink {
    resolver: PathResolver,
    /// Rotation threshold in bytes.
    max_bytes: u64,
}

impl FileSink {
    #[must_use]
    pub const fn new(resolver: PathResolver, max_bytes: u64) -> Self {
        Self {
            resolver,
            max_bytes,
        }
    }

    #[must_use]
    pub const fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    #[must_use]
    pub const fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Current file of a stream.
    #[must_use]
    pub fn path_for(&self, stream: &str) -> PathBuf {
        self.resolver.resolve(stream)
    }
}

impl Sink for FileSink {
    fn name(&self) -> &'static str {
        "file"
    }

    fn write(&mut self, entry: &LogEntry) -> Result<(), crate::Error> {
        let path = self.path_for(entry.stream());

        // A failed rotation still leaves a usable (oversized) file to append to.
        if let Err(e) = rotation::rotate_if_needed(&path, self.max_bytes) {
            internal::warn(
                "FILE",
                &format!("Rotation of {} failed: {e}", path.display()),
            );
        }

        // Single write per entry keeps small appends atomic at the OS level
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(entry.line().as_bytes())?;
        Ok(())
    }
}
