//! Outcome of one sweep: the logger reports failures, the CLI prints both lists.

use super::format_size;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct SweepResult {
    /// Files removed because they exceeded the age limit.
    pub deleted: Vec<PathBuf>,
    /// Bytes reclaimed by the deletions.
    pub freed: u64,
    /// Files that could not be inspected or removed, with the reason.
    pub failed: Vec<(String, String)>,
}

impl SweepResult {
    #[must_use]
    pub const fn count(&self) -> usize {
        self.deleted.len()
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for SweepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.deleted.is_empty() {
            writeln!(f, "No files deleted")?;
        } else {
            writeln!(
                f,
                "Deleted {} file(s), freed {}",
                self.deleted.len(),
                format_size(self.freed)
            )?;
            for path in &self.deleted {
                writeln!(f, "  {}", path.display())?;
            }
        }
        for (path, err) in &self.failed {
            writeln!(f, "Failed: {path}: {err}")?;
        }
        Ok(())
    }
}
