//! Where a stream's file lives: `root[/path][/log_dir]/<stream>.log`.
//!
//! Pure path composition: nothing here touches the filesystem except the
//! root fallback check and [`PathResolver::ensure_log_dir`].

use crate::internal;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension appended to every stream name.
pub const EXTENSION: &str = "log";

/// Resolves stream names to file paths under one log directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    root: PathBuf,
    path: Option<String>,
    log_dir: Option<String>,
}

impl PathResolver {
    /// Uses `root` as-is; see [`resolve_root`] for the fallback chain.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            path: None,
            log_dir: None,
        }
    }

    /// Segment between the root and the log directory; empty means none.
    #[must_use]
    pub fn path(mut self, segment: impl Into<String>) -> Self {
        self.path = non_empty(&segment.into());
        self
    }

    /// Log directory name; empty means files go straight into root (and path).
    #[must_use]
    pub fn log_dir(mut self, dir: impl Into<String>) -> Self {
        self.log_dir = non_empty(&dir.into());
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `root[/path][/log_dir]`.
    #[must_use]
    pub fn directory(&self) -> PathBuf {
        let mut dir = self.root.clone();
        if let Some(path) = &self.path {
            dir.push(path);
        }
        if let Some(log_dir) = &self.log_dir {
            dir.push(log_dir);
        }
        dir
    }

    /// Full path of a stream's current file; always a direct child of
    /// [`PathResolver::directory`].
    #[must_use]
    pub fn resolve(&self, stream: &str) -> PathBuf {
        self.directory().join(file_name(stream))
    }

    /// Creates the log directory (and any missing parents) with mode 0755.
    ///
    /// # Errors
    /// [`crate::Error::CreateDir`] naming the directory that couldn't be created.
    pub fn ensure_log_dir(&self) -> Result<PathBuf, crate::Error> {
        let dir = self.directory();
        if dir.is_dir() {
            return Ok(dir);
        }

        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }

        match builder.create(&dir) {
            Ok(()) => {
                internal::info("PATH", &format!("Created directory: {}", dir.display()));
                Ok(dir)
            }
            Err(source) => {
                internal::error(
                    "PATH",
                    &format!("Unable to create folder {}: {source}", dir.display()),
                );
                Err(crate::Error::CreateDir { path: dir, source })
            }
        }
    }
}

/// `<stream>.log`, without doubling an extension the caller already wrote.
///
/// Path separators in the stream name become `_`, so every stream stays a
/// single file directly inside the log directory: `"../x"` maps to
/// `.._x.log`.
#[must_use]
pub fn file_name(stream: &str) -> String {
    let flat = stream.replace(['/', '\\'], "_");
    if Path::new(&flat)
        .extension()
        .is_some_and(|ext| ext == EXTENSION)
    {
        flat
    } else {
        format!("{flat}.{EXTENSION}")
    }
}

/// Picks the root directory: the configured one if it exists, then
/// `DOCUMENT_ROOT`, then the platform state directory, then `.`.
#[must_use]
pub fn resolve_root(configured: &str) -> PathBuf {
    resolve_root_with(configured, std::env::var("DOCUMENT_ROOT").ok())
}

/// [`resolve_root`] with the document root passed in.
#[must_use]
pub fn resolve_root_with(configured: &str, document_root: Option<String>) -> PathBuf {
    if !configured.trim().is_empty() {
        let expanded = PathBuf::from(shellexpand::tilde(configured.trim()).as_ref());
        if expanded.exists() {
            return expanded;
        }
        internal::warn(
            "PATH",
            &format!("Root {} does not exist, falling back", expanded.display()),
        );
    }

    if let Some(doc_root) = document_root
        && !doc_root.trim().is_empty()
    {
        let trimmed = doc_root.trim().trim_end_matches(['/', '\\']);
        return PathBuf::from(if trimmed.is_empty() { "/" } else { trimmed });
    }

    directories::ProjectDirs::from("", "", "flog").map_or_else(
        || PathBuf::from("."),
        |dirs| dirs.state_dir().unwrap_or_else(|| dirs.data_dir()).to_path_buf(),
    )
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim().trim_matches(['/', '\\']);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
