//! Repository-level filesystem operations.
//!
//! Relative paths resolve against the filesystem root; absolute paths are
//! used as given, so callers may target files outside the repository.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for low-level filesystem operations used by the generators.
pub trait RepositoryFilesystem {
    /// Read a file as raw bytes.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError>;

    /// Write bytes to a file, creating parent directories and replacing any existing file.
    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<(), AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.write_bytes(path, content.as_bytes())
    }

    /// Check whether a regular file exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// Resolve a path against the root.
    fn resolve_path(&self, path: &Path) -> PathBuf;
}
