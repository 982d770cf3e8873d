//! Filesystem adapter for the `RepositoryFilesystem` port.

mod repository_filesystem;

use std::path::{Path, PathBuf};

/// Filesystem-backed store rooted at a repository directory.
///
/// Relative paths resolve against the root. Absolute paths pass through
/// unchanged so formula output can land in a separate tap checkout.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
