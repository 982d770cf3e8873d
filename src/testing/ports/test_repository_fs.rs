//! Test double for `RepositoryFilesystem`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
#[derive(Clone, Debug, Default)]
pub struct MockRepositoryFs {
    files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
    read_only: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MockRepositoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.into());
        self
    }

    /// Make writes to `path` fail with `PermissionDenied`.
    pub fn with_read_only(self, path: impl Into<PathBuf>) -> Self {
        self.read_only.lock().unwrap().insert(path.into());
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn text(&self, path: impl AsRef<Path>) -> Option<String> {
        self.contents(path).map(|bytes| String::from_utf8(bytes).unwrap())
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

impl RepositoryFilesystem for MockRepositoryFs {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        self.contents(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<(), AppError> {
        if self.read_only.lock().unwrap().contains(path) {
            return Err(AppError::WriteFailed {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            });
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}
