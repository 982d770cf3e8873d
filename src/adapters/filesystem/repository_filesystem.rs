//! `RepositoryFilesystem` implementation for `LocalFilesystem`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::LocalFilesystem;

impl RepositoryFilesystem for LocalFilesystem {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        fs::read(self.resolve_path(path)).map_err(AppError::from)
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        let write_failed = |source| AppError::WriteFailed { path: full_path.clone(), source };
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
        fs::write(&full_path, content).map_err(write_failed)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.resolve_path(path).is_file()
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.root().join(path) }
    }
}
