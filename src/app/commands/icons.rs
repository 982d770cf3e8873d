//! Icons command - derives the hicolor icon set from the master icon.

use std::path::PathBuf;

use crate::domain::{AppError, IconSet};
use crate::ports::{IconResizer, RepositoryFilesystem};

/// Result of an icon generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconReport {
    /// Resolved path of the master icon.
    pub source: PathBuf,
    /// Resolved output paths, in size order.
    pub outputs: Vec<PathBuf>,
}

impl IconReport {
    pub fn count(&self) -> usize {
        self.outputs.len()
    }
}

/// Execute the icons command.
///
/// The master icon is decoded and every size resized before the first
/// output is written, so a missing or unreadable source produces no files.
pub fn execute<F, R>(fs: &F, resizer: &R, icons: &IconSet) -> Result<IconReport, AppError>
where
    F: RepositoryFilesystem,
    R: IconResizer,
{
    let source = icons.source();
    let resolved_source = fs.resolve_path(&source);
    if !fs.file_exists(&source) {
        return Err(AppError::IconSourceMissing(resolved_source));
    }

    let master = fs.read_bytes(&source)?;
    let resized = resizer.resize(&resolved_source, &master, icons.sizes())?;

    let mut outputs = Vec::with_capacity(resized.len());
    for icon in resized {
        let path = icons.output_path(icon.size);
        fs.write_bytes(&path, &icon.png)?;
        outputs.push(fs.resolve_path(&path));
    }

    Ok(IconReport { source: resolved_source, outputs })
}
