//! Formula command - renders the Homebrew formula for a release and writes it.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, FormulaProfile, ReleaseDescriptor};
use crate::ports::{FormulaRenderer, RepositoryFilesystem};

/// Execute the formula command.
///
/// The formula is rendered completely before anything touches the
/// filesystem, so a failed render never leaves a partial file behind.
/// Parent directories of `output` are created and an existing file is
/// replaced.
///
/// Returns the resolved output path.
pub fn execute<F, R>(
    fs: &F,
    renderer: &R,
    profile: &FormulaProfile,
    release: &ReleaseDescriptor,
    output: &Path,
) -> Result<PathBuf, AppError>
where
    F: RepositoryFilesystem,
    R: FormulaRenderer,
{
    let formula = renderer.render(profile, release)?;
    fs.write_file(output, &formula)?;
    Ok(fs.resolve_path(output))
}
