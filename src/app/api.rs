//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together adapter
//! construction and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::assets::EmbeddedFormulaAssets;
use crate::adapters::filesystem::LocalFilesystem;
use crate::adapters::image_resizer::LanczosIconResizer;
use crate::adapters::template::MinijinjaFormulaRenderer;
use crate::app::commands;
use crate::domain::{IconSet, ReleaseDescriptor};
use crate::ports::FormulaRenderer;

pub use crate::app::commands::icons::IconReport;
pub use crate::domain::AppError;

/// Application name used for generated icon file names.
pub const APP_NAME: &str = "butterfly-bot";

// =============================================================================
// Formula API
// =============================================================================

/// Render the Homebrew formula for a release.
///
/// The values are interpolated verbatim. An error here means the embedded
/// template or package profile is defective, never that an input was rejected.
pub fn render_formula(version: &str, url: &str, sha256: &str) -> Result<String, AppError> {
    let profile = EmbeddedFormulaAssets::profile()?;
    let renderer = MinijinjaFormulaRenderer::embedded()?;
    renderer.render(&profile, &ReleaseDescriptor::new(version, url, sha256))
}

/// Render the formula and write it to `output`, resolved against the current directory.
pub fn formula(
    version: &str,
    url: &str,
    sha256: &str,
    output: &Path,
) -> Result<PathBuf, AppError> {
    formula_at(std::env::current_dir()?, version, url, sha256, output)
}

/// Render the formula and write it to `output`, resolved against `root`.
pub fn formula_at(
    root: impl Into<PathBuf>,
    version: &str,
    url: &str,
    sha256: &str,
    output: &Path,
) -> Result<PathBuf, AppError> {
    let fs = LocalFilesystem::new(root.into());
    let profile = EmbeddedFormulaAssets::profile()?;
    let renderer = MinijinjaFormulaRenderer::embedded()?;
    let release = ReleaseDescriptor::new(version, url, sha256);
    commands::formula::execute(&fs, &renderer, &profile, &release, output)
}

// =============================================================================
// Icons API
// =============================================================================

/// Generate the hicolor icon set for the repository in the current directory.
pub fn generate_icons() -> Result<IconReport, AppError> {
    generate_icons_at(std::env::current_dir()?)
}

/// Generate the hicolor icon set for the repository at `root`.
pub fn generate_icons_at(root: impl Into<PathBuf>) -> Result<IconReport, AppError> {
    let fs = LocalFilesystem::new(root.into());
    commands::icons::execute(&fs, &LanczosIconResizer::new(), &IconSet::new(APP_NAME))
}
