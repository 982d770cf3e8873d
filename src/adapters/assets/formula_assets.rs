//! Formula template and package profile embedded at build time.

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, FormulaProfile};

/// Embedded formula asset directory.
static FORMULA_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/formula");

/// Template file inside the formula asset directory.
pub const FORMULA_TEMPLATE: &str = "formula.rb.j2";

/// Package profile inside the formula asset directory.
pub const PACKAGE_PROFILE: &str = "package.toml";

/// Loader for the embedded formula assets.
pub struct EmbeddedFormulaAssets;

impl EmbeddedFormulaAssets {
    /// Raw source of the formula template.
    pub fn template() -> Result<&'static str, AppError> {
        Self::read_utf8(FORMULA_TEMPLATE)
    }

    /// Parsed package profile.
    pub fn profile() -> Result<FormulaProfile, AppError> {
        FormulaProfile::from_toml(Self::read_utf8(PACKAGE_PROFILE)?)
    }

    fn read_utf8(name: &str) -> Result<&'static str, AppError> {
        let file = FORMULA_DIR
            .get_file(name)
            .ok_or_else(|| AppError::template_error(name, "embedded asset not found"))?;
        file.contents_utf8()
            .ok_or_else(|| AppError::template_error(name, "embedded asset is not valid UTF-8"))
    }
}
