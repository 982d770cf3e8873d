//! butterfly-release: release artifact generation for Butterfly Bot.
//!
//! Renders the Homebrew formula for a release and derives the hicolor icon
//! set from the master application icon.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    APP_NAME, IconReport, formula, formula_at, generate_icons, generate_icons_at, render_formula,
};
pub use domain::{AppError, FormulaProfile, ICON_SIZES, IconSet, ReleaseDescriptor};
