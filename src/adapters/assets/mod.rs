mod formula_assets;

pub use formula_assets::{EmbeddedFormulaAssets, FORMULA_TEMPLATE, PACKAGE_PROFILE};
