pub mod error;
pub mod formula_profile;
pub mod icon_set;
pub mod release;

pub use error::AppError;
pub use formula_profile::{FormulaProfile, HeadSource, Launcher, RuntimeLayout, SmokeTest};
pub use icon_set::{HICOLOR_DIR, ICON_SIZES, ICON_SOURCE, IconSet};
pub use release::ReleaseDescriptor;
