mod formula_renderer;
mod icon_resizer;
mod repository_filesystem;

pub use formula_renderer::FormulaRenderer;
pub use icon_resizer::{IconResizer, ResizedIcon};
pub use repository_filesystem::RepositoryFilesystem;
