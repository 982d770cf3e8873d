pub mod assets;
pub mod filesystem;
pub mod image_resizer;
pub mod template;
