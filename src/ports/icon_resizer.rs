use std::path::Path;

use crate::domain::AppError;

/// One encoded square icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizedIcon {
    pub size: u32,
    pub png: Vec<u8>,
}

/// Port for deriving square PNG icons from a master image.
pub trait IconResizer {
    /// Decode `source` once and produce one icon per entry of `sizes`, in order.
    ///
    /// `origin` is only used in error messages.
    fn resize(
        &self,
        origin: &Path,
        source: &[u8],
        sizes: &[u32],
    ) -> Result<Vec<ResizedIcon>, AppError>;
}
