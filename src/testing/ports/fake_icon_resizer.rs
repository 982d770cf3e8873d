//! Test double for `IconResizer`.

use std::cell::RefCell;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::{IconResizer, ResizedIcon};

/// Resizer that emits `"<size>:<source len>"` instead of PNG data.
#[derive(Debug, Default)]
pub struct FakeIconResizer {
    pub calls: RefCell<Vec<Vec<u32>>>,
    pub fail_with: Option<String>,
}

impl FakeIconResizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(details: &str) -> Self {
        Self { fail_with: Some(details.to_string()), ..Self::default() }
    }
}

impl IconResizer for FakeIconResizer {
    fn resize(
        &self,
        origin: &Path,
        source: &[u8],
        sizes: &[u32],
    ) -> Result<Vec<ResizedIcon>, AppError> {
        self.calls.borrow_mut().push(sizes.to_vec());
        if let Some(details) = &self.fail_with {
            return Err(AppError::Image { path: origin.to_path_buf(), details: details.clone() });
        }
        Ok(sizes
            .iter()
            .map(|&size| ResizedIcon { size, png: format!("{}:{}", size, source.len()).into_bytes() })
            .collect())
    }
}
