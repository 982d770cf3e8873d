//! Icon resizing backed by the `image` crate.

use std::path::Path;

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::domain::AppError;
use crate::ports::{IconResizer, ResizedIcon};

/// Lanczos3 resizer emitting RGBA PNGs.
///
/// Encoding uses fixed compression settings, so the same source always
/// yields the same bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct LanczosIconResizer;

impl LanczosIconResizer {
    pub fn new() -> Self {
        Self
    }

    fn encode_png(origin: &Path, icon: &RgbaImage) -> Result<Vec<u8>, AppError> {
        let mut png = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut png, CompressionType::Best, PngFilter::Adaptive);
        encoder
            .write_image(icon.as_raw(), icon.width(), icon.height(), ExtendedColorType::Rgba8)
            .map_err(|e| AppError::Image { path: origin.to_path_buf(), details: e.to_string() })?;
        Ok(png)
    }
}

impl IconResizer for LanczosIconResizer {
    fn resize(
        &self,
        origin: &Path,
        source: &[u8],
        sizes: &[u32],
    ) -> Result<Vec<ResizedIcon>, AppError> {
        let master = image::load_from_memory(source)
            .map_err(|e| AppError::Image { path: origin.to_path_buf(), details: e.to_string() })?
            .to_rgba8();

        sizes
            .iter()
            .map(|&size| {
                let icon = imageops::resize(&master, size, size, FilterType::Lanczos3);
                Ok(ResizedIcon { size, png: Self::encode_png(origin, &icon)? })
            })
            .collect()
    }
}
