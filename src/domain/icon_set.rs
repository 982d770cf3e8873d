//! Fixed hicolor icon layout derived from one master image.

use std::path::PathBuf;

/// Master icon, relative to the repository root.
pub const ICON_SOURCE: &str = "assets/icon.png";

/// Root of the generated hicolor theme, relative to the repository root.
pub const HICOLOR_DIR: &str = "assets/icons/hicolor";

/// Edge lengths generated from the master icon.
pub const ICON_SIZES: [u32; 8] = [16, 24, 32, 48, 64, 128, 256, 512];

/// The icon set for one application name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    app_name: String,
}

impl IconSet {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self { app_name: app_name.into() }
    }

    pub fn source(&self) -> PathBuf {
        PathBuf::from(ICON_SOURCE)
    }

    pub fn sizes(&self) -> &'static [u32] {
        &ICON_SIZES
    }

    /// `assets/icons/hicolor/{size}x{size}/apps/<app>.png`
    pub fn output_path(&self, size: u32) -> PathBuf {
        PathBuf::from(HICOLOR_DIR)
            .join(format!("{size}x{size}"))
            .join("apps")
            .join(format!("{}.png", self.app_name))
    }
}
