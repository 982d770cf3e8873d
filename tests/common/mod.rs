//! Shared testing utilities for butterfly-release CLI tests.

use assert_cmd::Command;
use image::{ImageFormat, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub const SHA: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// Testing harness providing an isolated repository checkout for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the repository directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path outside the repository directory.
    pub fn outside(&self) -> PathBuf {
        self.root.path().join("outside")
    }

    /// Build a command for invoking the compiled binary within the repository directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("butterfly-release").expect("Failed to locate butterfly-release binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Path to the master icon.
    pub fn icon_source(&self) -> PathBuf {
        self.work_dir.join("assets/icon.png")
    }

    /// Path of the generated icon for `size`.
    pub fn icon_output(&self, size: u32) -> PathBuf {
        self.work_dir
            .join("assets/icons/hicolor")
            .join(format!("{size}x{size}"))
            .join("apps/butterfly-bot.png")
    }

    /// Write a non-square master icon with a transparent right half.
    pub fn write_master_icon(&self, width: u32, height: u32) {
        let image = RgbaImage::from_fn(width, height, |x, y| {
            let alpha = if x < width / 2 { 255 } else { 0 };
            Rgba([(x * 7 % 256) as u8, (y * 3 % 256) as u8, 200, alpha])
        });
        let path = self.icon_source();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create assets dir");
        image.save_with_format(&path, ImageFormat::Png).expect("Failed to write master icon");
    }

    /// Count files under the generated hicolor tree.
    pub fn generated_icon_count(&self) -> usize {
        let hicolor = self.work_dir.join("assets/icons/hicolor");
        if !hicolor.exists() {
            return 0;
        }
        fs::read_dir(hicolor)
            .unwrap()
            .map(|size_dir| {
                let apps = size_dir.unwrap().path().join("apps");
                fs::read_dir(apps).map(|entries| entries.count()).unwrap_or(0)
            })
            .sum()
    }
}
