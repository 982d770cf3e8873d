use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for release artifact generation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Writing an output file failed.
    #[error("Failed to write {}: {}", .path.display(), .source)]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The embedded package profile could not be parsed.
    #[error("Invalid package profile: {0}")]
    InvalidProfile(String),

    /// The embedded formula template failed to load or render.
    #[error("Template error in '{template}': {reason}")]
    Template { template: String, reason: String },

    /// Master icon image is missing.
    #[error("Missing source icon: {}", .0.display())]
    IconSourceMissing(PathBuf),

    /// Master icon could not be decoded, or a resized icon could not be encoded.
    #[error("Image error for {}: {}", .path.display(), .details)]
    Image { path: PathBuf, details: String },
}

impl AppError {
    pub fn template_error<N: Into<String>, R: ToString>(template: N, reason: R) -> Self {
        AppError::Template { template: template.into(), reason: reason.to_string() }
    }

    /// Map onto `io::ErrorKind`: missing icon source is `NotFound`, bad embedded
    /// assets or images are `InvalidData`, I/O failures keep their own kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::WriteFailed { source, .. } => source.kind(),
            AppError::InvalidProfile(_) | AppError::Template { .. } | AppError::Image { .. } => {
                io::ErrorKind::InvalidData
            }
            AppError::IconSourceMissing(_) => io::ErrorKind::NotFound,
        }
    }
}
