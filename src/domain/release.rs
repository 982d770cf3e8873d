use serde::Serialize;

/// Release coordinates a formula is rendered for.
///
/// All three values are opaque: they are interpolated verbatim and never
/// inspected, trimmed, or validated for shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseDescriptor {
    pub version: String,
    pub url: String,
    pub sha256: String,
}

impl ReleaseDescriptor {
    pub fn new(
        version: impl Into<String>,
        url: impl Into<String>,
        sha256: impl Into<String>,
    ) -> Self {
        Self { version: version.into(), url: url.into(), sha256: sha256.into() }
    }
}
