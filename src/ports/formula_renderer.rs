use crate::domain::{AppError, FormulaProfile, ReleaseDescriptor};

/// Port for rendering a Homebrew formula.
///
/// This abstraction keeps the template engine out of the domain and
/// command layers.
pub trait FormulaRenderer {
    /// Render the formula text for `release` using the package `profile`.
    ///
    /// Implementations must be pure: identical inputs yield identical bytes.
    fn render(
        &self,
        profile: &FormulaProfile,
        release: &ReleaseDescriptor,
    ) -> Result<String, AppError>;
}
