//! Icons command implementation.

use crate::domain::AppError;

pub fn run_icons() -> Result<(), AppError> {
    let report = crate::app::api::generate_icons()?;
    println!("✅ Generated {} icon sizes from {}", report.count(), report.source.display());
    Ok(())
}
