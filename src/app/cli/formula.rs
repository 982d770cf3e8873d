//! Formula command implementation.

use std::path::PathBuf;

use crate::domain::AppError;
use clap::Args;

#[derive(Args)]
pub struct FormulaArgs {
    /// Release version written to the formula
    #[arg(long)]
    pub version: String,
    /// Download URL of the release source archive
    #[arg(long)]
    pub url: String,
    /// SHA-256 checksum of the archive
    #[arg(long, alias = "checksum")]
    pub sha256: String,
    /// Path the formula is written to (parent directories are created)
    #[arg(long)]
    pub output: PathBuf,
}

pub fn run_formula(args: FormulaArgs) -> Result<(), AppError> {
    let path = crate::app::api::formula(&args.version, &args.url, &args.sha256, &args.output)?;
    println!("✅ Wrote formula to {}", path.display());
    Ok(())
}
