//! CLI Adapter.

mod formula;
mod icons;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "butterfly-release")]
#[command(version)]
#[command(
    about = "Generate Butterfly Bot release artifacts (Homebrew formula, hicolor icons)",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the Homebrew formula for a release
    #[clap(visible_alias = "f")]
    Formula(formula::FormulaArgs),
    /// Generate hicolor icons from assets/icon.png
    #[clap(visible_alias = "i")]
    Icons,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Formula(args) => formula::run_formula(args),
        Commands::Icons => icons::run_icons(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
