//! Static package metadata a Homebrew formula is rendered from.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Package metadata that stays fixed across releases.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FormulaProfile {
    /// Ruby class name of the formula (e.g. `ButterflyBot`).
    pub class_name: String,
    pub desc: String,
    pub homepage: String,
    pub license: String,
    pub head: HeadSource,
    /// Formulae declared with `=> :build`.
    #[serde(default)]
    pub build_dependencies: Vec<String>,
    /// Cargo binaries built and installed into `libexec`.
    pub binaries: Vec<String>,
    pub runtime: RuntimeLayout,
    pub launchers: Vec<Launcher>,
    pub test: SmokeTest,
}

/// Development branch referenced by `head`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HeadSource {
    pub url: String,
    pub branch: String,
}

/// Per-user layout the launchers bootstrap at runtime.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeLayout {
    /// Directory name under `$HOME` (e.g. `.butterfly-bot`).
    pub home_dir: String,
    /// Environment variable holding the database path.
    pub db_env: String,
    /// Database file name inside `<home_dir>/data`.
    pub db_file: String,
}

/// A shell wrapper written into `bin/`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Launcher {
    pub name: String,
    /// Binary in `libexec` the wrapper execs.
    pub binary: String,
    /// One-line description shown in caveats.
    pub summary: String,
    /// Prepend `--db <path>` to the forwarded arguments.
    #[serde(default)]
    pub pass_db: bool,
}

/// Assertion run by `brew test`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SmokeTest {
    /// Command line relative to the formula's `bin`.
    pub command: String,
    pub expect: String,
}

impl FormulaProfile {
    /// Parse a profile from TOML and check the invariants the template relies on.
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        let profile: FormulaProfile =
            toml::from_str(content).map_err(|e| AppError::InvalidProfile(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.binaries.is_empty() {
            return Err(AppError::InvalidProfile("at least one binary is required".into()));
        }
        if self.launchers.is_empty() {
            return Err(AppError::InvalidProfile("at least one launcher is required".into()));
        }
        for launcher in &self.launchers {
            if !self.binaries.contains(&launcher.binary) {
                return Err(AppError::InvalidProfile(format!(
                    "launcher '{}' targets unknown binary '{}'",
                    launcher.name, launcher.binary
                )));
            }
        }
        Ok(())
    }

    /// Arguments of the `system` call that builds every binary.
    pub fn build_invocation(&self) -> Vec<String> {
        let mut args: Vec<String> =
            ["cargo", "build", "--release", "--locked"].iter().map(|s| s.to_string()).collect();
        for binary in &self.binaries {
            args.push("--bin".to_string());
            args.push(binary.clone());
        }
        args
    }

    /// Column width that aligns launcher summaries in caveats.
    pub fn launcher_column_width(&self) -> usize {
        self.launchers.iter().map(|l| l.name.len()).max().unwrap_or(0) + 3
    }
}
