//! Formula rendering with Minijinja.
//!
//! The template mixes three expression languages: Minijinja's own `{{ }}`,
//! Homebrew's Ruby interpolation `#{...}` and shell parameter expansion
//! `${...}`. Ruby interpolation and shell expansion of fixed names are plain
//! template text. Shell expansion of a data-driven name goes through
//! `sh_var`/`sh_default`, since `${` followed by `{{` would otherwise open a
//! Minijinja expression.

use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};

use crate::adapters::assets::{EmbeddedFormulaAssets, FORMULA_TEMPLATE};
use crate::domain::{AppError, FormulaProfile, ReleaseDescriptor};
use crate::ports::FormulaRenderer;

fn sh_var(name: &str) -> String {
    format!("${{{}}}", name)
}

fn sh_default(name: &str, fallback: &str) -> String {
    format!("${{{}:-{}}}", name, fallback)
}

fn ruby_args(args: &[String]) -> String {
    args.iter().map(|arg| format!("\"{}\"", arg)).collect::<Vec<_>>().join(", ")
}

fn ljust(value: &str, width: usize) -> String {
    format!("{:<width$}", value, width = width)
}

pub fn build_template_environment(source: &'static str) -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    env.add_function("sh_var", |name: &str| -> String { sh_var(name) });
    env.add_function("sh_default", |name: &str, fallback: &str| -> String {
        sh_default(name, fallback)
    });
    env.add_filter("ruby_args", |args: Vec<String>| -> String { ruby_args(&args) });
    env.add_filter("ljust", |value: &str, width: usize| -> String { ljust(value, width) });

    env.add_template(FORMULA_TEMPLATE, source)
        .map_err(|e| AppError::template_error(FORMULA_TEMPLATE, e))?;

    Ok(env)
}

/// Formula renderer using Minijinja.
pub struct MinijinjaFormulaRenderer {
    env: Environment<'static>,
}

impl MinijinjaFormulaRenderer {
    /// Build a renderer for the given template source.
    pub fn new(source: &'static str) -> Result<Self, AppError> {
        Ok(Self { env: build_template_environment(source)? })
    }

    /// Build a renderer for the embedded formula template.
    pub fn embedded() -> Result<Self, AppError> {
        Self::new(EmbeddedFormulaAssets::template()?)
    }
}

impl FormulaRenderer for MinijinjaFormulaRenderer {
    fn render(
        &self,
        profile: &FormulaProfile,
        release: &ReleaseDescriptor,
    ) -> Result<String, AppError> {
        let template = self
            .env
            .get_template(FORMULA_TEMPLATE)
            .map_err(|e| AppError::template_error(FORMULA_TEMPLATE, e))?;

        let ctx = context! {
            formula => profile,
            release => release,
            build_invocation => profile.build_invocation(),
            name_width => profile.launcher_column_width(),
        };

        template.render(ctx).map_err(|e| AppError::template_error(FORMULA_TEMPLATE, e))
    }
}
