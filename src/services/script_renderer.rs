use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::adapters::assets::template_assets::template_source;
use crate::domain::{AppError, TemplateKind};

/// Renders the embedded templates against their typed parameter records.
///
/// Templates use `[[[ field ]]]` for substitution and `[% ... %]` for blocks so
/// that shell `${...}` and INI `[section]` text stays literal. Undefined fields
/// are errors, output is never escaped and the trailing newline is kept.
pub struct ScriptRenderer {
    env: Environment<'static>,
}

impl ScriptRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        let syntax = SyntaxConfig::builder()
            .block_delimiters("[%", "%]")
            .variable_delimiters("[[[", "]]]")
            .comment_delimiters("[#", "#]")
            .build()
            .map_err(|err| {
                AppError::config_error(format!("Failed to configure template syntax: {}", err))
            })?;
        env.set_syntax(syntax);

        for kind in TemplateKind::ALL {
            let source = template_source(kind)?;
            env.add_template(kind.name(), source)
                .map_err(|err| template_render_error(kind.name(), err))?;
        }

        Ok(Self { env })
    }

    /// Render `kind` with the fields of `params`.
    pub fn render<P: Serialize>(&self, kind: TemplateKind, params: &P) -> Result<String, AppError> {
        let rendered = self
            .env
            .get_template(kind.name())
            .map_err(|err| template_render_error(kind.name(), err))?
            .render(params)
            .map_err(|err| template_render_error(kind.name(), err))?;
        tracing::trace!(template = kind.name(), bytes = rendered.len(), "rendered template");
        Ok(rendered)
    }
}

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
}
