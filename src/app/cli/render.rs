//! Render command implementation.

use std::path::PathBuf;

use crate::domain::{AppError, TemplateKind};

use super::OutputFormat;

pub fn run_render(
    template: &str,
    config: Option<PathBuf>,
    sandbox: Option<String>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let kind: TemplateKind = template.parse()?;
    let rendered = crate::app::api::render(config.as_deref(), kind, sandbox.as_deref())?;

    match format {
        OutputFormat::Text => print!("{}", rendered.content),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rendered)?),
    }
    Ok(())
}
