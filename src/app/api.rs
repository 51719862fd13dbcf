//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution against the local filesystem.

use std::path::Path;

use crate::adapters::FilesystemScriptWriter;
use crate::app::commands::{aggregate, generate, install, render};
use crate::app::{AppContext, config};
use crate::services::ScriptRenderer;

pub use crate::app::commands::generate::GenerateReport;
pub use crate::app::commands::install::InstallReport;
pub use crate::app::commands::render::RenderedTemplate;
pub use crate::domain::{AppError, FileMode, ScriptRegistry, TemplateKind};

fn create_context() -> Result<AppContext<FilesystemScriptWriter>, AppError> {
    AppContext::new(FilesystemScriptWriter::new())
}

/// Generate a full deployment from `config_path` (default `./sbgen.toml`).
///
/// `mode` overrides the script mode set in the config file.
pub fn generate(
    config_path: Option<&Path>,
    mode: Option<FileMode>,
) -> Result<GenerateReport, AppError> {
    let path = config::resolve_config_path(config_path)?;
    let mut deployment = config::load_config(&path)?;
    if let Some(mode) = mode {
        deployment.mode = mode;
        deployment.validate()?;
    }

    let ctx = create_context()?;
    generate::execute(&ctx, &deployment)
}

/// Render one template with values from `config_path` (default `./sbgen.toml`).
pub fn render(
    config_path: Option<&Path>,
    kind: TemplateKind,
    sandbox: Option<&str>,
) -> Result<RenderedTemplate, AppError> {
    let path = config::resolve_config_path(config_path)?;
    let deployment = config::load_config(&path)?;
    let renderer = ScriptRenderer::new()?;
    render::execute(&renderer, &deployment, kind, sandbox)
}

/// Render the `startall`/`stopall` wrappers for `install_path`.
pub fn render_aggregate_scripts(install_path: &str) -> Result<ScriptRegistry, AppError> {
    let renderer = ScriptRenderer::new()?;
    aggregate::render_aggregate_scripts(&renderer, install_path)
}

/// Write every registry entry into `install_path` with `mode`.
pub fn install_scripts(
    install_path: &Path,
    registry: &ScriptRegistry,
    mode: FileMode,
) -> Result<InstallReport, AppError> {
    install::install_scripts(&FilesystemScriptWriter::new(), install_path, registry, mode)
}

/// Render and install the `startall`/`stopall` wrappers into `install_path`.
pub fn install_aggregate_scripts(
    install_path: &Path,
    mode: FileMode,
) -> Result<InstallReport, AppError> {
    let ctx = create_context()?;
    aggregate::install_aggregate_scripts(ctx.writer(), ctx.renderer(), install_path, mode)
}
