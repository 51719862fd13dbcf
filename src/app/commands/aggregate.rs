//! Aggregate start/stop wrappers for a whole installation.

use std::path::Path;

use crate::domain::{AppError, FileMode, InstallPathParams, ScriptRegistry, TemplateKind};
use crate::ports::ScriptWriter;
use crate::services::ScriptRenderer;

use super::install::{InstallReport, install_scripts};

/// Render `startall` and `stopall` for `install_path`.
///
/// `startall` runs `startallmysql` then `dbscale-start.sh`; `stopall` runs
/// `dbscale-stop.sh` then `stopallmysql`. The path is substituted as given.
pub fn render_aggregate_scripts(
    renderer: &ScriptRenderer,
    install_path: &str,
) -> Result<ScriptRegistry, AppError> {
    let params = InstallPathParams { install_path: install_path.to_string() };

    let mut registry = ScriptRegistry::new();
    for kind in [TemplateKind::StartAll, TemplateKind::StopAll] {
        registry.insert(kind.file_name(), renderer.render(kind, &params)?)?;
    }
    Ok(registry)
}

/// Render the aggregate wrappers and install them into `install_path`.
pub fn install_aggregate_scripts<W: ScriptWriter>(
    writer: &W,
    renderer: &ScriptRenderer,
    install_path: &Path,
    mode: FileMode,
) -> Result<InstallReport, AppError> {
    let path_str = install_path.to_str().ok_or_else(|| {
        AppError::config_error(format!(
            "Install path contains invalid unicode: {}",
            install_path.display()
        ))
    })?;
    let registry = render_aggregate_scripts(renderer, path_str)?;
    install_scripts(writer, install_path, &registry, mode)
}
