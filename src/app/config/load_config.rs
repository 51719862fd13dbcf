//! Deployment configuration loading from disk.

use std::path::{Path, PathBuf};

use crate::domain::deployment::parse::parse_config_content;
use crate::domain::{AppError, CONFIG_FILE, DeploymentConfig};

/// Explicit path if given, otherwise `sbgen.toml` in the current directory.
pub fn resolve_config_path(path: Option<&Path>) -> Result<PathBuf, AppError> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => Ok(std::env::current_dir()?.join(CONFIG_FILE)),
    }
}

/// Load and validate the deployment configuration at `path`.
pub fn load_config(path: &Path) -> Result<DeploymentConfig, AppError> {
    if !path.exists() {
        return Err(AppError::ConfigMissing(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config = parse_config_content(&content)?;
    tracing::debug!(path = %path.display(), sandboxes = config.sandboxes.len(), "loaded config");
    Ok(config)
}
