//! Pure parse/validate for deployment configuration (`sbgen.toml`).

use crate::domain::{AppError, DeploymentConfig};

/// Parse and validate deployment configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<DeploymentConfig, AppError> {
    let config: DeploymentConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
