//! Render command - prints one template without touching the filesystem.

use serde::Serialize;

use crate::domain::{
    AppError, DeploymentConfig, InstallPathParams, SandboxListParams, SandboxSpec, TemplateKind,
};
use crate::services::ScriptRenderer;

use super::proxy::proxy_config_params;
use super::sandbox;

/// A single rendered template and the file name it installs under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTemplate {
    pub template: String,
    pub file_name: String,
    pub content: String,
}

/// Render `kind` with values taken from `config`.
///
/// Per-sandbox templates need `sandbox_name` unless the config defines exactly
/// one sandbox. Proxy config rendering requires a `[proxy]` section.
pub fn execute(
    renderer: &ScriptRenderer,
    config: &DeploymentConfig,
    kind: TemplateKind,
    sandbox_name: Option<&str>,
) -> Result<RenderedTemplate, AppError> {
    let install = InstallPathParams { install_path: config.install_root().to_string() };

    let content = match kind {
        TemplateKind::SandboxConfig => {
            let target = select_sandbox(config, sandbox_name)?;
            renderer.render(kind, &sandbox::config_params(config, target))?
        }
        TemplateKind::Start => {
            let target = select_sandbox(config, sandbox_name)?;
            renderer.render(kind, &sandbox::start_params(config, target))?
        }
        TemplateKind::Stop => {
            let target = select_sandbox(config, sandbox_name)?;
            renderer.render(kind, &sandbox::stop_params(config, target))?
        }
        TemplateKind::SendKill => {
            let target = select_sandbox(config, sandbox_name)?;
            renderer.render(kind, &sandbox::send_kill_params(config, target))?
        }
        TemplateKind::Use => {
            let target = select_sandbox(config, sandbox_name)?;
            renderer.render(kind, &sandbox::use_params(config, target))?
        }
        TemplateKind::ProxyConfig => {
            let proxy = config.proxy.as_ref().ok_or_else(|| {
                AppError::config_error("Template 'proxy-config' requires a [proxy] section")
            })?;
            renderer.render(kind, &proxy_config_params(config, proxy)?)?
        }
        TemplateKind::StartAllSandboxes | TemplateKind::StopAllSandboxes => {
            let list = SandboxListParams {
                install_path: install.install_path.clone(),
                sandboxes: config.sandbox_names(),
            };
            renderer.render(kind, &list)?
        }
        TemplateKind::ProxyService
        | TemplateKind::ProxyStart
        | TemplateKind::ProxyStop
        | TemplateKind::StartAll
        | TemplateKind::StopAll => renderer.render(kind, &install)?,
    };

    Ok(RenderedTemplate {
        template: kind.name().to_string(),
        file_name: kind.file_name().to_string(),
        content,
    })
}

fn select_sandbox<'a>(
    config: &'a DeploymentConfig,
    name: Option<&str>,
) -> Result<&'a SandboxSpec, AppError> {
    match (name, config.sandboxes.as_slice()) {
        (Some(name), _) => config.sandbox(name),
        (None, [only]) => Ok(only),
        (None, _) => Err(AppError::config_error(format!(
            "Config defines {} sandboxes; choose one with --sandbox",
            config.sandboxes.len()
        ))),
    }
}
