//! Per-sandbox scripts: `my.sandbox.cnf`, `start`, `stop`, `send_kill`, `use`.

use crate::domain::{
    AppError, DeploymentConfig, GeneratedFiles, SandboxConfigParams, SandboxSpec, SendKillParams,
    StartParams, StopParams, TemplateKind, UseParams,
};
use crate::services::ScriptRenderer;

pub fn config_params(config: &DeploymentConfig, sandbox: &SandboxSpec) -> SandboxConfigParams {
    SandboxConfigParams {
        db_user: config.mysql.user.clone(),
        db_password: config.mysql.password.clone(),
        os_user: config.mysql.os_user.clone(),
        port: sandbox.port,
        socket_dir: config.mysql.socket_dir.clone(),
        basedir: config.mysql.basedir.clone(),
        sandbox_dir: config.sandbox_dir(sandbox),
        server_id: sandbox.server_id,
    }
}

pub fn start_params(config: &DeploymentConfig, sandbox: &SandboxSpec) -> StartParams {
    StartParams {
        basedir: config.mysql.basedir.clone(),
        sandbox_dir: config.sandbox_dir(sandbox),
        port: sandbox.port,
    }
}

pub fn stop_params(config: &DeploymentConfig, sandbox: &SandboxSpec) -> StopParams {
    StopParams {
        basedir: config.mysql.basedir.clone(),
        sandbox_dir: config.sandbox_dir(sandbox),
        port: sandbox.port,
    }
}

pub fn send_kill_params(config: &DeploymentConfig, sandbox: &SandboxSpec) -> SendKillParams {
    SendKillParams { sandbox_dir: config.sandbox_dir(sandbox), port: sandbox.port }
}

pub fn use_params(config: &DeploymentConfig, sandbox: &SandboxSpec) -> UseParams {
    UseParams {
        basedir: config.mysql.basedir.clone(),
        sandbox_dir: config.sandbox_dir(sandbox),
        port: sandbox.port,
    }
}

/// Render every file that belongs in one sandbox directory.
pub fn sandbox_files(
    renderer: &ScriptRenderer,
    config: &DeploymentConfig,
    sandbox: &SandboxSpec,
) -> Result<GeneratedFiles, AppError> {
    let mut files = GeneratedFiles::default();

    files.configs.insert(
        TemplateKind::SandboxConfig.file_name(),
        renderer.render(TemplateKind::SandboxConfig, &config_params(config, sandbox))?,
    )?;

    let scripts = [
        (
            TemplateKind::Start,
            renderer.render(TemplateKind::Start, &start_params(config, sandbox))?,
        ),
        (TemplateKind::Stop, renderer.render(TemplateKind::Stop, &stop_params(config, sandbox))?),
        (
            TemplateKind::SendKill,
            renderer.render(TemplateKind::SendKill, &send_kill_params(config, sandbox))?,
        ),
        (TemplateKind::Use, renderer.render(TemplateKind::Use, &use_params(config, sandbox))?),
    ];
    for (kind, content) in scripts {
        files.scripts.insert(kind.file_name(), content)?;
    }

    tracing::debug!(sandbox = %sandbox.name, files = files.len(), "rendered sandbox files");
    Ok(files)
}
