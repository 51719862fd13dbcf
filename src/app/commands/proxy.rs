//! DBScale proxy files: service wrapper, start/stop shims and `dbscale.conf`.

use crate::domain::{
    AppError, Credentials, DataServer, DeploymentConfig, GeneratedFiles, InstallPathParams,
    PartitionParams, PartitionSpec, ProxyConfigParams, ProxySpec, SandboxName, TemplateKind,
};
use crate::services::ScriptRenderer;

/// Build the proxy config fields, resolving sandbox names to ports.
pub fn proxy_config_params(
    config: &DeploymentConfig,
    proxy: &ProxySpec,
) -> Result<ProxyConfigParams, AppError> {
    let [first, second] = proxy.partitions.as_slice() else {
        return Err(AppError::config_error(format!(
            "Proxy requires exactly 2 partitions, got {}",
            proxy.partitions.len()
        )));
    };

    Ok(ProxyConfigParams {
        log_file: proxy.log_file(config.install_root()),
        admin: Credentials {
            user: proxy.admin_user.clone(),
            password: proxy.admin_password.clone(),
        },
        port: proxy.port,
        catalog: backend_credentials(config),
        auth_master: data_server(config, &proxy.auth_master)?,
        auth_slave: data_server(config, &proxy.auth_slave)?,
        partition1: partition(config, first)?,
        partition2: partition(config, second)?,
    })
}

fn backend_credentials(config: &DeploymentConfig) -> Credentials {
    Credentials { user: config.mysql.user.clone(), password: config.mysql.password.clone() }
}

fn data_server(config: &DeploymentConfig, name: &SandboxName) -> Result<DataServer, AppError> {
    let sandbox = config.sandbox(name.as_str())?;
    Ok(DataServer {
        port: sandbox.port,
        user: config.mysql.user.clone(),
        password: config.mysql.password.clone(),
    })
}

fn partition(config: &DeploymentConfig, spec: &PartitionSpec) -> Result<PartitionParams, AppError> {
    Ok(PartitionParams {
        master: data_server(config, &spec.master)?,
        slave: data_server(config, &spec.slave)?,
        credentials: backend_credentials(config),
    })
}

/// Render every proxy file that lives directly under the install path.
pub fn proxy_files(
    renderer: &ScriptRenderer,
    config: &DeploymentConfig,
    proxy: &ProxySpec,
) -> Result<GeneratedFiles, AppError> {
    let install = InstallPathParams { install_path: config.install_root().to_string() };
    let mut files = GeneratedFiles::default();

    for kind in [TemplateKind::ProxyService, TemplateKind::ProxyStart, TemplateKind::ProxyStop] {
        files.scripts.insert(kind.file_name(), renderer.render(kind, &install)?)?;
    }
    files.configs.insert(
        TemplateKind::ProxyConfig.file_name(),
        renderer.render(TemplateKind::ProxyConfig, &proxy_config_params(config, proxy)?)?,
    )?;

    tracing::debug!(port = proxy.port, files = files.len(), "rendered proxy files");
    Ok(files)
}
