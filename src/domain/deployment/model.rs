use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, FileMode, SandboxName, TemplateKind};

use super::PROXY_DIR;

/// Deployment description loaded from `sbgen.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentConfig {
    /// Absolute directory every generated file lives under.
    pub install_path: String,
    /// Permission bits for generated scripts.
    #[serde(default)]
    pub mode: FileMode,
    pub mysql: MysqlSection,
    #[serde(rename = "sandbox", default)]
    pub sandboxes: Vec<SandboxSpec>,
    #[serde(default)]
    pub proxy: Option<ProxySpec>,
}

/// Server binaries and credentials shared by all sandboxes.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MysqlSection {
    pub basedir: String,
    #[serde(default = "default_db_user")]
    pub user: String,
    #[serde(default = "default_db_password")]
    pub password: String,
    #[serde(default = "default_os_user")]
    pub os_user: String,
    #[serde(default = "default_socket_dir")]
    pub socket_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SandboxSpec {
    pub name: SandboxName,
    pub port: u16,
    pub server_id: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartitionSpec {
    pub master: SandboxName,
    pub slave: SandboxName,
}

/// DBScale routing proxy in front of the sandboxes.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxySpec {
    pub port: u16,
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default = "default_admin")]
    pub admin_user: String,
    #[serde(default = "default_admin")]
    pub admin_password: String,
    pub auth_master: SandboxName,
    pub auth_slave: SandboxName,
    pub partitions: Vec<PartitionSpec>,
}

pub const PROXY_PARTITION_COUNT: usize = 2;

fn default_db_user() -> String {
    "msandbox".to_string()
}

fn default_db_password() -> String {
    "msandbox".to_string()
}

fn default_os_user() -> String {
    "mysql".to_string()
}

fn default_socket_dir() -> String {
    "/tmp".to_string()
}

fn default_admin() -> String {
    "root".to_string()
}

impl DeploymentConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.install_path.trim().is_empty() {
            return Err(AppError::config_error("install_path must not be empty"));
        }
        if !Path::new(&self.install_path).is_absolute() {
            return Err(AppError::config_error(format!(
                "install_path must be absolute, got '{}'",
                self.install_path
            )));
        }
        if self.mode == FileMode::ConfigPrivate {
            return Err(AppError::config_error(
                "mode 'config-private' is not executable; use owner-only or legacy",
            ));
        }
        if self.sandboxes.is_empty() {
            return Err(AppError::config_error("At least one [[sandbox]] must be defined"));
        }

        let mut names = BTreeSet::new();
        let mut ports = BTreeSet::new();
        let mut server_ids = BTreeSet::new();
        for sandbox in &self.sandboxes {
            if self.reserved_names().contains(&sandbox.name.as_str()) {
                return Err(AppError::config_error(format!(
                    "Sandbox name '{}' clashes with a generated top-level file",
                    sandbox.name
                )));
            }
            if !names.insert(sandbox.name.as_str()) {
                return Err(AppError::config_error(format!(
                    "Duplicate sandbox name '{}'",
                    sandbox.name
                )));
            }
            if !ports.insert(sandbox.port) {
                return Err(AppError::config_error(format!(
                    "Duplicate port {} (sandbox '{}')",
                    sandbox.port, sandbox.name
                )));
            }
            if !server_ids.insert(sandbox.server_id) {
                return Err(AppError::config_error(format!(
                    "Duplicate server_id {} (sandbox '{}')",
                    sandbox.server_id, sandbox.name
                )));
            }
        }

        if let Some(proxy) = &self.proxy {
            if ports.contains(&proxy.port) {
                return Err(AppError::config_error(format!(
                    "Proxy port {} collides with a sandbox port",
                    proxy.port
                )));
            }
            if proxy.partitions.len() != PROXY_PARTITION_COUNT {
                return Err(AppError::config_error(format!(
                    "Proxy requires exactly {} partitions, got {}",
                    PROXY_PARTITION_COUNT,
                    proxy.partitions.len()
                )));
            }
            self.sandbox(proxy.auth_master.as_str())?;
            self.sandbox(proxy.auth_slave.as_str())?;
            for partition in &proxy.partitions {
                self.sandbox(partition.master.as_str())?;
                self.sandbox(partition.slave.as_str())?;
            }
        }

        Ok(())
    }

    /// Top-level entries `generate` writes next to the sandbox directories.
    fn reserved_names(&self) -> Vec<&'static str> {
        let mut reserved = vec![
            TemplateKind::StartAllSandboxes.file_name(),
            TemplateKind::StopAllSandboxes.file_name(),
        ];
        if self.proxy.is_some() {
            reserved.extend([
                TemplateKind::StartAll.file_name(),
                TemplateKind::StopAll.file_name(),
                PROXY_DIR,
            ]);
        }
        reserved
    }

    /// Look up a sandbox by name.
    pub fn sandbox(&self, name: &str) -> Result<&SandboxSpec, AppError> {
        self.sandboxes.iter().find(|s| s.name.as_str() == name).ok_or_else(|| {
            AppError::SandboxNotFound {
                name: name.to_string(),
                available: self
                    .sandboxes
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })
    }

    /// Sandbox names in declaration order.
    pub fn sandbox_names(&self) -> Vec<SandboxName> {
        self.sandboxes.iter().map(|s| s.name.clone()).collect()
    }

    /// Directory holding one sandbox's scripts and data.
    pub fn sandbox_dir(&self, sandbox: &SandboxSpec) -> String {
        format!("{}/{}", self.install_path.trim_end_matches('/'), sandbox.name)
    }

    /// `install_path` without trailing separators.
    pub fn install_root(&self) -> &str {
        let trimmed = self.install_path.trim_end_matches('/');
        if trimmed.is_empty() { "/" } else { trimmed }
    }
}

impl ProxySpec {
    /// Log file path, defaulting to `dbscale.log` inside the proxy directory.
    pub fn log_file(&self, install_root: &str) -> String {
        self.log_file
            .clone()
            .unwrap_or_else(|| format!("{}/{}/dbscale.log", install_root, PROXY_DIR))
    }
}
