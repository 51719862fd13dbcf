//! Typed parameter records, one per template.
//!
//! Field names are the placeholder names used by the matching template, so a
//! record can only be rendered against the template it was built for.

use serde::Serialize;

use super::SandboxName;

/// Fields for `my.sandbox.cnf`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SandboxConfigParams {
    pub db_user: String,
    pub db_password: String,
    pub os_user: String,
    pub port: u16,
    pub socket_dir: String,
    pub basedir: String,
    pub sandbox_dir: String,
    pub server_id: u32,
}

/// Fields for the `start` script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartParams {
    pub basedir: String,
    pub sandbox_dir: String,
    pub port: u16,
}

/// Fields for the `stop` script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopParams {
    pub basedir: String,
    pub sandbox_dir: String,
    pub port: u16,
}

/// Fields for the `send_kill` script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendKillParams {
    pub sandbox_dir: String,
    pub port: u16,
}

/// Fields for the `use` script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseParams {
    pub basedir: String,
    pub sandbox_dir: String,
    pub port: u16,
}

/// Fields shared by templates that only reference the installation directory:
/// the proxy service wrapper, the proxy start/stop shims and `startall`/`stopall`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallPathParams {
    pub install_path: String,
}

/// Fields for `startallmysql` and `stopallmysql`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SandboxListParams {
    pub install_path: String,
    pub sandboxes: Vec<SandboxName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

/// A backend server as seen by the proxy. Always on `127.0.0.1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataServer {
    pub port: u16,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionParams {
    pub master: DataServer,
    pub slave: DataServer,
    pub credentials: Credentials,
}

/// Fields for `dbscale.conf`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyConfigParams {
    pub log_file: String,
    pub admin: Credentials,
    pub port: u16,
    pub catalog: Credentials,
    pub auth_master: DataServer,
    pub auth_slave: DataServer,
    pub partition1: PartitionParams,
    pub partition2: PartitionParams,
}
