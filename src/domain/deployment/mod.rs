//! Deployment configuration (`sbgen.toml`).

mod model;
pub mod parse;

pub use model::{
    DeploymentConfig, MysqlSection, PROXY_PARTITION_COUNT, PartitionSpec, ProxySpec, SandboxSpec,
};

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "sbgen.toml";

/// Subdirectory of the install path holding the proxy binary and its config.
pub const PROXY_DIR: &str = "dbscale";
