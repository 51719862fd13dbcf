pub mod deployment;
pub mod error;
pub mod file_mode;
pub mod identifiers;
pub mod params;
pub mod registry;
pub mod template_kind;

pub use deployment::{
    CONFIG_FILE, DeploymentConfig, MysqlSection, PROXY_DIR, PartitionSpec, ProxySpec,
    SandboxSpec,
};
pub use error::AppError;
pub use file_mode::FileMode;
pub use identifiers::{SandboxName, ScriptName};
pub use params::{
    Credentials, DataServer, InstallPathParams, PartitionParams, ProxyConfigParams,
    SandboxConfigParams, SandboxListParams, SendKillParams, StartParams, StopParams, UseParams,
};
pub use registry::{GeneratedFiles, ScriptRegistry};
pub use template_kind::TemplateKind;
