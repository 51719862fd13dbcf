use std::fmt;
use std::str::FromStr;

use super::AppError;

/// Every template the generator knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateKind {
    SandboxConfig,
    Start,
    Stop,
    SendKill,
    Use,
    ProxyService,
    ProxyConfig,
    ProxyStart,
    ProxyStop,
    StartAll,
    StopAll,
    StartAllSandboxes,
    StopAllSandboxes,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 13] = [
        TemplateKind::SandboxConfig,
        TemplateKind::Start,
        TemplateKind::Stop,
        TemplateKind::SendKill,
        TemplateKind::Use,
        TemplateKind::ProxyService,
        TemplateKind::ProxyConfig,
        TemplateKind::ProxyStart,
        TemplateKind::ProxyStop,
        TemplateKind::StartAll,
        TemplateKind::StopAll,
        TemplateKind::StartAllSandboxes,
        TemplateKind::StopAllSandboxes,
    ];

    /// Name used on the command line and in render errors.
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::SandboxConfig => "sandbox-config",
            TemplateKind::Start => "start",
            TemplateKind::Stop => "stop",
            TemplateKind::SendKill => "send-kill",
            TemplateKind::Use => "use",
            TemplateKind::ProxyService => "proxy-service",
            TemplateKind::ProxyConfig => "proxy-config",
            TemplateKind::ProxyStart => "proxy-start",
            TemplateKind::ProxyStop => "proxy-stop",
            TemplateKind::StartAll => "startall",
            TemplateKind::StopAll => "stopall",
            TemplateKind::StartAllSandboxes => "startallmysql",
            TemplateKind::StopAllSandboxes => "stopallmysql",
        }
    }

    /// File name the rendered template is installed under.
    pub fn file_name(self) -> &'static str {
        match self {
            TemplateKind::SandboxConfig => "my.sandbox.cnf",
            TemplateKind::Start => "start",
            TemplateKind::Stop => "stop",
            TemplateKind::SendKill => "send_kill",
            TemplateKind::Use => "use",
            TemplateKind::ProxyService => "dbscale-service.sh",
            TemplateKind::ProxyConfig => "dbscale.conf",
            TemplateKind::ProxyStart => "dbscale-start.sh",
            TemplateKind::ProxyStop => "dbscale-stop.sh",
            TemplateKind::StartAll => "startall",
            TemplateKind::StopAll => "stopall",
            TemplateKind::StartAllSandboxes => "startallmysql",
            TemplateKind::StopAllSandboxes => "stopallmysql",
        }
    }

    /// Path of the template source inside the embedded asset directory.
    pub fn asset_path(self) -> &'static str {
        match self {
            TemplateKind::SandboxConfig => "sandbox/my.sandbox.cnf.j2",
            TemplateKind::Start => "sandbox/start.j2",
            TemplateKind::Stop => "sandbox/stop.j2",
            TemplateKind::SendKill => "sandbox/send_kill.j2",
            TemplateKind::Use => "sandbox/use.j2",
            TemplateKind::ProxyService => "proxy/dbscale-service.sh.j2",
            TemplateKind::ProxyConfig => "proxy/dbscale.conf.j2",
            TemplateKind::ProxyStart => "proxy/dbscale-start.sh.j2",
            TemplateKind::ProxyStop => "proxy/dbscale-stop.sh.j2",
            TemplateKind::StartAll => "aggregate/startall.j2",
            TemplateKind::StopAll => "aggregate/stopall.j2",
            TemplateKind::StartAllSandboxes => "aggregate/startallmysql.j2",
            TemplateKind::StopAllSandboxes => "aggregate/stopallmysql.j2",
        }
    }

    /// Config files are written without the executable bit.
    pub fn is_config(self) -> bool {
        matches!(self, TemplateKind::SandboxConfig | TemplateKind::ProxyConfig)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateKind::ALL.into_iter().find(|kind| kind.name() == s).ok_or_else(|| {
            AppError::UnknownTemplate {
                name: s.to_string(),
                available: TemplateKind::ALL.map(TemplateKind::name).join(", "),
            }
        })
    }
}
