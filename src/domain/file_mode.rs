use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::AppError;

/// Permission bits applied to generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileMode {
    /// `rwx------`: executable scripts readable only by the owner.
    #[default]
    OwnerOnly,
    /// `rwxr--r--`: group and other may read the script.
    Legacy,
    /// `rw-------`: non-executable config files carrying credentials.
    ConfigPrivate,
}

impl FileMode {
    pub fn bits(self) -> u32 {
        match self {
            FileMode::OwnerOnly => 0o700,
            FileMode::Legacy => 0o744,
            FileMode::ConfigPrivate => 0o600,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileMode::OwnerOnly => "owner-only",
            FileMode::Legacy => "legacy",
            FileMode::ConfigPrivate => "config-private",
        }
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:o})", self.label(), self.bits())
    }
}

impl FromStr for FileMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner-only" => Ok(FileMode::OwnerOnly),
            "legacy" => Ok(FileMode::Legacy),
            "config-private" => Ok(FileMode::ConfigPrivate),
            other => Err(AppError::config_error(format!(
                "Invalid file mode '{}': must be one of owner-only, legacy, config-private",
                other
            ))),
        }
    }
}
