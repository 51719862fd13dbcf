use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for sbgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// An install stopped at its first failure. Files written before it stay on disk.
    #[error(
        "Failed to install {}: {source} ({} file(s) already written)",
        .path.display(),
        .written.len()
    )]
    InstallAborted {
        path: PathBuf,
        written: Vec<PathBuf>,
        #[source]
        source: Box<AppError>,
    },

    /// Script file name is invalid.
    #[error(
        "Invalid script name '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidScriptName(String),

    /// Sandbox name is invalid.
    #[error("Invalid sandbox name '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidSandboxName(String),

    /// The same script name was registered twice.
    #[error("Script '{0}' is already registered")]
    DuplicateScript(String),

    /// Embedded template asset is missing from the binary.
    #[error("Embedded template missing: {0}")]
    TemplateMissing(String),

    /// Template name given on the command line does not exist.
    #[error("Unknown template '{name}'. Available: {available}")]
    UnknownTemplate { name: String, available: String },

    /// Rendering a template failed (including unresolved placeholders).
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Deployment config file not found.
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// Sandbox referenced by name is not defined.
    #[error("Sandbox '{name}' not found. Available: {available}")]
    SandboxNotFound { name: String, available: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InstallAborted { source, .. } => source.kind(),
            AppError::InvalidScriptName(_)
            | AppError::InvalidSandboxName(_)
            | AppError::UnknownTemplate { .. }
            | AppError::TemplateRender { .. }
            | AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::DuplicateScript(_) => io::ErrorKind::AlreadyExists,
            AppError::TemplateMissing(_)
            | AppError::ConfigMissing(_)
            | AppError::SandboxNotFound { .. } => io::ErrorKind::NotFound,
        }
    }
}
