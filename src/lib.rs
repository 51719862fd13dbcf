//! sbgen: generate start/stop/kill/use scripts for local database sandboxes
//! and the DBScale routing proxy.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    GenerateReport, InstallReport, RenderedTemplate, generate, install_aggregate_scripts,
    install_scripts, render, render_aggregate_scripts,
};
pub use domain::{AppError, FileMode, ScriptRegistry, TemplateKind};
