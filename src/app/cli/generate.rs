//! Generate and aggregate command implementations.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

use super::ModeArg;

pub fn run_generate(config: Option<PathBuf>, mode: Option<ModeArg>) -> Result<(), AppError> {
    let report = crate::app::api::generate(config.as_deref(), mode.map(Into::into))?;

    println!(
        "✅ Generated {} file(s) for {} sandbox(es) in {}",
        report.written.len(),
        report.sandboxes,
        report.install_path.display()
    );
    if report.proxy {
        println!("  Includes DBScale proxy scripts and startall/stopall");
    }
    Ok(())
}

pub fn run_aggregate(install_path: &Path, mode: ModeArg) -> Result<(), AppError> {
    let report = crate::app::api::install_aggregate_scripts(install_path, mode.into())?;

    println!("✅ Installed {} wrapper script(s)", report.written.len());
    for path in &report.written {
        println!("  • {}", path.display());
    }
    Ok(())
}
