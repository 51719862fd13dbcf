//! Generate command - renders and installs a full deployment from `sbgen.toml`.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{
    AppError, DeploymentConfig, FileMode, PROXY_DIR, SandboxListParams, ScriptRegistry,
    TemplateKind,
};
use crate::ports::ScriptWriter;

use super::aggregate::render_aggregate_scripts;
use super::install::{InstallReport, install_files, install_scripts, prepend_written};
use super::proxy::proxy_files;
use super::sandbox::sandbox_files;

/// Outcome of a full deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub install_path: PathBuf,
    pub sandboxes: usize,
    pub proxy: bool,
    pub written: Vec<PathBuf>,
}

/// Execute the generate command.
///
/// Layout under `install_path`:
/// - `<sandbox>/` with `my.sandbox.cnf`, `start`, `stop`, `send_kill`, `use`
/// - `startallmysql`, `stopallmysql`
/// - with a proxy: `dbscale-service.sh`, `dbscale-start.sh`, `dbscale-stop.sh`,
///   `dbscale/dbscale.conf`, and the `startall`/`stopall` wrappers
///
/// Stops at the first write failure, reporting everything written so far.
pub fn execute<W: ScriptWriter>(
    ctx: &AppContext<W>,
    config: &DeploymentConfig,
) -> Result<GenerateReport, AppError> {
    let writer = ctx.writer();
    let renderer = ctx.renderer();
    let root = Path::new(config.install_root());
    let mut report = InstallReport::default();

    writer.create_dir_all(root)?;

    for sandbox in &config.sandboxes {
        let files = sandbox_files(renderer, config, sandbox)?;
        let dir = PathBuf::from(config.sandbox_dir(sandbox));
        writer.create_dir_all(&dir).map_err(|err| abort(&dir, err, &report))?;
        let step = install_files(writer, &dir, &files, config.mode)
            .map_err(|err| prepend_written(err, &report.written))?;
        report.extend(step);
    }

    let list = SandboxListParams {
        install_path: config.install_root().to_string(),
        sandboxes: config.sandbox_names(),
    };
    let mut top_level = ScriptRegistry::new();
    for kind in [TemplateKind::StartAllSandboxes, TemplateKind::StopAllSandboxes] {
        top_level.insert(kind.file_name(), renderer.render(kind, &list)?)?;
    }

    if let Some(proxy) = &config.proxy {
        let files = proxy_files(renderer, config, proxy)?;
        for (name, content) in files.scripts.iter() {
            top_level.insert(name.as_str(), content.to_string())?;
        }
        for (name, content) in render_aggregate_scripts(renderer, config.install_root())?.iter() {
            top_level.insert(name.as_str(), content.to_string())?;
        }

        let proxy_dir = root.join(PROXY_DIR);
        writer.create_dir_all(&proxy_dir).map_err(|err| abort(&proxy_dir, err, &report))?;
        let step = install_scripts(writer, &proxy_dir, &files.configs, FileMode::ConfigPrivate)
            .map_err(|err| prepend_written(err, &report.written))?;
        report.extend(step);
    }

    let step = install_scripts(writer, root, &top_level, config.mode)
        .map_err(|err| prepend_written(err, &report.written))?;
    report.extend(step);

    tracing::info!(
        install_path = %root.display(),
        sandboxes = config.sandboxes.len(),
        files = report.written.len(),
        "deployment generated"
    );

    Ok(GenerateReport {
        install_path: root.to_path_buf(),
        sandboxes: config.sandboxes.len(),
        proxy: config.proxy.is_some(),
        written: report.written,
    })
}

fn abort(path: &Path, err: AppError, report: &InstallReport) -> AppError {
    AppError::InstallAborted {
        path: path.to_path_buf(),
        written: report.written.clone(),
        source: Box::new(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::deployment::parse::parse_config_content;
    use crate::testing::MockScriptWriter;

    const TWO_SANDBOXES: &str = r#"
install_path = "/tmp/sb1"

[mysql]
basedir = "/opt/mysql"

[[sandbox]]
name = "m1"
port = 3307
server_id = 1

[[sandbox]]
name = "s1"
port = 3308
server_id = 2
"#;

    const PROXY: &str = r#"
[proxy]
port = 13001
auth_master = "m1"
auth_slave = "s1"
partitions = [{ master = "m1", slave = "s1" }, { master = "s1", slave = "m1" }]
"#;

    #[test]
    fn sandboxes_only_layout() {
        let config = parse_config_content(TWO_SANDBOXES).unwrap();
        let ctx = AppContext::new(MockScriptWriter::new()).unwrap();

        let report = execute(&ctx, &config).unwrap();

        assert_eq!(report.sandboxes, 2);
        assert!(!report.proxy);
        assert_eq!(report.written.len(), 2 * 5 + 2);
        let paths = ctx.writer().written_paths();
        assert!(paths.contains(&PathBuf::from("/tmp/sb1/m1/start")));
        assert!(paths.contains(&PathBuf::from("/tmp/sb1/s1/my.sandbox.cnf")));
        assert!(paths.contains(&PathBuf::from("/tmp/sb1/startallmysql")));
        assert!(!paths.contains(&PathBuf::from("/tmp/sb1/startall")));
        assert_eq!(
            *ctx.writer().dirs.borrow(),
            vec![
                PathBuf::from("/tmp/sb1"),
                PathBuf::from("/tmp/sb1/m1"),
                PathBuf::from("/tmp/sb1/s1")
            ]
        );
    }

    #[test]
    fn proxy_adds_wrappers_and_config() {
        let config = parse_config_content(&format!("{TWO_SANDBOXES}{PROXY}")).unwrap();
        let ctx = AppContext::new(MockScriptWriter::new()).unwrap();

        let report = execute(&ctx, &config).unwrap();

        assert!(report.proxy);
        let writer = ctx.writer();
        for name in [
            "startall",
            "stopall",
            "startallmysql",
            "stopallmysql",
            "dbscale-service.sh",
            "dbscale-start.sh",
            "dbscale-stop.sh",
        ] {
            let path = PathBuf::from("/tmp/sb1").join(name);
            assert_eq!(writer.mode_of(&path), Some(FileMode::OwnerOnly), "{name}");
        }
        assert_eq!(
            writer.mode_of(Path::new("/tmp/sb1/dbscale/dbscale.conf")),
            Some(FileMode::ConfigPrivate)
        );
    }

    #[test]
    fn legacy_mode_applies_to_scripts_only() {
        let content = TWO_SANDBOXES.replacen(
            "install_path = \"/tmp/sb1\"",
            "install_path = \"/tmp/sb1\"\nmode = \"legacy\"",
            1,
        );
        let config = parse_config_content(&content).unwrap();
        let ctx = AppContext::new(MockScriptWriter::new()).unwrap();

        execute(&ctx, &config).unwrap();

        let writer = ctx.writer();
        assert_eq!(writer.mode_of(Path::new("/tmp/sb1/m1/stop")), Some(FileMode::Legacy));
        assert_eq!(
            writer.mode_of(Path::new("/tmp/sb1/m1/my.sandbox.cnf")),
            Some(FileMode::ConfigPrivate)
        );
    }

    #[test]
    fn failure_reports_files_from_earlier_sandboxes() {
        let config = parse_config_content(TWO_SANDBOXES).unwrap();
        // First sandbox writes 5 files; fail on the second sandbox's first write.
        let ctx = AppContext::new(MockScriptWriter::failing_at(5)).unwrap();

        let err = execute(&ctx, &config).unwrap_err();

        match err {
            AppError::InstallAborted { path, written, .. } => {
                assert_eq!(path, PathBuf::from("/tmp/sb1/s1/send_kill"));
                assert_eq!(written.len(), 5);
                assert!(written.iter().all(|p| p.starts_with("/tmp/sb1/m1")));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
