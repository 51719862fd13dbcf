//! Install command - writes a registry of rendered files into a directory.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, FileMode, GeneratedFiles, ScriptRegistry};
use crate::ports::ScriptWriter;

/// Files written by a successful install, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub written: Vec<PathBuf>,
}

impl InstallReport {
    pub fn extend(&mut self, other: InstallReport) {
        self.written.extend(other.written);
    }
}

/// Write every registry entry to `install_path/<name>` with `mode`.
///
/// Entries are written in name order. The first failure stops the install;
/// files written before it are left in place and listed in the returned
/// `AppError::InstallAborted`. An empty registry touches nothing.
pub fn install_scripts<W: ScriptWriter>(
    writer: &W,
    install_path: &Path,
    registry: &ScriptRegistry,
    mode: FileMode,
) -> Result<InstallReport, AppError> {
    let mut report = InstallReport::default();

    for (name, content) in registry {
        let path = install_path.join(name.as_str());
        if let Err(err) = writer.write_script(&path, content, mode) {
            tracing::warn!(path = %path.display(), error = %err, "install aborted");
            return Err(AppError::InstallAborted {
                path,
                written: report.written,
                source: Box::new(err),
            });
        }
        report.written.push(path);
    }

    if !report.written.is_empty() {
        tracing::info!(
            dir = %install_path.display(),
            count = report.written.len(),
            mode = %mode,
            "installed files"
        );
    }
    Ok(report)
}

/// Install scripts with `mode`, then configs owner read/write only.
pub fn install_files<W: ScriptWriter>(
    writer: &W,
    install_path: &Path,
    files: &GeneratedFiles,
    mode: FileMode,
) -> Result<InstallReport, AppError> {
    let mut report = install_scripts(writer, install_path, &files.scripts, mode)?;
    let configs = install_scripts(writer, install_path, &files.configs, FileMode::ConfigPrivate)
        .map_err(|err| prepend_written(err, &report.written))?;
    report.extend(configs);
    Ok(report)
}

/// Add files written by earlier steps to an `InstallAborted` error.
pub(crate) fn prepend_written(err: AppError, earlier: &[PathBuf]) -> AppError {
    match err {
        AppError::InstallAborted { path, written, source } => {
            let mut all = earlier.to_vec();
            all.extend(written);
            AppError::InstallAborted { path, written: all, source }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FilesystemScriptWriter;
    use crate::testing::MockScriptWriter;
    use std::fs;
    use tempfile::tempdir;

    fn registry(entries: &[(&str, &str)]) -> ScriptRegistry {
        let mut registry = ScriptRegistry::new();
        for (name, content) in entries {
            registry.insert(name, content.to_string()).unwrap();
        }
        registry
    }

    #[test]
    fn empty_registry_writes_nothing() {
        let writer = MockScriptWriter::new();

        let empty = ScriptRegistry::new();

        let report =
            install_scripts(&writer, Path::new("/nonexistent"), &empty, FileMode::OwnerOnly)
                .unwrap();

        assert!(report.written.is_empty());
        assert_eq!(writer.attempts(), 0);
    }

    #[test]
    fn writes_each_entry_under_install_path() {
        let writer = MockScriptWriter::new();
        let scripts = registry(&[("stopall", "b"), ("startall", "a")]);

        let report =
            install_scripts(&writer, Path::new("/tmp/sb1"), &scripts, FileMode::Legacy).unwrap();

        assert_eq!(
            report.written,
            vec![PathBuf::from("/tmp/sb1/startall"), PathBuf::from("/tmp/sb1/stopall")]
        );
        assert_eq!(writer.content_of(Path::new("/tmp/sb1/startall")).as_deref(), Some("a"));
        assert_eq!(writer.mode_of(Path::new("/tmp/sb1/stopall")), Some(FileMode::Legacy));
    }

    #[test]
    fn stops_at_first_failure_and_reports_written() {
        let writer = MockScriptWriter::failing_at(1);
        let scripts = registry(&[("a", "1"), ("b", "2"), ("c", "3")]);

        let err =
            install_scripts(&writer, Path::new("/sb"), &scripts, FileMode::OwnerOnly).unwrap_err();

        match err {
            AppError::InstallAborted { path, written, source } => {
                assert_eq!(path, PathBuf::from("/sb/b"));
                assert_eq!(written, vec![PathBuf::from("/sb/a")]);
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(writer.attempts(), 2, "no write after the failing entry");
        assert_eq!(writer.written_paths(), vec![PathBuf::from("/sb/a")]);
    }

    #[test]
    fn configs_use_private_mode() {
        let writer = MockScriptWriter::new();
        let files = GeneratedFiles {
            scripts: registry(&[("start", "s")]),
            configs: registry(&[("my.sandbox.cnf", "c")]),
        };

        let report = install_files(&writer, Path::new("/sb"), &files, FileMode::OwnerOnly).unwrap();

        assert_eq!(report.written.len(), 2);
        assert_eq!(writer.mode_of(Path::new("/sb/start")), Some(FileMode::OwnerOnly));
        assert_eq!(writer.mode_of(Path::new("/sb/my.sandbox.cnf")), Some(FileMode::ConfigPrivate));
    }

    #[test]
    fn config_failure_reports_scripts_already_written() {
        let writer = MockScriptWriter::failing_at(1);
        let files = GeneratedFiles {
            scripts: registry(&[("start", "s")]),
            configs: registry(&[("my.sandbox.cnf", "c")]),
        };

        let err =
            install_files(&writer, Path::new("/sb"), &files, FileMode::OwnerOnly).unwrap_err();

        match err {
            AppError::InstallAborted { path, written, .. } => {
                assert_eq!(path, PathBuf::from("/sb/my.sandbox.cnf"));
                assert_eq!(written, vec![PathBuf::from("/sb/start")]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_directory_fails_without_writing() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("not-created");
        let scripts = registry(&[("startall", "a"), ("stopall", "b")]);

        let writer = FilesystemScriptWriter::new();

        let err = install_scripts(&writer, &target, &scripts, FileMode::OwnerOnly).unwrap_err();

        assert!(matches!(err, AppError::InstallAborted { ref written, .. } if written.is_empty()));
        assert!(!target.exists());
    }

    #[test]
    fn earlier_files_remain_after_failure() {
        let dir = tempdir().unwrap();
        // A directory where the second file should go makes its create fail.
        fs::create_dir(dir.path().join("b")).unwrap();
        let scripts = registry(&[("a", "first\n"), ("b", "second\n"), ("c", "third\n")]);

        let writer = FilesystemScriptWriter::new();

        let err = install_scripts(&writer, dir.path(), &scripts, FileMode::OwnerOnly).unwrap_err();

        assert!(matches!(err, AppError::InstallAborted { .. }));
        assert_eq!(fs::read_to_string(dir.path().join("a")).unwrap(), "first\n");
        assert!(!dir.path().join("c").exists());
    }
}
