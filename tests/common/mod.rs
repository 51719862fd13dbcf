//! Shared testing utilities for sbgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated work directory and install root.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Absolute install root inside the temp directory. Not created up front.
    pub fn install_path(&self) -> PathBuf {
        self.root.path().join("sb")
    }

    /// Build a command for invoking the compiled `sbgen` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("sbgen").expect("Failed to locate sbgen binary");
        cmd.current_dir(self.work_dir()).env_remove("SBGEN_LOG");
        cmd
    }

    /// Write `sbgen.toml` into the work directory with two sandboxes.
    pub fn write_config(&self) -> PathBuf {
        self.write_config_with(&self.sandboxes_config())
    }

    /// Write `sbgen.toml` with two sandboxes and a proxy section.
    pub fn write_proxy_config(&self) -> PathBuf {
        let content = format!(
            r#"{}
[proxy]
port = 13001
admin_password = "rootpw"
auth_master = "node1"
auth_slave = "node2"
partitions = [
    {{ master = "node1", slave = "node2" }},
    {{ master = "node2", slave = "node1" }},
]
"#,
            self.sandboxes_config()
        );
        self.write_config_with(&content)
    }

    pub fn write_config_with(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("sbgen.toml");
        fs::write(&path, content).expect("Failed to write sbgen.toml");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        let path = self.install_path().join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    fn sandboxes_config(&self) -> String {
        format!(
            r#"install_path = "{}"

[mysql]
basedir = "/opt/mysql/5.7.30"

[[sandbox]]
name = "node1"
port = 3307
server_id = 1

[[sandbox]]
name = "node2"
port = 3308
server_id = 2
"#,
            self.install_path().display()
        )
    }
}
