//! Filesystem adapter for the `ScriptWriter` port.

mod script_writer;

/// Writes generated files straight to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemScriptWriter;

impl FilesystemScriptWriter {
    pub fn new() -> Self {
        Self
    }
}
