//! Output port for generated files.

use std::path::Path;

use crate::domain::{AppError, FileMode};

/// Port for emitting generated files.
///
/// Implementations write each file as one create/write/chmod/close sequence.
/// They do not create missing parent directories on `write_script`.
pub trait ScriptWriter {
    /// Create (or truncate) `path`, write `content` verbatim and apply `mode`.
    fn write_script(&self, path: &Path, content: &str, mode: FileMode) -> Result<(), AppError>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;
}
