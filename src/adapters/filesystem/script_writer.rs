//! `ScriptWriter` implementation for `FilesystemScriptWriter`.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::domain::{AppError, FileMode};
use crate::ports::ScriptWriter;

use super::FilesystemScriptWriter;

impl ScriptWriter for FilesystemScriptWriter {
    fn write_script(&self, path: &Path, content: &str, mode: FileMode) -> Result<(), AppError> {
        let mut file = open_for_write(path, mode)?;
        // Narrow an already existing file before any new content lands in it.
        set_mode(&file, mode)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        tracing::debug!(path = %path.display(), mode = %mode, bytes = content.len(), "wrote file");
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(AppError::from)
    }
}

/// Create new files with `mode` from the start instead of the umask default.
#[cfg(unix)]
fn open_for_write(path: &Path, mode: FileMode) -> Result<File, AppError> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode.bits())
        .open(path)
        .map_err(AppError::from)
}

#[cfg(not(unix))]
fn open_for_write(path: &Path, _mode: FileMode) -> Result<File, AppError> {
    OpenOptions::new().write(true).create(true).truncate(true).open(path).map_err(AppError::from)
}

#[cfg(unix)]
fn set_mode(file: &File, mode: FileMode) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(mode.bits())).map_err(AppError::from)
}

#[cfg(not(unix))]
fn set_mode(_file: &File, _mode: FileMode) -> Result<(), AppError> {
    Ok(())
}
