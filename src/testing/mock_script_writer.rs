use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, FileMode};
use crate::ports::ScriptWriter;

/// Recording writer for testing. Optionally fails on the Nth write.
#[derive(Default)]
pub struct MockScriptWriter {
    pub files: RefCell<Vec<(PathBuf, String, FileMode)>>,
    pub dirs: RefCell<Vec<PathBuf>>,
    fail_on_write: Option<usize>,
    attempts: RefCell<usize>,
}

impl MockScriptWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the write with zero-based index `index`.
    pub fn failing_at(index: usize) -> Self {
        Self { fail_on_write: Some(index), ..Self::default() }
    }

    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.files.borrow().iter().map(|(path, _, _)| path.clone()).collect()
    }

    pub fn content_of(&self, path: &Path) -> Option<String> {
        self.files
            .borrow()
            .iter()
            .find(|(p, _, _)| p == path)
            .map(|(_, content, _)| content.clone())
    }

    pub fn mode_of(&self, path: &Path) -> Option<FileMode> {
        self.files.borrow().iter().find(|(p, _, _)| p == path).map(|(_, _, mode)| *mode)
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.borrow()
    }
}

impl ScriptWriter for MockScriptWriter {
    fn write_script(&self, path: &Path, content: &str, mode: FileMode) -> Result<(), AppError> {
        let index = *self.attempts.borrow();
        *self.attempts.borrow_mut() += 1;
        if self.fail_on_write == Some(index) {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("mock failure writing {}", path.display()),
            )));
        }
        self.files.borrow_mut().push((path.to_path_buf(), content.to_string(), mode));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.dirs.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
