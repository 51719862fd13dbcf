pub mod assets;
pub mod filesystem;

pub use filesystem::FilesystemScriptWriter;
