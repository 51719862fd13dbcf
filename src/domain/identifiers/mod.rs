pub mod validation;

mod sandbox_name;
mod script_name;

pub use sandbox_name::SandboxName;
pub use script_name::ScriptName;
