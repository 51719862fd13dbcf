use crate::impl_validated_id;

use crate::domain::AppError;

/// A validated sandbox name, used as the sandbox's directory name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SandboxName(String);

impl_validated_id!(SandboxName, false, AppError::InvalidSandboxName);
