use std::borrow::Borrow;

use crate::impl_validated_id;

use crate::domain::AppError;

/// A validated file name for a generated script or config file.
///
/// Guarantees:
/// - Non-empty
/// - Contains only ASCII alphanumerics, `-`, `_`, or `.`
/// - No path separators and never `.` or `..`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScriptName(String);

impl_validated_id!(ScriptName, true, AppError::InvalidScriptName);

impl Borrow<str> for ScriptName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
