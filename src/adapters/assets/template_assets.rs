use include_dir::{Dir, include_dir};

use crate::domain::{AppError, TemplateKind};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Source text of an embedded template.
pub fn template_source(kind: TemplateKind) -> Result<&'static str, AppError> {
    let path = kind.asset_path();
    TEMPLATES_DIR
        .get_file(path)
        .ok_or_else(|| AppError::TemplateMissing(path.to_string()))?
        .contents_utf8()
        .ok_or_else(|| AppError::TemplateMissing(format!("{} (not UTF-8)", path)))
}
