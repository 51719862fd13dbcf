use crate::domain::AppError;
use crate::ports::ScriptWriter;
use crate::services::ScriptRenderer;

/// Application context holding dependencies for command execution.
pub struct AppContext<W: ScriptWriter> {
    writer: W,
    renderer: ScriptRenderer,
}

impl<W: ScriptWriter> AppContext<W> {
    /// Create a new application context with the embedded templates loaded.
    pub fn new(writer: W) -> Result<Self, AppError> {
        Ok(Self { writer, renderer: ScriptRenderer::new()? })
    }

    /// Get a reference to the output writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &ScriptRenderer {
        &self.renderer
    }
}
