mod script_renderer;

pub use script_renderer::ScriptRenderer;
