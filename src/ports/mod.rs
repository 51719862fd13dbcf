mod script_writer;

pub use script_writer::ScriptWriter;
