mod mock_script_writer;

pub use mock_script_writer::MockScriptWriter;
