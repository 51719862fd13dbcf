//! Filesystem-backed configuration loading.
//!
//! Pure schema parsing lives in `domain::deployment`.

mod load_config;

pub use load_config::{load_config, resolve_config_path};
