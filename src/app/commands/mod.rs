pub mod aggregate;
pub mod generate;
pub mod install;
pub mod proxy;
pub mod render;
pub mod sandbox;
