//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileCohortConfig, FileConfig, FilePerspective};
pub use loader::ConfigLoader;
