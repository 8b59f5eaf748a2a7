//! Configuration loading
//!
//! TOML-backed configuration with multi-source merging via figment.

pub mod file_config;
pub mod loader;

pub use file_config::{FileChatConfig, FileConfig, FileInferenceConfig};
pub use loader::ConfigLoader;
