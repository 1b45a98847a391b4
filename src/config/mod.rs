//! Configuration model for promptsmith.
//!
//! This module defines the Config struct that represents `.promptsmith/config.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{CONFIG_FILE, DEFAULT_CONFIG_DIR, SYSTEM_MD_FILE, ToolNames};
