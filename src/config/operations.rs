//! Config loading, validation, and path operations.

use super::model::Config;
use super::types::{CONFIG_FILE, DEFAULT_CONFIG_DIR, SYSTEM_MD_FILE};
use crate::directive::expand_path;
use crate::error::{PromptError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.promptsmith/config.yaml` under `cwd` if present, else defaults.
    pub fn discover(cwd: &Path) -> Result<Self> {
        let candidate = cwd.join(DEFAULT_CONFIG_DIR).join(CONFIG_FILE);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// - `config_dir` must be non-empty
    /// - every tool name must be non-empty and contain no whitespace or braces
    pub fn validate(&self) -> Result<()> {
        if self.config_dir.trim().is_empty() {
            return Err(PromptError::ConfigError(
                "config validation failed: config_dir must not be empty".to_string(),
            ));
        }

        for (slot, name) in self.tools.slots() {
            let field = slot.trim_end_matches("_tool");
            if name.is_empty() {
                return Err(PromptError::ConfigError(format!(
                    "config validation failed: tools.{} must not be empty",
                    field
                )));
            }
            if name.chars().any(|c| c.is_whitespace() || c == '{' || c == '}') {
                return Err(PromptError::ConfigError(format!(
                    "config validation failed: tools.{} has invalid name '{}'",
                    field, name
                )));
            }
        }

        Ok(())
    }

    /// Absolute path of the default `system.md`: `<config_dir>/system.md`.
    pub fn system_md_path<F>(&self, cwd: &Path, home: F) -> Result<PathBuf>
    where
        F: FnOnce() -> Option<PathBuf>,
    {
        let dir = expand_path(self.config_dir.trim(), cwd, home).ok_or_else(|| {
            PromptError::ConfigError(format!(
                "could not resolve home directory for config_dir '{}'",
                self.config_dir
            ))
        })?;

        Ok(dir.join(SYSTEM_MD_FILE))
    }
}
