//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for promptsmith.
///
/// This struct represents the contents of `.promptsmith/config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Config root holding `system.md` (default: ".promptsmith").
    /// Relative paths resolve against the working directory; `~/` expands
    /// to the home directory.
    #[serde(default = "default_config_dir")]
    pub config_dir: String,

    /// Tools registered with the agent when none are given on the command
    /// line. Feeds the investigator capability check.
    #[serde(default = "default_registered_tools")]
    pub registered_tools: Vec<String>,

    /// Tool names substituted into the built-in prompt.
    #[serde(default)]
    pub tools: ToolNames,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            registered_tools: default_registered_tools(),
            tools: ToolNames::default(),
        }
    }
}
