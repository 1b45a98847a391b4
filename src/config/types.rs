//! Configuration types and defaults for promptsmith.
//!
//! This module defines the tool-name table and the default value functions
//! used by the Config struct.

use serde::{Deserialize, Serialize};

/// Default config root, relative to the working directory.
pub const DEFAULT_CONFIG_DIR: &str = ".promptsmith";

/// File name of the override/capture prompt inside the config root.
pub const SYSTEM_MD_FILE: &str = "system.md";

/// File name of the YAML config inside the config root.
pub const CONFIG_FILE: &str = "config.yaml";

/// Names of the tools referenced inside the generated prompt.
///
/// These are substituted into the built-in template wherever it mentions a
/// tool, so the prompt always names tools the way the agent registers them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolNames {
    pub list_directory: String,
    pub read_file: String,
    pub read_many_files: String,
    pub write_file: String,
    pub edit: String,
    pub glob: String,
    pub grep: String,
    pub shell: String,
    pub memory: String,
    /// The advanced code-exploration capability. The investigator workflow is
    /// selected when this name is registered.
    pub investigator: String,
}

impl Default for ToolNames {
    fn default() -> Self {
        Self {
            list_directory: "list_directory".to_string(),
            read_file: "read_file".to_string(),
            read_many_files: "read_many_files".to_string(),
            write_file: "write_file".to_string(),
            edit: "replace".to_string(),
            glob: "glob".to_string(),
            grep: "search_file_content".to_string(),
            shell: "run_shell_command".to_string(),
            memory: "save_memory".to_string(),
            investigator: "codebase_investigator".to_string(),
        }
    }
}

impl ToolNames {
    /// Template slot name paired with each tool name. Slot names are the
    /// field names with a `_tool` suffix.
    pub fn slots(&self) -> [(&'static str, &str); 10] {
        [
            ("list_directory_tool", self.list_directory.as_str()),
            ("read_file_tool", self.read_file.as_str()),
            ("read_many_files_tool", self.read_many_files.as_str()),
            ("write_file_tool", self.write_file.as_str()),
            ("edit_tool", self.edit.as_str()),
            ("glob_tool", self.glob.as_str()),
            ("grep_tool", self.grep.as_str()),
            ("shell_tool", self.shell.as_str()),
            ("memory_tool", self.memory.as_str()),
            ("investigator_tool", self.investigator.as_str()),
        ]
    }
}

// Default value functions for serde
pub(crate) fn default_config_dir() -> String {
    DEFAULT_CONFIG_DIR.to_string()
}

/// The standard tool set: everything except the investigator.
pub(crate) fn default_registered_tools() -> Vec<String> {
    let tools = ToolNames::default();
    vec![
        tools.list_directory,
        tools.read_file,
        tools.read_many_files,
        tools.write_file,
        tools.edit,
        tools.glob,
        tools.grep,
        tools.shell,
        tools.memory,
    ]
}
