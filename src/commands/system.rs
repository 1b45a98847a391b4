//! Implementation of the `promptsmith system` command.

use super::registered_tools;
use crate::cli::SystemArgs;
use crate::config::Config;
use crate::context::PromptContext;
use crate::env::HostEnv;
use crate::error::{PromptError, Result};
use crate::prompt::system_prompt;

/// Execute the `promptsmith system` command.
///
/// Gathers the context, composes the prompt (capturing it when the capture
/// directive asks for it) and returns the text to print.
pub fn cmd_system<E: HostEnv + ?Sized>(
    args: &SystemArgs,
    config: &Config,
    env: &E,
) -> Result<String> {
    let memory = read_memory(args)?;
    let tools = registered_tools(&args.tools, config)?;

    let ctx = PromptContext::gather(env, &tools, config, memory)?;
    system_prompt(&ctx, &config.tools)
}

fn read_memory(args: &SystemArgs) -> Result<Option<String>> {
    if let Some(memory) = &args.memory {
        return Ok(Some(memory.clone()));
    }

    match &args.memory_file {
        Some(path) => std::fs::read_to_string(path).map(Some).map_err(|e| {
            PromptError::Io(format!(
                "failed to read memory file '{}': {}",
                path.display(),
                e
            ))
        }),
        None => Ok(None),
    }
}
