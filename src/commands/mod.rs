//! Command implementations for promptsmith.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command renders its output to a `String` against a
//! [`HostEnv`], so tests can drive it with a fake environment; only
//! [`dispatch`] prints.

mod context;
mod resolve;
mod system;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::env::{HostEnv, ProcessEnv};
use crate::error::{PromptError, Result};
use crate::prompt::compaction_prompt;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Output goes to
/// stdout; diagnostics go through `tracing` to stderr.
pub fn dispatch(cli: Cli) -> Result<()> {
    let output = run(cli, &ProcessEnv)?;
    println!("{}", output);
    Ok(())
}

/// Run a command and return what it would print.
pub fn run<E: HostEnv + ?Sized>(cli: Cli, env: &E) -> Result<String> {
    match cli.command {
        Command::Compaction => Ok(compaction_prompt().to_string()),
        Command::Resolve(args) => resolve::cmd_resolve(&args, env),
        Command::System(args) => {
            let config = load_config(cli.config.as_deref(), env)?;
            system::cmd_system(&args, &config, env)
        }
        Command::Context(args) => {
            let config = load_config(cli.config.as_deref(), env)?;
            context::cmd_context(&args, &config, env)
        }
    }
}

/// Load the explicit config file, or discover one under the working directory.
fn load_config<E: HostEnv + ?Sized>(explicit: Option<&Path>, env: &E) -> Result<Config> {
    match explicit {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::load(path)
        }
        None => Config::discover(&current_dir(env)?),
    }
}

fn current_dir<E: HostEnv + ?Sized>(env: &E) -> Result<PathBuf> {
    env.current_dir()
        .map_err(|e| PromptError::Io(format!("failed to get current working directory: {}", e)))
}

/// Tools registered with the agent: the `--tool` flags if any were given,
/// else the configured list.
fn registered_tools(cli_tools: &[String], config: &Config) -> Result<BTreeSet<String>> {
    if let Some(bad) = cli_tools.iter().find(|t| t.trim().is_empty()) {
        return Err(PromptError::UserError(format!(
            "invalid tool name '{}': tool names must not be empty",
            bad
        )));
    }

    let source = if cli_tools.is_empty() {
        config.registered_tools.as_slice()
    } else {
        cli_tools
    };
    Ok(source.iter().cloned().collect())
}
