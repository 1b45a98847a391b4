//! CLI argument parsing for promptsmith.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Promptsmith: compose agent system prompts from directives and context.
///
/// The base prompt is either the built-in template or a user file chosen
/// through `PROMPTSMITH_SYSTEM_MD`. `PROMPTSMITH_WRITE_SYSTEM_MD` mirrors the
/// base prompt to disk. Logs go to stderr, filtered by `PROMPTSMITH_LOG`.
#[derive(Parser, Debug)]
#[command(name = "promptsmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to load instead of `.promptsmith/config.yaml`.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptsmith.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the composed system prompt.
    ///
    /// Honors the override and capture directives, then appends user memory.
    System(SystemArgs),

    /// Print the history-compaction prompt.
    Compaction,

    /// Show how a raw directive value is classified.
    Resolve(ResolveArgs),

    /// Show the prompt context gathered from the environment.
    Context(ContextArgs),
}

/// Arguments for the `system` command.
#[derive(Parser, Debug)]
pub struct SystemArgs {
    /// User memory to append after the base prompt.
    #[arg(long, conflicts_with = "memory_file")]
    pub memory: Option<String>,

    /// Read user memory from a file.
    #[arg(long, value_name = "PATH")]
    pub memory_file: Option<PathBuf>,

    /// Tool registered with the agent (repeatable). Replaces the configured
    /// `registered_tools` when given.
    #[arg(long = "tool", value_name = "NAME")]
    pub tools: Vec<String>,
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Raw directive value, as it would appear in the environment.
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `context` command.
#[derive(Parser, Debug)]
pub struct ContextArgs {
    /// Tool registered with the agent (repeatable). Replaces the configured
    /// `registered_tools` when given.
    #[arg(long = "tool", value_name = "NAME")]
    pub tools: Vec<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
