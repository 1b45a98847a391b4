//! Promptsmith: directive-driven system prompt composition for coding agents.
//!
//! The crate turns a handful of environment signals into a system prompt:
//!
//! 1. [`directive`] classifies the override and capture variables.
//! 2. [`context`] freezes every external signal into a [`context::PromptContext`].
//! 3. [`prompt`] decides the base source, renders or reads the base prompt,
//!    optionally captures it, and appends user memory.
//!
//! [`prompt::compaction_prompt`] provides the fixed history-compaction
//! instructions.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod directive;
pub mod env;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod prompt;

#[cfg(test)]
pub(crate) mod test_support;
