//! Prompt composition.
//!
//! - `template`: the `{slot}` engine the built-in prompt is rendered with
//! - `builtin`: fragment selection for the built-in system prompt
//! - `overrides`: override and capture decisions
//! - `compose`: base prompt plus user memory
//! - `compaction`: the fixed history-compaction prompt

mod builtin;
mod compaction;
mod compose;
mod overrides;
mod template;

pub use builtin::{BuiltinTemplate, WorkflowVariant};
pub use compaction::{SNAPSHOT_SECTIONS, compaction_prompt};
pub use compose::{MEMORY_SEPARATOR, append_memory, compose_base, system_prompt};
pub use overrides::{BaseSource, BaseText, OverridePlan};
pub use template::{Slots, TemplateError, render, slots};
