//! System prompt composition.

use super::builtin::BuiltinTemplate;
use super::overrides::{BaseText, OverridePlan};
use crate::config::ToolNames;
use crate::context::PromptContext;
use crate::error::Result;
use tracing::debug;

/// Separator between the base prompt and user memory.
pub const MEMORY_SEPARATOR: &str = "\n\n---\n\n";

/// Produce the base prompt text. Custom text passes through untouched;
/// the built-in template is rendered against `tools`.
pub fn compose_base(base: &BaseText, ctx: &PromptContext, tools: &ToolNames) -> Result<String> {
    match base {
        BaseText::Custom(text) => Ok(text.clone()),
        BaseText::Builtin => {
            let template = BuiltinTemplate::for_context(ctx);
            debug!(template = ?template, "rendering built-in system prompt");
            Ok(template.render(tools)?)
        }
    }
}

/// Append user memory after `base`.
///
/// Memory that is absent or only whitespace leaves `base` unchanged.
/// Otherwise the trimmed memory follows [`MEMORY_SEPARATOR`].
pub fn append_memory(base: String, memory: Option<&str>) -> String {
    match memory.map(str::trim) {
        Some(memory) if !memory.is_empty() => {
            format!("{}{}{}", base, MEMORY_SEPARATOR, memory)
        }
        _ => base,
    }
}

/// Compose the full system prompt for `ctx`.
///
/// Steps, in order:
///
/// 1. Decide the base source and capture target from the directives.
/// 2. Read the override file, if one is in use.
/// 3. Build the base prompt.
/// 4. Write the base prompt to the capture target, if any. Memory is not
///    part of the captured text.
/// 5. Append user memory.
///
/// # Returns
///
/// * `Ok(String)` - The composed prompt
/// * `Err(PromptError::MissingOverrideFile)` - If the override file does not exist
/// * `Err(PromptError::Io)` - If reading the override or writing the capture fails
/// * `Err(PromptError::Template)` - If the built-in template fails to render
pub fn system_prompt(ctx: &PromptContext, tools: &ToolNames) -> Result<String> {
    let plan = OverridePlan::from_context(ctx)?;
    let base_text = plan.base_source.load()?;
    let base = compose_base(&base_text, ctx, tools)?;

    plan.capture(&base)?;

    Ok(append_memory(base, ctx.user_memory.as_deref()))
}
