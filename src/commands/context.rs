//! Implementation of the `promptsmith context` command.
//!
//! Shows the gathered context and the built-in template it selects.

use super::registered_tools;
use crate::cli::ContextArgs;
use crate::config::Config;
use crate::context::{PromptContext, SandboxMode};
use crate::env::HostEnv;
use crate::error::{PromptError, Result};
use crate::prompt::{BuiltinTemplate, WorkflowVariant};
use serde_json::json;
use std::fmt::Write;

pub fn cmd_context<E: HostEnv + ?Sized>(
    args: &ContextArgs,
    config: &Config,
    env: &E,
) -> Result<String> {
    let tools = registered_tools(&args.tools, config)?;
    let ctx = PromptContext::gather(env, &tools, config, None)?;
    let template = BuiltinTemplate::for_context(&ctx);

    if args.json {
        let value = json!({
            "context": ctx,
            "template": template,
        });
        serde_json::to_string_pretty(&value)
            .map_err(|e| PromptError::Io(format!("failed to serialize context: {}", e)))
    } else {
        Ok(format_text(&ctx, &template))
    }
}

fn format_text(ctx: &PromptContext, template: &BuiltinTemplate) -> String {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let sandbox = match ctx.sandbox_mode {
        SandboxMode::None => "none",
        SandboxMode::RestrictedHost => "restricted host",
        SandboxMode::GenericContainer => "container",
    };
    let workflow = match template.workflow {
        WorkflowVariant::Investigator => "investigator",
        WorkflowVariant::Search => "search",
    };

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Override:      {}", ctx.override_directive);
    let _ = writeln!(out, "Capture:       {}", ctx.capture_directive);
    let _ = writeln!(out, "Default file:  {}", ctx.default_system_md.display());
    let _ = writeln!(out, "Investigator:  {}", yes_no(ctx.investigator_available));
    let _ = writeln!(out, "Sandbox:       {}", sandbox);
    let _ = writeln!(out, "Repository:    {}", yes_no(ctx.is_repository));
    let _ = write!(out, "Workflow:      {}", workflow);
    out
}
