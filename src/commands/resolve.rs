//! Implementation of the `promptsmith resolve` command.
//!
//! Classifies a raw directive value exactly as the override and capture
//! variables would be classified, without touching the filesystem.

use super::current_dir;
use crate::cli::ResolveArgs;
use crate::directive::DirectiveResolution;
use crate::env::HostEnv;
use crate::error::{PromptError, Result};
use std::ffi::OsStr;

pub fn cmd_resolve<E: HostEnv + ?Sized>(args: &ResolveArgs, env: &E) -> Result<String> {
    let cwd = current_dir(env)?;
    let resolution = DirectiveResolution::resolve(Some(OsStr::new(&args.value)), env, &cwd);

    if args.json {
        serde_json::to_string_pretty(&resolution)
            .map_err(|e| PromptError::Io(format!("failed to serialize resolution: {}", e)))
    } else {
        Ok(resolution.to_string())
    }
}
