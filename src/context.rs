//! Prompt context resolution.
//!
//! This module is the "environment resolution" layer: it reads every
//! external signal promptsmith depends on exactly once and freezes the
//! result into a [`PromptContext`]. Composition downstream is a function of
//! that value alone, so it can be tested without touching the process
//! environment.

use crate::config::Config;
use crate::directive::DirectiveResolution;
use crate::env::{CapabilityRegistry, HostEnv, SANDBOX_ENV, SYSTEM_MD_ENV, WRITE_SYSTEM_MD_ENV};
use crate::error::{PromptError, Result};
use serde::Serialize;
use std::ffi::OsStr;
use std::path::PathBuf;
use tracing::debug;

/// Marker value of the sandbox signal for host-level (Seatbelt) restriction.
pub const RESTRICTED_HOST_MARKER: &str = "sandbox-exec";

/// Execution sandbox the agent runs under. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SandboxMode {
    /// Running directly on the user's system.
    #[default]
    None,
    /// Host-level restriction profile (`sandbox-exec`).
    RestrictedHost,
    /// Any other sandbox container.
    GenericContainer,
}

impl SandboxMode {
    /// Classify the sandbox signal: absent or empty means no sandbox, the
    /// restricted-host marker means `RestrictedHost`, anything else is a
    /// generic container, including values that are not valid unicode.
    pub fn from_signal(signal: Option<&OsStr>) -> Self {
        match signal {
            None => Self::None,
            Some(s) if s.is_empty() => Self::None,
            Some(s) if s == RESTRICTED_HOST_MARKER => Self::RestrictedHost,
            Some(_) => Self::GenericContainer,
        }
    }
}

/// Immutable snapshot of everything composition depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromptContext {
    /// Directive for "use a custom base prompt file".
    pub override_directive: DirectiveResolution,

    /// Directive for "persist the generated base prompt".
    pub capture_directive: DirectiveResolution,

    /// Whether the advanced code-exploration tool is registered.
    pub investigator_available: bool,

    pub sandbox_mode: SandboxMode,

    /// Whether the working directory is inside a git repository.
    pub is_repository: bool,

    /// Free-form user memory appended after the base prompt.
    pub user_memory: Option<String>,

    /// Absolute path of `<config_dir>/system.md`, the location an enabled
    /// switch refers to.
    pub default_system_md: PathBuf,
}

impl PromptContext {
    /// Gather the context from the host environment.
    ///
    /// The working directory is read once and used both for resolving
    /// relative directive paths and for repository detection.
    ///
    /// # Returns
    ///
    /// * `Ok(PromptContext)` - Successfully gathered context
    /// * `Err(PromptError::Io)` - If the working directory is unavailable
    /// * `Err(PromptError::ConfigError)` - If `config_dir` cannot be resolved
    pub fn gather<E, R>(
        env: &E,
        registry: &R,
        config: &Config,
        user_memory: Option<String>,
    ) -> Result<Self>
    where
        E: HostEnv + ?Sized,
        R: CapabilityRegistry + ?Sized,
    {
        let cwd = env.current_dir().map_err(|e| {
            PromptError::Io(format!("failed to get current working directory: {}", e))
        })?;

        let context = Self {
            override_directive: DirectiveResolution::resolve(
                env.var(SYSTEM_MD_ENV).as_deref(),
                env,
                &cwd,
            ),
            capture_directive: DirectiveResolution::resolve(
                env.var(WRITE_SYSTEM_MD_ENV).as_deref(),
                env,
                &cwd,
            ),
            investigator_available: registry.has_capability(&config.tools.investigator),
            sandbox_mode: SandboxMode::from_signal(env.var(SANDBOX_ENV).as_deref()),
            is_repository: env.is_repository(&cwd),
            user_memory,
            default_system_md: config.system_md_path(&cwd, || env.home_dir())?,
        };

        debug!(
            override_directive = %context.override_directive,
            capture_directive = %context.capture_directive,
            investigator = context.investigator_available,
            sandbox = ?context.sandbox_mode,
            repository = context.is_repository,
            "gathered prompt context"
        );

        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeEnv;
    use std::path::Path;

    #[test]
    fn sandbox_signal_classification() {
        assert_eq!(SandboxMode::from_signal(None), SandboxMode::None);
        assert_eq!(SandboxMode::from_signal(Some(OsStr::new(""))), SandboxMode::None);
        assert_eq!(
            SandboxMode::from_signal(Some(OsStr::new("sandbox-exec"))),
            SandboxMode::RestrictedHost
        );
        assert_eq!(
            SandboxMode::from_signal(Some(OsStr::new("docker"))),
            SandboxMode::GenericContainer
        );
        assert_eq!(
            SandboxMode::from_signal(Some(OsStr::new("Sandbox-Exec"))),
            SandboxMode::GenericContainer
        );
    }

    #[test]
    fn gather_with_empty_environment_uses_defaults() {
        let env = FakeEnv::new("/work/project");
        let tools: Vec<String> = Vec::new();

        let ctx = PromptContext::gather(&env, &tools, &Config::default(), None).unwrap();

        assert_eq!(ctx.override_directive, DirectiveResolution::Unset);
        assert_eq!(ctx.capture_directive, DirectiveResolution::Unset);
        assert!(!ctx.investigator_available);
        assert_eq!(ctx.sandbox_mode, SandboxMode::None);
        assert!(!ctx.is_repository);
        assert_eq!(
            ctx.default_system_md,
            Path::new("/work/project/.promptsmith/system.md")
        );
    }

    #[test]
    fn gather_reads_every_signal() {
        let env = FakeEnv::new("/work/project")
            .with_home("/home/dev")
            .with_var("PROMPTSMITH_SYSTEM_MD", "~/prompts/custom.md")
            .with_var("PROMPTSMITH_WRITE_SYSTEM_MD", "1")
            .with_var("SANDBOX", "sandbox-exec")
            .in_repository();
        let tools = ["read_file", "codebase_investigator"];

        let ctx = PromptContext::gather(
            &env,
            &tools[..],
            &Config::default(),
            Some("prefers tabs".to_string()),
        )
        .unwrap();

        assert_eq!(
            ctx.override_directive,
            DirectiveResolution::ResolvedPath(PathBuf::from("/home/dev/prompts/custom.md"))
        );
        assert_eq!(ctx.capture_directive, DirectiveResolution::Switch(true));
        assert!(ctx.investigator_available);
        assert_eq!(ctx.sandbox_mode, SandboxMode::RestrictedHost);
        assert!(ctx.is_repository);
        assert_eq!(ctx.user_memory.as_deref(), Some("prefers tabs"));
    }

    #[test]
    fn investigator_check_uses_configured_name() {
        let env = FakeEnv::new("/work");
        let mut config = Config::default();
        config.tools.investigator = "deep_search".to_string();

        let registered = vec!["codebase_investigator".to_string()];
        let ctx = PromptContext::gather(&env, &registered, &config, None).unwrap();
        assert!(!ctx.investigator_available);

        let registered = vec!["deep_search".to_string()];
        let ctx = PromptContext::gather(&env, &registered, &config, None).unwrap();
        assert!(ctx.investigator_available);
    }

    #[test]
    fn unresolvable_tilde_directive_degrades_to_unset() {
        let env = FakeEnv::new("/work").with_var("PROMPTSMITH_SYSTEM_MD", "~/custom.md");
        let tools: Vec<String> = Vec::new();

        let ctx = PromptContext::gather(&env, &tools, &Config::default(), None).unwrap();
        assert_eq!(ctx.override_directive, DirectiveResolution::Unset);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_override_is_not_masked() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"/nonexistent/caf\xe9.md".to_vec());
        let env = FakeEnv::new("/work")
            .with_os_var(SYSTEM_MD_ENV, raw.clone())
            .with_os_var(SANDBOX_ENV, OsString::from_vec(vec![0xff]));
        let tools: Vec<String> = Vec::new();

        let ctx = PromptContext::gather(&env, &tools, &Config::default(), None).unwrap();
        assert_eq!(
            ctx.override_directive,
            DirectiveResolution::ResolvedPath(PathBuf::from(raw.clone()))
        );
        assert_eq!(ctx.sandbox_mode, SandboxMode::GenericContainer);

        let err = crate::prompt::system_prompt(&ctx, &Config::default().tools).unwrap_err();
        assert!(matches!(err, PromptError::MissingOverrideFile(p) if p == PathBuf::from(raw)));
    }

    #[test]
    fn missing_working_directory_is_an_io_error() {
        let env = FakeEnv::without_cwd();
        let tools: Vec<String> = Vec::new();

        let err = PromptContext::gather(&env, &tools, &Config::default(), None).unwrap_err();
        assert!(matches!(err, PromptError::Io(_)));
    }

    #[test]
    fn serializes_for_inspection() {
        let ctx = PromptContext {
            sandbox_mode: SandboxMode::GenericContainer,
            ..PromptContext::default()
        };
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["sandbox_mode"], "generic_container");
        assert_eq!(json["override_directive"]["kind"], "unset");
    }
}
