//! Override and capture decisions.
//!
//! Two directives drive this module:
//!
//! - the **override** directive picks where the base prompt comes from
//!   (the built-in template or a user file), and
//! - the **capture** directive optionally mirrors the base prompt to disk.
//!
//! Both map an enabled switch to the same default `system.md`, so "write the
//! built-in prompt out" followed by "use my edited copy" needs no paths.
//!
//! An override that points at a missing file is fatal. Falling back to the
//! built-in text would hide the misconfiguration.

use crate::context::PromptContext;
use crate::directive::DirectiveResolution;
use crate::error::{PromptError, Result};
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the base prompt text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseSource {
    Builtin,
    File(PathBuf),
}

/// The base prompt after any file read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseText {
    Builtin,
    /// Override file content, used verbatim.
    Custom(String),
}

impl BaseSource {
    /// Read the override file, if any. This is the only read composition
    /// depends on; once it succeeds, composition is pure.
    pub fn load(&self) -> Result<BaseText> {
        match self {
            BaseSource::Builtin => Ok(BaseText::Builtin),
            BaseSource::File(path) => std::fs::read_to_string(path)
                .map(BaseText::Custom)
                .map_err(|e| {
                    PromptError::Io(format!(
                        "failed to read system prompt file '{}': {}",
                        path.display(),
                        e
                    ))
                }),
        }
    }
}

/// Resolved override and capture decisions for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverridePlan {
    pub base_source: BaseSource,
    pub capture_target: Option<PathBuf>,
}

impl OverridePlan {
    /// Decide base source and capture target.
    ///
    /// # Returns
    ///
    /// * `Ok(OverridePlan)` - The decisions
    /// * `Err(PromptError::MissingOverrideFile)` - If the override resolves to
    ///   a path that does not exist
    pub fn decide(
        override_directive: &DirectiveResolution,
        capture_directive: &DirectiveResolution,
        default_path: &Path,
    ) -> Result<Self> {
        let base_source = match override_directive.target(default_path) {
            Some(path) => {
                if !path.exists() {
                    return Err(PromptError::MissingOverrideFile(path));
                }
                info!(path = %path.display(), "using custom system prompt");
                BaseSource::File(path)
            }
            None => BaseSource::Builtin,
        };

        let capture_target = capture_directive.target(default_path);

        debug!(
            base_source = ?base_source,
            capture_target = ?capture_target,
            "override plan decided"
        );

        Ok(Self {
            base_source,
            capture_target,
        })
    }

    pub fn from_context(ctx: &PromptContext) -> Result<Self> {
        Self::decide(
            &ctx.override_directive,
            &ctx.capture_directive,
            &ctx.default_system_md,
        )
    }

    /// Write `base_text` to the capture target, if one is set.
    ///
    /// Parent directories are created; existing content is replaced.
    pub fn capture(&self, base_text: &str) -> Result<()> {
        let Some(target) = &self.capture_target else {
            return Ok(());
        };

        atomic_write_file(target, base_text)?;
        info!(path = %target.display(), bytes = base_text.len(), "captured system prompt");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn path(p: &Path) -> DirectiveResolution {
        DirectiveResolution::ResolvedPath(p.to_path_buf())
    }

    #[test]
    fn unset_and_disabled_use_builtin() {
        let default = Path::new("/nonexistent/.promptsmith/system.md");
        for directive in [DirectiveResolution::Unset, DirectiveResolution::Switch(false)] {
            let plan = OverridePlan::decide(&directive, &directive, default).unwrap();
            assert_eq!(plan.base_source, BaseSource::Builtin);
            assert_eq!(plan.capture_target, None);
        }
    }

    #[test]
    fn enabled_switch_reads_default_path() {
        let temp_dir = TempDir::new().unwrap();
        let default = temp_dir.path().join("system.md");
        fs::write(&default, "custom").unwrap();

        let plan = OverridePlan::decide(
            &DirectiveResolution::Switch(true),
            &DirectiveResolution::Unset,
            &default,
        )
        .unwrap();
        assert_eq!(plan.base_source, BaseSource::File(default));
    }

    #[test]
    fn enabled_switch_without_default_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let default = temp_dir.path().join("system.md");

        let err = OverridePlan::decide(
            &DirectiveResolution::Switch(true),
            &DirectiveResolution::Unset,
            &default,
        )
        .unwrap_err();
        assert!(matches!(err, PromptError::MissingOverrideFile(p) if p == default));
    }

    #[test]
    fn missing_override_path_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.md");

        let err = OverridePlan::decide(
            &path(&missing),
            &DirectiveResolution::Unset,
            Path::new("/unused"),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("missing system prompt file '{}'", missing.display())
        );
    }

    #[test]
    fn capture_targets_mirror_override_targets() {
        let default = Path::new("/cfg/system.md");

        let plan = OverridePlan::decide(
            &DirectiveResolution::Unset,
            &DirectiveResolution::Switch(true),
            default,
        )
        .unwrap();
        assert_eq!(plan.capture_target, Some(default.to_path_buf()));

        let plan = OverridePlan::decide(
            &DirectiveResolution::Unset,
            &path(Path::new("/tmp/out/prompt.md")),
            default,
        )
        .unwrap();
        assert_eq!(plan.capture_target, Some(PathBuf::from("/tmp/out/prompt.md")));
    }

    #[test]
    fn load_reads_file_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("custom.md");
        fs::write(&file, "  keep {this} as is\n\n").unwrap();

        let text = BaseSource::File(file).load().unwrap();
        assert_eq!(text, BaseText::Custom("  keep {this} as is\n\n".to_string()));
        assert_eq!(BaseSource::Builtin.load().unwrap(), BaseText::Builtin);
    }

    #[test]
    fn load_of_unreadable_path_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory exists but cannot be read as text.
        let err = BaseSource::File(temp_dir.path().to_path_buf())
            .load()
            .unwrap_err();
        assert!(matches!(err, PromptError::Io(_)));
    }

    #[test]
    fn capture_without_target_writes_nothing() {
        let plan = OverridePlan {
            base_source: BaseSource::Builtin,
            capture_target: None,
        };
        plan.capture("text").unwrap();
    }

    #[test]
    fn capture_creates_directories_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("deep").join("er").join("system.md");
        let plan = OverridePlan {
            base_source: BaseSource::Builtin,
            capture_target: Some(target.clone()),
        };

        plan.capture("first version").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "first version");

        plan.capture("second").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "second");
    }

    #[test]
    fn capture_failure_is_propagated() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let plan = OverridePlan {
            base_source: BaseSource::Builtin,
            capture_target: Some(blocker.join("system.md")),
        };

        assert!(matches!(plan.capture("x"), Err(PromptError::Io(_))));
    }
}
