//! Directive resolution for switch-or-path environment variables.
//!
//! A directive variable accepts three shapes:
//!
//! - unset, empty, or whitespace: [`DirectiveResolution::Unset`]
//! - `0`, `1`, `true`, `false` (any case): [`DirectiveResolution::Switch`]
//! - anything else: a path, with `~` and `~/` expanded against the home
//!   directory and relative paths resolved against the working directory
//!
//! Downstream code only ever sees the three-case enum, so "disabled",
//! "unset" and "a file literally named true" cannot be confused.

use crate::env::HostEnv;
use serde::Serialize;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use tracing::warn;

/// Classification of one directive value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DirectiveResolution {
    /// Not set, or set to whitespace only.
    #[default]
    Unset,
    /// A boolean switch: `true` for "1"/"true", `false` for "0"/"false".
    Switch(bool),
    /// An absolute path.
    ResolvedPath(PathBuf),
}

impl DirectiveResolution {
    /// Classify a raw directive value.
    ///
    /// A value that is not valid unicode cannot be a switch literal, so it is
    /// taken as a path as-is.
    ///
    /// Home-directory lookup failure during tilde expansion is not an error:
    /// it is logged as a warning and the directive degrades to `Unset`.
    pub fn resolve<E: HostEnv + ?Sized>(raw: Option<&OsStr>, env: &E, cwd: &Path) -> Self {
        let Some(raw) = raw else {
            return Self::Unset;
        };
        let Some(text) = raw.to_str() else {
            return Self::from_path(Path::new(raw), env, cwd);
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Unset;
        }

        match trimmed.to_lowercase().as_str() {
            "1" | "true" => return Self::Switch(true),
            "0" | "false" => return Self::Switch(false),
            _ => {}
        }

        Self::from_path(Path::new(trimmed), env, cwd)
    }

    fn from_path<E: HostEnv + ?Sized>(raw: &Path, env: &E, cwd: &Path) -> Self {
        match expand_path(raw, cwd, || env.home_dir()) {
            Some(path) => Self::ResolvedPath(path),
            None => {
                warn!(value = %raw.display(), "could not resolve home directory for path");
                Self::Unset
            }
        }
    }

    /// The file this directive points at, given the canonical default.
    ///
    /// An enabled switch means "the default location"; a path means itself;
    /// unset and disabled switches point nowhere.
    pub fn target(&self, default_path: &Path) -> Option<PathBuf> {
        match self {
            Self::Unset | Self::Switch(false) => None,
            Self::Switch(true) => Some(default_path.to_path_buf()),
            Self::ResolvedPath(path) => Some(path.clone()),
        }
    }
}

impl fmt::Display for DirectiveResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            Self::Switch(true) => write!(f, "switch (enabled)"),
            Self::Switch(false) => write!(f, "switch (disabled)"),
            Self::ResolvedPath(path) => write!(f, "path {}", path.display()),
        }
    }
}

/// Expand `~`/`~/` and make `raw` absolute against `cwd`.
///
/// Tilde expansion works on path components, so non-unicode paths expand
/// too. `home` is only queried for tilde paths. Returns `None` when it is
/// needed and unavailable.
pub fn expand_path<R, F>(raw: R, cwd: &Path, home: F) -> Option<PathBuf>
where
    R: AsRef<Path>,
    F: FnOnce() -> Option<PathBuf>,
{
    let raw = raw.as_ref();
    let expanded = match raw.strip_prefix("~") {
        Ok(rest) => home()?.join(rest),
        Err(_) => raw.to_path_buf(),
    };

    Some(normalize(&cwd.join(expanded)))
}

/// Lexically normalize an absolute path: drop `.`, let `..` pop a component
/// (never past the root). Symlinks are not consulted.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
