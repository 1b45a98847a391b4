//! Host environment seam.
//!
//! Everything promptsmith reads from the outside world (environment
//! variables, the home directory, the working directory, repository
//! detection) goes through [`HostEnv`]. [`PromptContext`](crate::context::PromptContext)
//! is gathered from a `HostEnv` once per request; nothing downstream reads
//! the live process environment.

use crate::git;
use std::collections::{BTreeSet, HashSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Override directive: use a custom base prompt file.
pub const SYSTEM_MD_ENV: &str = "PROMPTSMITH_SYSTEM_MD";

/// Capture directive: persist the generated base prompt to a file.
pub const WRITE_SYSTEM_MD_ENV: &str = "PROMPTSMITH_WRITE_SYSTEM_MD";

/// Sandbox signal set by the launcher.
pub const SANDBOX_ENV: &str = "SANDBOX";

/// Log filter for the CLI.
pub const LOG_ENV: &str = "PROMPTSMITH_LOG";

/// Queries promptsmith needs from the host.
pub trait HostEnv {
    /// Raw value of an environment variable, `None` if unset. Values that
    /// are not valid unicode are returned unchanged.
    fn var(&self, name: &str) -> Option<OsString>;

    /// The user's home directory, `None` if it cannot be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    /// The current working directory.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Whether `dir` lies inside a git repository.
    fn is_repository(&self, dir: &Path) -> bool;
}

/// [`HostEnv`] backed by the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl HostEnv for ProcessEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn is_repository(&self, dir: &Path) -> bool {
        git::is_git_repository(dir)
    }
}

/// The set of tool names registered with the agent.
pub trait CapabilityRegistry {
    fn has_capability(&self, name: &str) -> bool;
}

impl<S: AsRef<str>> CapabilityRegistry for [S] {
    fn has_capability(&self, name: &str) -> bool {
        self.iter().any(|tool| tool.as_ref() == name)
    }
}

impl<S: AsRef<str>> CapabilityRegistry for Vec<S> {
    fn has_capability(&self, name: &str) -> bool {
        self.as_slice().has_capability(name)
    }
}

impl CapabilityRegistry for HashSet<String> {
    fn has_capability(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl CapabilityRegistry for BTreeSet<String> {
    fn has_capability(&self, name: &str) -> bool {
        self.contains(name)
    }
}
