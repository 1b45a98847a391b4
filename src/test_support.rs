use crate::env::HostEnv;
use std::collections::HashMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// In-memory [`HostEnv`] so tests never mutate the real process environment.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeEnv {
    vars: HashMap<String, OsString>,
    home: Option<PathBuf>,
    cwd: Option<PathBuf>,
    repository: bool,
}

impl FakeEnv {
    /// No variables, no home directory, not a repository.
    pub(crate) fn new<P: Into<PathBuf>>(cwd: P) -> Self {
        Self {
            cwd: Some(cwd.into()),
            ..Self::default()
        }
    }

    /// An environment whose working directory lookup fails.
    pub(crate) fn without_cwd() -> Self {
        Self::default()
    }

    pub(crate) fn with_home<P: Into<PathBuf>>(mut self, home: P) -> Self {
        self.home = Some(home.into());
        self
    }

    pub(crate) fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), OsString::from(value));
        self
    }

    /// Set a variable to a raw, possibly non-unicode, value.
    pub(crate) fn with_os_var(mut self, name: &str, value: OsString) -> Self {
        self.vars.insert(name.to_string(), value);
        self
    }

    pub(crate) fn in_repository(mut self) -> Self {
        self.repository = true;
        self
    }
}

impl HostEnv for FakeEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        self.cwd
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "working directory removed"))
    }

    fn is_repository(&self, _dir: &Path) -> bool {
        self.repository
    }
}
