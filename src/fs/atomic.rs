//! Atomic file writes for prompt capture.
//!
//! A captured prompt is written to a uniquely named temporary file next to
//! the target, synced, then renamed over the target. Readers of the capture
//! file therefore see either the previous content or the complete new
//! content. Every call gets its own temporary file, so concurrent captures
//! to the same path all succeed and end as last-writer-wins.
//!
//! - Source and destination must be on the same filesystem for the rename
//!   to be atomic, which holds because the temp file lives beside the target.
//! - On crash, a temporary file may remain (named `.{filename}.<random>.tmp`).

use crate::error::{PromptError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Atomically write text to a file, creating parent directories first.
///
/// # Example
///
/// ```no_run
/// use promptsmith::fs::atomic_write_file;
///
/// atomic_write_file(".promptsmith/system.md", "You are an agent.")?;
/// # Ok::<(), promptsmith::error::PromptError>(())
/// ```
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| {
            PromptError::Io(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp = temp_file_beside(path, parent)?;
    write_and_sync(temp, content.as_bytes(), path)?;

    #[cfg(unix)]
    if let Ok(dir) = File::open(parent) {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Create a fresh hidden temp file in `parent`: `.{filename}.<random>.tmp`.
fn temp_file_beside(target: &Path, parent: &Path) -> Result<NamedTempFile> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PromptError::Io(format!("invalid capture path '{}'", target.display())))?;

    Builder::new()
        .prefix(&format!(".{}.", filename))
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| {
            PromptError::Io(format!(
                "failed to create temporary file in '{}': {}",
                parent.display(),
                e
            ))
        })
}

/// Write, fsync, then rename over `target`. The temp file is removed on any
/// failure when it is dropped.
fn write_and_sync(mut temp: NamedTempFile, content: &[u8], target: &Path) -> Result<()> {
    temp.write_all(content)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| {
            PromptError::Io(format!(
                "failed to write temporary file '{}': {}",
                temp.path().display(),
                e
            ))
        })?;

    // `persist` replaces an existing destination on both POSIX and Windows.
    temp.persist(target).map_err(|e| {
        PromptError::Io(format!("failed to write '{}': {}", target.display(), e.error))
    })?;

    Ok(())
}
