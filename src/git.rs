//! Git repository detection.
//!
//! Detection is a filesystem check, not a `git` subprocess: a directory is
//! inside a repository when it or any ancestor contains a `.git` entry. A
//! `.git` file (linked worktree or submodule) counts the same as a `.git`
//! directory.

use std::path::Path;

/// Name of the repository marker entry.
const GIT_MARKER: &str = ".git";

/// Returns true if `dir` or any of its ancestors contains `.git`.
///
/// Relative paths are checked as given; callers pass the absolute working
/// directory.
pub fn is_git_repository<P: AsRef<Path>>(dir: P) -> bool {
    dir.as_ref()
        .ancestors()
        .any(|candidate| candidate.join(GIT_MARKER).exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn detects_repository_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();

        assert!(is_git_repository(temp_dir.path()));
    }

    #[test]
    fn detects_from_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert!(is_git_repository(&nested));
    }

    #[test]
    fn git_file_marks_a_linked_worktree() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".git"),
            "gitdir: /elsewhere/.git/worktrees/feature\n",
        )
        .unwrap();

        assert!(is_git_repository(temp_dir.path()));
    }

    #[test]
    fn plain_directory_is_not_a_repository() {
        let temp_dir = TempDir::new().unwrap();
        let plain = temp_dir.path().join("plain");
        fs::create_dir(&plain).unwrap();

        // The temp root itself may sit under a repository on a dev machine,
        // so only assert when no ancestor carries a marker.
        let ancestor_marked = temp_dir
            .path()
            .ancestors()
            .any(|p| p.join(".git").exists());
        assert_eq!(is_git_repository(&plain), ancestor_marked);
    }
}
