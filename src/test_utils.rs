//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is removed when dropped. Permissions changed with
/// [`TestTree::lock`] are restored first so cleanup succeeds.
pub struct TestTree {
    dir: TempDir,
    locked: Vec<PathBuf>,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            dir,
            locked: Vec::new(),
        }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add `count` empty files named `{stem}{i}.txt` under `dir`.
    pub fn add_files(&self, dir: &str, stem: &str, count: usize) {
        self.add_dir(dir);
        for i in 0..count {
            self.add_file(&format!("{}/{}{}.txt", dir, stem, i), "");
        }
    }

    /// Remove all permissions from a directory so it cannot be listed.
    #[cfg(unix)]
    pub fn lock(&mut self, path: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let full_path = self.dir.path().join(path);
        fs::set_permissions(&full_path, fs::Permissions::from_mode(0o000))
            .expect("Failed to set permissions");
        self.locked.push(full_path.clone());
        full_path
    }

    /// Whether permission checks are enforced for this process (not root).
    #[cfg(unix)]
    pub fn permissions_enforced(&self) -> bool {
        use std::os::unix::fs::PermissionsExt;

        let probe = self.dir.path().join(".probe");
        fs::create_dir(&probe).expect("Failed to create probe dir");
        fs::set_permissions(&probe, fs::Permissions::from_mode(0o000))
            .expect("Failed to set permissions");
        let enforced = fs::read_dir(&probe).is_err();
        let _ = fs::set_permissions(&probe, fs::Permissions::from_mode(0o755));
        let _ = fs::remove_dir(&probe);
        enforced
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestTree {
    fn drop(&mut self) {
        #[cfg(unix)]
        for path in &self.locked {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o755));
        }
    }
}
