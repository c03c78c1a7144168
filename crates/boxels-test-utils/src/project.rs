//! [`TestProject`] builder for configuration resolution scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project root with helpers for writing configuration files
/// and asserting on the directory contents.
///
/// # Example
///
/// ```rust,no_run
/// use boxels_test_utils::project::TestProject;
///
/// let project = TestProject::new();
/// project.write_config("boxels.config.toml", "root = \"src\"\n");
/// project.create_dir("public");
/// project.assert_file_exists("boxels.config.toml");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary project.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write a configuration file named `file_name` at the project root.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write_config(&self, file_name: &str, content: &str) -> PathBuf {
        self.write_file(file_name, content)
    }

    /// Write `content` to `relative`, creating parent directories.
    ///
    /// # Panics
    /// Panics if the directories or the file cannot be written.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("write_file: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("write_file: failed to write {}: {e}", path.display()));
        path
    }

    /// Create a directory (and its parents) inside the project.
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("create_dir: failed to create {}: {e}", path.display()));
        path
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Replace every occurrence of the project root in `text` with `[ROOT]`.
    ///
    /// Useful for snapshots of configurations that embed absolute paths.
    pub fn redact_root(&self, text: &str) -> String {
        let root = self.root().to_string_lossy();
        text.replace(root.as_ref(), "[ROOT]")
    }
}
