#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates a temporary directory tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a subdirectory and returns its path.
    pub fn create_dir(&self, relative_path: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Writes a persisted aging config directly, bypassing the CLI.
    pub fn create_config(&self, relative_path: &str, content: &str) {
        let file = if relative_path.is_empty() {
            ".aging/config.toml".to_string()
        } else {
            format!("{relative_path}/.aging/config.toml")
        };
        self.create_file(&file, content);
    }

    /// Whether a folder has a persisted config file.
    pub fn has_config(&self, relative_path: &str) -> bool {
        self.dir
            .path()
            .join(relative_path)
            .join(".aging/config.toml")
            .is_file()
    }
}
