//! Shared testing utilities for instgen CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated directory tree for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Root path of the isolated environment.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a definition file under the root, creating parent directories.
    pub fn write_definition(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create definition parent directory");
        }
        fs::write(&path, content).expect("Failed to write definition file");
        path
    }

    /// Build a command for invoking the compiled `instgen` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("instgen").expect("Failed to locate instgen binary");
        cmd.current_dir(self.root.path());
        cmd
    }
}
