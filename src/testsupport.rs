//! Shared test fixtures for file-rewriting test modules.
//!
//! Marker, patch and settings tests all need a throwaway tree with a few
//! text files in it; keeping the helpers here avoids per-module temp-dir code.

use std::fs;
use std::path::{Path, PathBuf};

/// Temporary directory fixture, removed on drop.
#[derive(Debug)]
pub struct TestTempDir {
    dir: tempfile::TempDir,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("themesync-{prefix}-"))
            .tempdir()
            .expect("failed to create temporary fixture directory");
        Self { dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path().join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        self.write_bytes(relative, content.as_bytes())
    }

    /// Write raw bytes to a child path, creating parent directories as needed.
    pub fn write_bytes(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }

    /// Read a child path back as UTF-8 text.
    pub fn read_text(&self, relative: &str) -> String {
        fs::read_to_string(self.child(relative)).expect("failed to read fixture file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
        assert_eq!(fixture.read_text("nested/file.txt"), "hello");
    }

    #[test]
    fn temp_dir_is_removed_on_drop() {
        let path = {
            let fixture = TestTempDir::new("drop");
            fixture.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
