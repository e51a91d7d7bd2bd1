//! Shared test utilities for integration tests
//!
//! Builds small directory trees inside a `TempDir` so every test works on an
//! isolated root.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temp dir holding a `root/` tree to scan and an `out/` dir for snapshots
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("root")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("root")
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.dir.path().join("out").join(name)
    }

    /// Write `content` at `rel` under the root, creating parents
    pub fn file(&self, rel: &str, content: &[u8]) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

/// Names of every entry in `dir`, sorted
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
