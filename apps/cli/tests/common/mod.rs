//! Common test utilities for integration tests.
//!
//! Provides a temporary page directory and markup builders for
//! dictionary pages.

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory of dictionary pages.
pub struct PageDir {
    dir: TempDir,
}

impl PageDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a page file and return its path.
    pub fn write(&self, file_name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(file_name);
        fs::write(&path, content).expect("write page");
        path
    }
}
