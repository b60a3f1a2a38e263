//! Common test utilities for integration tests.
//!
//! This module provides a temporary directory tree fixture and an
//! environment variable guard for testing the pathkit library.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Builder for a directory tree inside a temporary directory.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::new()
///     .with_dir("dir/sub")
///     .with_file("dir/sub/file.txt", "contents")
///     .build();
/// assert!(tree.path("dir/sub/file.txt").exists());
/// ```
#[allow(dead_code)]
pub struct TreeFixture {
    dirs: Vec<PathBuf>,
    files: Vec<(PathBuf, String)>,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty fixture builder.
    pub fn new() -> Self {
        Self {
            dirs: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Adds a directory, creating parents as needed.
    pub fn with_dir(mut self, relative: impl AsRef<Path>) -> Self {
        self.dirs.push(relative.as_ref().to_path_buf());
        self
    }

    /// Adds a file with the given contents, creating parents as needed.
    pub fn with_file(mut self, relative: impl AsRef<Path>, contents: &str) -> Self {
        self.files
            .push((relative.as_ref().to_path_buf(), contents.to_string()));
        self
    }

    /// Materializes the tree on disk.
    pub fn build(self) -> Tree {
        let temp_dir = create_temp_dir().unwrap();

        for dir in &self.dirs {
            fs::create_dir_all(temp_dir.path().join(dir)).unwrap();
        }

        for (file, contents) in &self.files {
            let path = temp_dir.path().join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, contents).unwrap();
        }

        Tree { temp_dir }
    }
}

/// A directory tree that is removed when dropped.
#[allow(dead_code)]
pub struct Tree {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl Tree {
    /// The tree's root directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A path inside the tree.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// The form the native resolver should produce for a path in the tree.
    #[cfg(unix)]
    pub fn canonical(&self, relative: impl AsRef<Path>) -> PathBuf {
        fs::canonicalize(self.path(relative)).unwrap()
    }

    /// The form the native resolver should produce for a path in the tree.
    #[cfg(windows)]
    pub fn canonical(&self, relative: impl AsRef<Path>) -> PathBuf {
        std::path::absolute(self.path(relative)).unwrap()
    }
}

/// Joins path segments with the platform separator.
#[allow(dead_code)]
pub fn sep_join(segments: &[&str]) -> String {
    let separator = std::path::MAIN_SEPARATOR.to_string();
    segments.join(separator.as_str())
}

/// RAII guard for setting and restoring environment variables.
///
/// Note: Tests using environment variables should not run in parallel.
/// Use #[serial] attribute or ensure tests clean up properly.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `key` to `value` until the guard is dropped.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Removes `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}
