//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary project directory with a storygen.toml
pub fn create_test_project(config: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let project_root = temp_dir.path().to_path_buf();
    fs::write(project_root.join("storygen.toml"), config).unwrap();
    (temp_dir, project_root)
}

/// Write a request file into the project directory
pub fn create_request_file(project_root: &PathBuf, name: &str, content: &str) -> PathBuf {
    let path = project_root.join(name);
    fs::write(&path, content).unwrap();
    path
}
