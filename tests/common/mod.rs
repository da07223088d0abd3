//! Shared test utilities for git-backed tests

use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Creates a temporary git repository on branch `main` whose single
/// commit carries the given message.
pub fn create_test_repo(commit_message: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo_path = temp_dir.path();

    Command::new("git")
        .args(["init", "-b", "main"])
        .current_dir(repo_path)
        .output()
        .expect("Failed to init git repo");

    // Configure git user for commits
    Command::new("git")
        .args(["config", "user.email", "test@test.com"])
        .current_dir(repo_path)
        .output()
        .expect("Failed to configure git email");

    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(repo_path)
        .output()
        .expect("Failed to configure git name");

    fs::write(repo_path.join("test.txt"), "initial content\n")
        .expect("Failed to write initial file");

    Command::new("git")
        .args(["add", "."])
        .current_dir(repo_path)
        .output()
        .expect("Failed to git add");

    Command::new("git")
        .args(["commit", "-m", commit_message])
        .current_dir(repo_path)
        .output()
        .expect("Failed to git commit");

    temp_dir
}
