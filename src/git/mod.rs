//! Git metadata lookup for commit notifications.

use std::path::Path;
use std::process::Command;

use tracing::error;

/// Metadata about the latest commit in a repository.
#[derive(Debug, Clone)]
pub struct CommitInfo {
    pub hash: String,
    pub message: String,
    pub author: String,
    pub branch: String,
}

impl CommitInfo {
    /// Placeholder returned when the repository state cannot be read. The
    /// commit notification still goes out with "unknown" fields instead of
    /// failing the command.
    pub fn unknown() -> Self {
        Self {
            hash: "unknown".to_string(),
            message: "Unknown commit".to_string(),
            author: "Unknown".to_string(),
            branch: "unknown".to_string(),
        }
    }
}

/// Read the latest commit's hash, subject, author and branch from the
/// repository at `dir`. Degrades to [`CommitInfo::unknown`] when git is
/// unavailable or `dir` is not a repository.
pub fn latest_commit(dir: &Path) -> CommitInfo {
    let hash = git_output(dir, &["rev-parse", "HEAD"]);
    let message = git_output(dir, &["log", "-1", "--pretty=%s"]);
    let author = git_output(dir, &["log", "-1", "--pretty=%an"]);
    let branch = git_output(dir, &["rev-parse", "--abbrev-ref", "HEAD"]);

    match (hash, message, author, branch) {
        (Some(hash), Some(message), Some(author), Some(branch)) => CommitInfo {
            hash,
            message,
            author,
            branch,
        },
        _ => {
            error!("Failed to get commit info from {}", dir.display());
            CommitInfo::unknown()
        }
    }
}

fn git_output(dir: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).current_dir(dir).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
