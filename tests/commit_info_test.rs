//! Integration tests for commit metadata lookup.

mod common;

use tempfile::TempDir;

use edusalon::git::latest_commit;
use edusalon::notify::format;

use common::create_test_repo;

#[test]
fn test_latest_commit_reads_repo_metadata() {
    let temp_dir = create_test_repo("Add prefecture collector");

    let info = latest_commit(temp_dir.path());

    assert_eq!(info.message, "Add prefecture collector");
    assert_eq!(info.author, "Test User");
    assert_eq!(info.branch, "main");
    assert_eq!(info.hash.len(), 40, "expected a full SHA-1 hash");
}

#[test]
fn test_latest_commit_degrades_outside_repo() {
    // Plain directory, no .git. The lookup must not fail; it falls back
    // to the "unknown" placeholders so the notification still goes out.
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let info = latest_commit(temp_dir.path());

    assert_eq!(info.hash, "unknown");
    assert_eq!(info.message, "Unknown commit");
    assert_eq!(info.author, "Unknown");
    assert_eq!(info.branch, "unknown");
}

#[test]
fn test_commit_notification_from_real_repo() {
    let temp_dir = create_test_repo("Fix summary rate formatting");
    let info = latest_commit(temp_dir.path());

    let (message, severity) = format::commit(&info);

    assert_eq!(severity, edusalon::domain::Severity::Good);
    assert!(message.contains("**Branch**: main"));
    assert!(message.contains("**Author**: Test User"));
    assert!(message.contains("Fix summary rate formatting"));
}
