//! Edge case and error handling tests for dirscope

#![cfg(unix)]

mod harness;

use harness::{TestTree, run_dirscope};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.txt", "x");

    // subdir/parent -> .. creates a potential infinite loop
    let link_path = tree.path().join("subdir").join("parent");
    symlink("..", &link_path).expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_dirscope(tree.path(), &["--stats"]);
    assert!(success, "dirscope should not hang on parent symlink");
    assert!(stdout.contains("Files:       1"), "stdout: {}", stdout);
    assert!(stdout.contains("Directories: 1"), "stdout: {}", stdout);
}

#[test]
fn test_symlinked_file_not_counted() {
    let tree = TestTree::new();
    tree.add_file("target.txt", "1234");

    let link_path = tree.path().join("link.txt");
    symlink(tree.path().join("target.txt"), &link_path).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_dirscope(tree.path(), &["--stats"]);
    assert!(success);
    assert!(
        stdout.contains("Files:       1"),
        "symlink should not count as a file: {}",
        stdout
    );
}

#[test]
fn test_broken_symlink_in_listing() {
    let tree = TestTree::new();
    tree.add_file("real.txt", "x");

    let link_path = tree.path().join("broken.txt");
    symlink("nonexistent.txt", &link_path).expect("Failed to create broken symlink");

    let (stdout, _stderr, success) = run_dirscope(tree.path(), &["--list"]);
    assert!(success, "dirscope should handle broken symlinks");
    assert!(stdout.contains("real.txt"));
    assert!(stdout.contains("broken.txt"), "listing still shows the link");
    assert!(stdout.contains("LINK"), "links are labelled: {}", stdout);
}

// ============================================================================
// Permission Edge Cases
// ============================================================================

#[test]
fn test_unreadable_subdirectory_is_absorbed() {
    let tree = TestTree::new();
    tree.add_file("visible.txt", "x");
    tree.add_file("locked/secret.txt", "x");

    let locked = tree.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
        .expect("Failed to remove permissions");

    let (stdout, _stderr, success) = run_dirscope(tree.path(), &["--stats"]);

    // Restore so the temp dir can be removed
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
        .expect("Failed to restore permissions");

    assert!(success, "unreadable subtree must not fail the walk");
    assert!(
        stdout.contains("Files:       1"),
        "siblings still counted: {}",
        stdout
    );
    assert!(stdout.contains("Directories: 1"), "stdout: {}", stdout);
}

// ============================================================================
// Paging Files
// ============================================================================

#[test]
fn test_paging_file_bytes_excluded() {
    let tree = TestTree::new();
    tree.add_file_of_size("pagefile.sys", 4096);
    tree.add_file_of_size("data.bin", 100);

    let (stdout, _stderr, success) = run_dirscope(tree.path(), &["--stats", "--json"]);
    assert!(success);

    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("stats output should be valid JSON");
    assert_eq!(value["tally"]["files"], 2, "paging file still counted");
    assert_eq!(value["tally"]["bytes"], 100, "paging file bytes skipped");
}

// ============================================================================
// Empty and Odd Trees
// ============================================================================

#[test]
fn test_stats_on_empty_directory() {
    let tree = TestTree::new();

    let (stdout, _stderr, success) = run_dirscope(tree.path(), &["--stats"]);
    assert!(success);
    assert!(stdout.contains("Files:       0"));
    assert!(stdout.contains("none found"), "no largest files: {}", stdout);
}

#[test]
fn test_files_without_extension_bucketed() {
    let tree = TestTree::new();
    tree.add_file("Makefile", "all:");
    tree.add_file("LICENSE", "x");

    let (stdout, _stderr, success) = run_dirscope(tree.path(), &["--types"]);
    assert!(success);
    assert!(
        stdout.contains("no-extension"),
        "extensionless files get their own bucket: {}",
        stdout
    );
}
