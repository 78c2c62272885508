//! File attribute counters
//!
//! Hidden / system / readonly / archive tallies over the files of a walk.
//! Directories only recurse; they are never counted.

use std::path::Path;

use serde::Serialize;

use crate::entry::{Entry, ListError};
use crate::walk::walk;

/// Extensions the system-file heuristic looks for.
const SYSTEM_EXTENSIONS: &[&str] = &[".sys", ".dll", ".drv"];

/// Directory-path substrings that mark a likely system location.
const SYSTEM_DIR_HINTS: &[&str] = &["windows", "system32", "winnt"];

/// Extensions counted as archives.
const ARCHIVE_EXTENSIONS: &[&str] = &[".zip", ".rar", ".7z", ".tar", ".gz", ".cab"];

/// Counters over file attributes. The four checks are independent; a single
/// file may increment several of them.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AttributeStats {
    pub hidden: u64,
    pub system: u64,
    pub readonly: u64,
    pub archive: u64,
}

impl AttributeStats {
    /// Fold one walked entry into the counters.
    pub fn record(&mut self, entry: &Entry, path: &Path) {
        if !entry.is_file() {
            return;
        }
        let name = entry.name.to_lowercase();

        if entry.hidden {
            self.hidden += 1;
        }
        if is_system_file(&name, path) {
            self.system += 1;
        }
        if is_readonly(path) {
            self.readonly += 1;
        }
        if ARCHIVE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            self.archive += 1;
        }
    }
}

/// Heuristic, not an authoritative attribute query: a file counts as
/// "system" when it carries a system extension and its directory path
/// mentions a well-known system location.
fn is_system_file(lower_name: &str, path: &Path) -> bool {
    if !SYSTEM_EXTENSIONS.iter().any(|ext| lower_name.ends_with(ext)) {
        return false;
    }
    let dir = path
        .parent()
        .map(|p| p.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    SYSTEM_DIR_HINTS.iter().any(|hint| dir.contains(hint))
}

/// Whether the file is not writable by the current process. A file whose
/// permissions cannot be read counts as writable.
fn is_readonly(path: &Path) -> bool {
    path.metadata()
        .map(|m| m.permissions().readonly())
        .unwrap_or(false)
}

/// Attribute counters for `root` with a fresh walk.
pub fn attribute_stats(root: &Path) -> Result<AttributeStats, ListError> {
    let mut stats = AttributeStats::default();
    walk(root, |entry, path| stats.record(entry, path))?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    #[test]
    fn archives_counted_by_extension() {
        let tree = TestTree::new();
        tree.add_file("backup.zip", "z");
        tree.add_file("dump.tar", "t");
        tree.add_file("Music.RAR", "r");
        tree.add_file("notes.txt", "n");

        let stats = attribute_stats(tree.path()).unwrap();
        assert_eq!(stats.archive, 3);
    }

    #[test]
    fn system_heuristic_requires_extension_and_location() {
        let tree = TestTree::new();
        tree.add_file("windows/system32/kernel.dll", "k");
        tree.add_file("windows/driver.sys", "d");
        tree.add_file("elsewhere/other.dll", "o");
        tree.add_file("windows/system32/readme.txt", "r");

        let stats = attribute_stats(tree.path()).unwrap();
        assert_eq!(
            stats.system, 2,
            "system needs both the extension and the directory hint"
        );
    }

    #[cfg(unix)]
    #[test]
    fn readonly_files_counted() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let tree = TestTree::new();
        let locked = tree.add_file("frozen.txt", "f");
        tree.add_file("writable.txt", "w");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o444)).unwrap();

        let stats = attribute_stats(tree.path()).unwrap();
        assert_eq!(stats.readonly, 1);
    }

    #[cfg(unix)]
    #[test]
    fn one_file_can_hit_several_counters() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let tree = TestTree::new();
        let file = tree.add_file("winnt/old.zip", "z");
        fs::set_permissions(&file, fs::Permissions::from_mode(0o444)).unwrap();

        let stats = attribute_stats(tree.path()).unwrap();
        assert_eq!(stats.archive, 1);
        assert_eq!(stats.readonly, 1);
    }

    #[test]
    fn directories_never_counted() {
        let tree = TestTree::new();
        tree.add_dir("windows/system32");
        tree.add_dir("vault.zip");

        let stats = attribute_stats(tree.path()).unwrap();
        assert_eq!(stats.system, 0);
        assert_eq!(stats.archive, 0);
    }
}
