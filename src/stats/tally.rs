//! File, directory, and byte counting fold

use std::path::Path;

use serde::Serialize;

use crate::entry::{Entry, ListError};
use crate::walk::walk;

/// Paging and hibernation files whose sizes are excluded from byte totals,
/// matched by exact lowercase file name.
pub const PAGING_FILES: &[&str] = &["pagefile.sys", "hiberfil.sys", "swapfile.sys"];

/// Counts of files, directories, and bytes under a root.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct UsageTally {
    pub files: u64,
    pub dirs: u64,
    pub bytes: u64,
}

impl UsageTally {
    /// Fold one walked entry into the tally.
    ///
    /// Every regular file counts toward `files`; byte counting additionally
    /// skips the paging-file deny list. An unreadable file already arrives
    /// with size zero from the lister, so it contributes nothing rather than
    /// aborting the fold.
    pub fn record(&mut self, entry: &Entry) {
        if entry.is_dir() {
            self.dirs += 1;
        } else if entry.is_file() {
            self.files += 1;
            if !PAGING_FILES.contains(&entry.name.to_lowercase().as_str()) {
                self.bytes += entry.size;
            }
        }
    }
}

/// Count files, directories, and bytes under `root` with a fresh walk.
pub fn usage_tally(root: &Path) -> Result<UsageTally, ListError> {
    let mut tally = UsageTally::default();
    walk(root, |entry, _| tally.record(entry))?;
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    #[test]
    fn counts_files_dirs_and_bytes() {
        let tree = TestTree::new();
        tree.add_file("a.txt", "aaaa");
        tree.add_file("sub/b.txt", "bb");
        tree.add_dir("empty");

        let tally = usage_tally(tree.path()).unwrap();
        assert_eq!(tally.files, 2);
        assert_eq!(tally.dirs, 2);
        assert_eq!(tally.bytes, 6);
    }

    #[test]
    fn paging_files_counted_but_not_sized() {
        let tree = TestTree::new();
        tree.add_file("pagefile.sys", "xxxxxxxxxx");
        tree.add_file("Hiberfil.SYS", "yyyy");
        tree.add_file("data.bin", "zz");

        let tally = usage_tally(tree.path()).unwrap();
        assert_eq!(tally.files, 3, "deny-listed files still count as files");
        assert_eq!(tally.bytes, 2, "deny-listed files contribute no bytes");
    }

    #[test]
    fn empty_tree_tallies_zero() {
        let tree = TestTree::new();
        let tally = usage_tally(tree.path()).unwrap();
        assert_eq!(tally.files, 0);
        assert_eq!(tally.dirs, 0);
        assert_eq!(tally.bytes, 0);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_do_not_count() {
        use std::os::unix::fs::symlink;

        let tree = TestTree::new();
        tree.add_file("real.txt", "12345");
        symlink(tree.path().join("real.txt"), tree.path().join("alias.txt")).unwrap();

        let tally = usage_tally(tree.path()).unwrap();
        assert_eq!(tally.files, 1);
        assert_eq!(tally.bytes, 5);
    }
}
