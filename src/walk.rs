//! Depth-first directory traversal
//!
//! The walker drives every accumulator and search in the crate: one visitor
//! call per reachable entry. It uses an explicit stack of pending directories
//! instead of recursion, so pathological tree depth cannot overflow the call
//! stack.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::{Entry, ListError, list_dir};

/// Walk the subtree under `root` depth-first, calling `visit` once per
/// reachable entry with the entry and its full path.
///
/// Each directory is visited at most once per walk: before descending, its
/// path is canonicalized and checked against a visited set, which also covers
/// directories reachable under two different names (mount aliases). Symbolic
/// links are skipped outright, never followed, so a link back to an ancestor
/// cannot cause a cycle or double counting.
///
/// A subdirectory that cannot be listed (permission denied, vanished
/// mid-walk) contributes nothing and its siblings continue; the walk as a
/// whole only fails when `root` itself cannot be listed. It under-counts, it
/// never aborts.
pub fn walk<F>(root: &Path, mut visit: F) -> Result<(), ListError>
where
    F: FnMut(&Entry, &Path),
{
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut stack: Vec<PathBuf> = Vec::new();

    // The root is listed eagerly so that its failure surfaces to the
    // caller; every failure below this point is absorbed.
    if let Ok(canon) = fs::canonicalize(root) {
        visited.insert(canon);
    }
    push_children(root, list_dir(root)?, &mut visit, &mut stack);

    while let Some(dir) = stack.pop() {
        match fs::canonicalize(&dir) {
            Ok(canon) => {
                if !visited.insert(canon) {
                    continue;
                }
            }
            // Vanished between listing and descent.
            Err(_) => continue,
        }
        let Ok(entries) = list_dir(&dir) else {
            continue;
        };
        push_children(&dir, entries, &mut visit, &mut stack);
    }

    Ok(())
}

fn push_children<F>(dir: &Path, entries: Vec<Entry>, visit: &mut F, stack: &mut Vec<PathBuf>)
where
    F: FnMut(&Entry, &Path),
{
    for entry in entries {
        if entry.symlink {
            continue;
        }
        let full = dir.join(&entry.name);
        visit(&entry, &full);
        if entry.is_dir() {
            stack.push(full);
        }
    }
}
