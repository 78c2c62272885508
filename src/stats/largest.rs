//! Bounded top-K largest-files window

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::entry::{Entry, ListError};
use crate::walk::walk;

/// One record in the largest-files window.
#[derive(Debug, Clone, Serialize)]
pub struct LargestFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

/// Bounded collection of the K largest files seen so far, always sorted
/// descending by size.
///
/// Inserting into a full window evicts the current minimum, so a file
/// smaller than the minimum leaves a full window unchanged. Equal sizes
/// keep traversal order.
#[derive(Debug)]
pub struct LargestWindow {
    capacity: usize,
    entries: Vec<LargestFile>,
}

impl LargestWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity.saturating_add(1)),
        }
    }

    /// Fold one walked entry into the window.
    pub fn record(&mut self, entry: &Entry, path: &Path) {
        if !entry.is_file() {
            return;
        }
        self.push(LargestFile {
            path: path.to_path_buf(),
            name: entry.name.clone(),
            size: entry.size,
        });
    }

    fn push(&mut self, file: LargestFile) {
        if self.capacity == 0 {
            return;
        }
        let at = self
            .entries
            .iter()
            .position(|e| e.size < file.size)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, file);
        if self.entries.len() > self.capacity {
            self.entries.pop();
        }
    }

    pub fn entries(&self) -> &[LargestFile] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<LargestFile> {
        self.entries
    }
}

/// The `k` largest files under `root`, found with a fresh walk over files in
/// traversal order.
pub fn largest_files(root: &Path, k: usize) -> Result<Vec<LargestFile>, ListError> {
    let mut window = LargestWindow::new(k);
    walk(root, |entry, path| window.record(entry, path))?;
    Ok(window.into_vec())
}
