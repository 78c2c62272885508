//! Single-level directory listing
//!
//! `list_dir` is the one place the crate touches `read_dir`: it describes the
//! immediate entries of a directory and nothing below them. The walker and
//! every accumulator are built on top of it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;

use crate::platform;

/// Errors surfaced by directory listing, path validation, and search.
///
/// Per-entry failures (an entry vanishing between listing and stat, a file
/// whose metadata cannot be read) are absorbed where they occur and never
/// reach this type; only failures on the directory or pattern the caller
/// asked about do.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("access denied: {0}")]
    AccessDenied(PathBuf),
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("invalid search pattern: {0}")]
    InvalidPattern(String),
}

/// What kind of filesystem object an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// One filesystem object from a single-level directory listing.
///
/// Produced fresh on every listing; never cached or mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    /// Size in bytes for files; 0 for directories and for files whose size
    /// could not be read.
    pub size: u64,
    /// Last modification time, if the platform reported one.
    pub modified: Option<DateTime<Local>>,
    /// Platform hidden-attribute bit (always false where no such bit exists).
    pub hidden: bool,
    /// True when the entry is a symbolic link. Links are described, never
    /// followed, so `kind` and `size` refer to the link itself.
    pub symlink: bool,
}

impl Entry {
    /// A regular file: counted by every accumulator.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File && !self.symlink
    }

    /// A real directory the walker may descend into.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory && !self.symlink
    }
}

/// List the immediate entries of a directory.
///
/// Fails when `path` does not exist, is not a directory, or listing is
/// denied. An entry whose metadata cannot be read (vanished mid-listing,
/// permission) is silently omitted rather than failing the whole call.
/// Entries come back in underlying directory order; no sort is applied.
pub fn list_dir(path: &Path) -> Result<Vec<Entry>, ListError> {
    if !path.exists() {
        return Err(ListError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ListError::NotADirectory(path.to_path_buf()));
    }

    let read = fs::read_dir(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ListError::NotFound(path.to_path_buf()),
        _ => ListError::AccessDenied(path.to_path_buf()),
    })?;

    let mut entries = Vec::new();
    for dir_entry in read.filter_map(|e| e.ok()) {
        let Ok(file_type) = dir_entry.file_type() else {
            continue;
        };
        let full = dir_entry.path();
        let symlink = file_type.is_symlink();
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        // symlink_metadata so links are described rather than followed.
        // A failed stat leaves size unknown (0) and modified empty instead
        // of dropping the entry: the type is already known at this point.
        let meta = fs::symlink_metadata(&full).ok();
        let size = match (&meta, kind, symlink) {
            (Some(m), EntryKind::File, false) => m.len(),
            _ => 0,
        };
        let modified = meta
            .as_ref()
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Local>::from);

        entries.push(Entry {
            name: dir_entry.file_name().to_string_lossy().to_string(),
            kind,
            size,
            modified,
            hidden: platform::is_hidden(&full),
            symlink,
        });
    }

    Ok(entries)
}
