//! Platform capabilities: hidden-attribute bits and filesystem roots

use std::path::{Path, PathBuf};

/// Whether the platform hidden-attribute bit is set for a path.
///
/// Windows reads FILE_ATTRIBUTE_HIDDEN from the file's metadata. Platforms
/// without such a bit degrade to always-false rather than guessing from
/// naming conventions, so a unix dotfile does not report as hidden.
#[cfg(windows)]
pub fn is_hidden(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    std::fs::symlink_metadata(path)
        .map(|m| m.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
        .unwrap_or(false)
}

#[cfg(not(windows))]
pub fn is_hidden(_path: &Path) -> bool {
    false
}

/// Filesystem roots available for navigation.
///
/// Windows probes the drive letters A: through Z: for existence; elsewhere
/// there is the single root `/`.
#[cfg(windows)]
pub fn available_roots() -> Vec<PathBuf> {
    (b'A'..=b'Z')
        .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
        .filter(|root| root.exists())
        .collect()
}

#[cfg(not(windows))]
pub fn available_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("/")]
}
