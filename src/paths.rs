//! Path validation and well-known locations
//!
//! Glue the menu and the system-file search depend on: the historical path
//! validator, parent navigation, and the environment-derived special-folder
//! table.

use std::env;
use std::path::{Path, PathBuf};

use crate::entry::ListError;

/// Characters the historical validator rejects anywhere in a path.
pub const FORBIDDEN_CHARS: &[char] = &['/', ':', '*', '?', '"', '<', '>', '|'];

/// Longest accepted path, in characters.
pub const MAX_PATH_LEN: usize = 260;

/// User folders resolved under the profile directory.
const USER_FOLDERS: &[(&str, &str)] = &[
    ("Desktop", "Desktop"),
    ("Downloads", "Downloads"),
    ("Documents", "Documents"),
    ("Music", "Music"),
    ("Pictures", "Pictures"),
    ("Videos", "Videos"),
];

#[cfg(windows)]
const APPDATA_FOLDERS: &[(&str, &str)] = &[
    ("AppData", "AppData"),
    ("Local/AppData", "AppData\\Local"),
    ("Roaming/AppData", "AppData\\Roaming"),
];

/// Validate a single user-entered name component against the forbidden
/// character set.
pub fn validate_component(name: &str) -> Result<(), ListError> {
    if let Some(ch) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        return Err(ListError::InvalidPath(format!(
            "forbidden character '{ch}' in \"{name}\""
        )));
    }
    Ok(())
}

/// Validate a whole path: forbidden characters, length limit, existence.
///
/// Known issue, preserved deliberately: the forbidden set includes ':' and
/// the separators, so every well-formed absolute path fails the character
/// check. Callers validating navigation input should run
/// [`validate_component`] on the entered name and check existence of the
/// joined path themselves.
pub fn validate_path(path: &Path) -> Result<(), ListError> {
    let text = path.to_string_lossy();
    validate_component(&text)?;
    if text.chars().count() > MAX_PATH_LEN {
        return Err(ListError::InvalidPath(format!(
            "path longer than {MAX_PATH_LEN} characters"
        )));
    }
    if !path.exists() {
        return Err(ListError::NotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Parent of `path`, or `path` itself at a filesystem root.
pub fn parent_path(path: &Path) -> PathBuf {
    path.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| path.to_path_buf())
}

/// Special folders by logical name, resolved from the environment.
///
/// User folders come from the profile directory (`USERPROFILE`, falling
/// back to `HOME`), system folders from `SystemRoot` and the program-files
/// variables. Folders whose path does not exist are omitted.
pub fn special_folders() -> Vec<(String, PathBuf)> {
    let mut folders = Vec::new();

    if let Some(profile) = profile_dir() {
        for (name, rel) in USER_FOLDERS {
            push_existing(&mut folders, name, profile.join(rel));
        }
        #[cfg(windows)]
        for (name, rel) in APPDATA_FOLDERS {
            push_existing(&mut folders, name, profile.join(rel));
        }
    }
    for (name, path) in system_folders() {
        push_existing(&mut folders, &name, path);
    }

    folders
}

/// The well-known system directories used by the system-file search: the OS
/// root, the two system-library directories, and the two program-files
/// directories. Only directories that exist are returned.
pub fn system_roots() -> Vec<PathBuf> {
    system_folders()
        .into_iter()
        .map(|(_, path)| path)
        .filter(|path| path.exists())
        .collect()
}

fn push_existing(folders: &mut Vec<(String, PathBuf)>, name: &str, path: PathBuf) {
    if path.exists() {
        folders.push((name.to_string(), path));
    }
}

/// The user's profile directory, from `USERPROFILE` (Windows) or `HOME`.
fn profile_dir() -> Option<PathBuf> {
    env::var_os("USERPROFILE")
        .or_else(|| env::var_os("HOME"))
        .map(PathBuf::from)
}

fn system_folders() -> Vec<(String, PathBuf)> {
    let mut folders = Vec::new();
    if let Some(system_root) = env::var_os("SystemRoot").map(PathBuf::from) {
        folders.push(("System32".to_string(), system_root.join("System32")));
        folders.push(("SysWOW64".to_string(), system_root.join("SysWOW64")));
        folders.push(("Windows".to_string(), system_root));
    }
    if let Some(path) = env::var_os("ProgramFiles").map(PathBuf::from) {
        folders.push(("ProgramFiles".to_string(), path));
    }
    if let Some(path) = env::var_os("ProgramFiles(x86)").map(PathBuf::from) {
        folders.push(("ProgramFilesX86".to_string(), path));
    }
    folders
}
