//! Filtering folds over the walker: pattern, extension, size, and
//! system-file searches
//!
//! Each search re-walks the tree from scratch, the same policy as the
//! statistics accumulators.

use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::entry::ListError;
use crate::paths;
use crate::stats::file_extension;
use crate::walk::walk;

/// Extensions that identify system files for [`find_system_files`].
pub const SYSTEM_SEARCH_EXTENSIONS: &[&str] = &[".exe", ".dll", ".sys"];

const MB: f64 = 1024.0 * 1024.0;

/// Compile a shell-wildcard pattern into an anchored regex.
///
/// `*` matches any run of characters, `?` exactly one; every other
/// character is literal. Unlike a full glob grammar, bracket classes have no
/// special meaning here.
pub fn compile_wildcard(pattern: &str, case_sensitive: bool) -> Result<Regex, regex::Error> {
    let mut source = String::with_capacity(pattern.len() + 2);
    source.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            _ => source.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4]))),
        }
    }
    source.push('$');
    RegexBuilder::new(&source)
        .case_insensitive(!case_sensitive)
        .build()
}

/// Full paths of files under `root` whose bare name matches the wildcard
/// pattern.
///
/// Matching is against the file name only, never the path, and is
/// case-insensitive unless `case_sensitive` is set.
pub fn find_by_pattern(
    root: &Path,
    pattern: &str,
    case_sensitive: bool,
) -> Result<Vec<PathBuf>, ListError> {
    let regex = compile_wildcard(pattern.trim(), case_sensitive)
        .map_err(|_| ListError::InvalidPattern(pattern.to_string()))?;

    let mut hits = Vec::new();
    walk(root, |entry, path| {
        if entry.is_file() && regex.is_match(&entry.name) {
            hits.push(path.to_path_buf());
        }
    })?;
    Ok(hits)
}

/// Normalize caller-supplied extensions: trim, lowercase, prepend the dot
/// where missing, drop blanks.
pub fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| ext.trim().to_lowercase())
        .filter(|ext| !ext.is_empty())
        .map(|ext| {
            if ext.starts_with('.') {
                ext
            } else {
                format!(".{ext}")
            }
        })
        .collect()
}

/// Full paths of files under `root` whose extension (last-dot rule) is in
/// the supplied set. Extensions may arrive with or without the leading dot
/// and in any case.
pub fn find_by_extension(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, ListError> {
    let wanted = normalize_extensions(extensions);

    let mut hits = Vec::new();
    walk(root, |entry, path| {
        if entry.is_file() && wanted.contains(&file_extension(&entry.name)) {
            hits.push(path.to_path_buf());
        }
    })?;
    Ok(hits)
}

/// One size-search hit.
#[derive(Debug, Clone, Serialize)]
pub struct SizeHit {
    pub path: PathBuf,
    /// Size in megabytes, rounded to two decimal places.
    pub size_mb: f64,
    pub extension: String,
}

/// Files of at least `min_mb` megabytes under `root`, sorted descending by
/// size. The threshold converts as `min_mb * 1024 * 1024` truncated to
/// integer bytes.
pub fn find_larger_than(root: &Path, min_mb: f64) -> Result<Vec<SizeHit>, ListError> {
    let min_bytes = (min_mb * MB) as u64;

    let mut hits: Vec<(u64, SizeHit)> = Vec::new();
    walk(root, |entry, path| {
        if entry.is_file() && entry.size >= min_bytes {
            let size_mb = (entry.size as f64 / MB * 100.0).round() / 100.0;
            hits.push((
                entry.size,
                SizeHit {
                    path: path.to_path_buf(),
                    size_mb,
                    extension: file_extension(&entry.name),
                },
            ));
        }
    })?;

    hits.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(hits.into_iter().map(|(_, hit)| hit).collect())
}

/// System files (`.exe`, `.dll`, `.sys`) across the well-known system
/// roots, or under `current` when none of those roots resolve.
///
/// A root that fails to list is skipped; the others still contribute.
pub fn find_system_files(current: &Path) -> Vec<PathBuf> {
    let mut roots = paths::system_roots();
    if roots.is_empty() {
        roots.push(current.to_path_buf());
    }

    let wanted: Vec<String> = SYSTEM_SEARCH_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect();

    let mut hits = Vec::new();
    for root in roots {
        if let Ok(mut found) = find_by_extension(&root, &wanted) {
            hits.append(&mut found);
        }
    }
    hits
}
