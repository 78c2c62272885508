//! Extension histogram and category classification

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::entry::{Entry, ListError};
use crate::walk::walk;

/// Histogram bucket for files whose name contains no dot.
pub const NO_EXTENSION: &str = "no-extension";

/// Semantic grouping assigned to a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Executables,
    Scripts,
    OfficeDocs,
    Archives,
    SystemFiles,
    Shortcuts,
    Drivers,
    Media,
    Other,
}

impl Category {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Executables => "executables",
            Self::Scripts => "scripts",
            Self::OfficeDocs => "office docs",
            Self::Archives => "archives",
            Self::SystemFiles => "system files",
            Self::Shortcuts => "shortcuts",
            Self::Drivers => "drivers",
            Self::Media => "media",
            Self::Other => "other",
        }
    }
}

/// Fixed extension-to-category table. Classification takes the first
/// category whose set contains the extension, so `.sys` lands in
/// executables even though the drivers set also lists it.
static CATEGORY_TABLE: &[(Category, &[&str])] = &[
    (Category::Executables, &[".exe", ".dll", ".msi", ".sys", ".com"]),
    (Category::Scripts, &[".bat", ".cmd", ".ps1", ".vbs", ".js"]),
    (
        Category::OfficeDocs,
        &[".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx"],
    ),
    (Category::Archives, &[".zip", ".rar", ".7z", ".cab", ".iso"]),
    (
        Category::SystemFiles,
        &[".ini", ".inf", ".reg", ".dmp", ".log"],
    ),
    (Category::Shortcuts, &[".lnk", ".url"]),
    (Category::Drivers, &[".drv", ".sys", ".vxd"]),
    (Category::Media, &[".wmv", ".wma", ".asf"]),
];

/// Classify an extension (lowercased, with leading dot) into exactly one
/// category.
pub fn categorise(ext: &str) -> Category {
    for (category, extensions) in CATEGORY_TABLE {
        if extensions.contains(&ext) {
            return *category;
        }
    }
    Category::Other
}

/// Whether the extension appears anywhere in the category tables.
pub fn is_known_system_extension(ext: &str) -> bool {
    CATEGORY_TABLE
        .iter()
        .any(|(_, extensions)| extensions.contains(&ext))
}

/// Derive the histogram key for a file name: the lowercased substring after
/// the last dot, dot included, or the no-extension sentinel.
pub fn file_extension(name: &str) -> String {
    match name.rfind('.') {
        Some(at) => format!(".{}", name[at + 1..].to_lowercase()),
        None => NO_EXTENSION.to_string(),
    }
}

/// Per-extension statistics, mutated in place while walking.
#[derive(Debug, Clone, Serialize)]
pub struct ExtensionStat {
    pub extension: String,
    pub count: u64,
    pub total_bytes: u64,
    pub category: Category,
    pub known_system: bool,
}

/// Histogram of file extensions, keyed by the derived extension string.
///
/// The ordered map gives ties a stable, deterministic order (extension
/// string order) once the buckets are sorted by count.
#[derive(Debug, Default)]
pub struct ExtensionHistogram {
    buckets: BTreeMap<String, ExtensionStat>,
}

impl ExtensionHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one walked entry into the histogram. Directories and symlinks
    /// are ignored; every counted file lands in exactly one bucket.
    pub fn record(&mut self, entry: &Entry) {
        if !entry.is_file() {
            return;
        }
        let ext = file_extension(&entry.name);
        let stat = self
            .buckets
            .entry(ext.clone())
            .or_insert_with(|| ExtensionStat {
                category: categorise(&ext),
                known_system: is_known_system_extension(&ext),
                extension: ext.clone(),
                count: 0,
                total_bytes: 0,
            });
        stat.count += 1;
        stat.total_bytes += entry.size;
    }

    /// Buckets sorted descending by count; ties keep extension order.
    pub fn into_sorted(self) -> Vec<ExtensionStat> {
        let mut stats: Vec<ExtensionStat> = self.buckets.into_values().collect();
        stats.sort_by(|a, b| b.count.cmp(&a.count));
        stats
    }
}

/// Extension histogram for `root` with a fresh walk, sorted descending by
/// count.
pub fn extension_stats(root: &Path) -> Result<Vec<ExtensionStat>, ListError> {
    let mut histogram = ExtensionHistogram::new();
    walk(root, |entry, _| histogram.record(entry))?;
    Ok(histogram.into_sorted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    #[test]
    fn extension_uses_last_dot_lowercased() {
        assert_eq!(file_extension("report.TXT"), ".txt");
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
        assert_eq!(file_extension(".gitignore"), ".gitignore");
        assert_eq!(file_extension("trailing."), ".");
        assert_eq!(file_extension("Makefile"), NO_EXTENSION);
    }

    #[test]
    fn first_matching_category_wins() {
        // .sys is listed under both executables and drivers
        assert_eq!(categorise(".sys"), Category::Executables);
        assert_eq!(categorise(".drv"), Category::Drivers);
        assert_eq!(categorise(".zip"), Category::Archives);
        assert_eq!(categorise(".lnk"), Category::Shortcuts);
        assert_eq!(categorise(".xyz"), Category::Other);
    }

    #[test]
    fn known_system_is_union_membership() {
        assert!(is_known_system_extension(".exe"));
        assert!(is_known_system_extension(".vxd"));
        assert!(is_known_system_extension(".wma"));
        assert!(!is_known_system_extension(".txt"));
        assert!(!is_known_system_extension(NO_EXTENSION));
    }

    #[test]
    fn histogram_counts_sum_to_file_count() {
        let tree = TestTree::new();
        tree.add_file("a.txt", "aaa");
        tree.add_file("b.TXT", "bb");
        tree.add_file("c.log", "c");
        tree.add_file("README", "rr");
        tree.add_file("sub/d.txt", "dddd");

        let stats = extension_stats(tree.path()).unwrap();
        let total: u64 = stats.iter().map(|s| s.count).sum();
        assert_eq!(total, 5);

        let txt = stats.iter().find(|s| s.extension == ".txt").unwrap();
        assert_eq!(txt.count, 3, "case variants share one bucket");
        assert_eq!(txt.total_bytes, 9);

        let bare = stats.iter().find(|s| s.extension == NO_EXTENSION).unwrap();
        assert_eq!(bare.count, 1);
    }

    #[test]
    fn sorted_descending_with_stable_ties() {
        let tree = TestTree::new();
        tree.add_file("a.txt", "");
        tree.add_file("b.txt", "");
        tree.add_file("c.log", "");
        tree.add_file("d.ini", "");

        let stats = extension_stats(tree.path()).unwrap();
        assert_eq!(stats[0].extension, ".txt");
        // .ini and .log tie at one file each; extension order breaks the tie
        assert_eq!(stats[1].extension, ".ini");
        assert_eq!(stats[2].extension, ".log");
    }

    #[test]
    fn records_category_and_known_flag() {
        let tree = TestTree::new();
        tree.add_file("setup.exe", "ee");
        tree.add_file("notes.txt", "tt");

        let stats = extension_stats(tree.path()).unwrap();
        let exe = stats.iter().find(|s| s.extension == ".exe").unwrap();
        assert_eq!(exe.category, Category::Executables);
        assert!(exe.known_system);

        let txt = stats.iter().find(|s| s.extension == ".txt").unwrap();
        assert_eq!(txt.category, Category::Other);
        assert!(!txt.known_system);
    }
}
