//! Dirscope - interactive console browsing, statistics, and search for
//! directory trees

pub mod entry;
pub mod menu;
pub mod paths;
pub mod platform;
pub mod report;
pub mod search;
pub mod stats;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use entry::{Entry, EntryKind, ListError, list_dir};
pub use report::{
    format_size, print_json, print_listing, print_paths, print_size_hits, print_stats, print_types,
};
pub use search::{
    SYSTEM_SEARCH_EXTENSIONS, SizeHit, compile_wildcard, find_by_extension, find_by_pattern,
    find_larger_than, find_system_files, normalize_extensions,
};
pub use stats::{
    AttributeStats, Category, DirectoryStats, ExtensionHistogram, ExtensionStat, LargestFile,
    LargestWindow, UsageTally, attribute_stats, collect_stats, extension_stats, largest_files,
    usage_tally,
};
pub use walk::walk;
