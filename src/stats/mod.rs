//! Statistics accumulators over a directory walk
//!
//! Four independent folds over the same walker, each usable on its own:
//!
//! - `tally` - file/directory/byte counting
//! - `extensions` - extension histogram with category classification
//! - `attributes` - hidden/system/readonly/archive counters
//! - `largest` - bounded top-K largest-files window
//!
//! Plus `collect_stats`, which gathers all four for the composite report.

mod attributes;
mod extensions;
mod largest;
mod tally;

pub use attributes::{AttributeStats, attribute_stats};
pub use extensions::{
    Category, ExtensionHistogram, ExtensionStat, NO_EXTENSION, categorise, extension_stats,
    file_extension, is_known_system_extension,
};
pub use largest::{LargestFile, LargestWindow, largest_files};
pub use tally::{PAGING_FILES, UsageTally, usage_tally};

use std::path::Path;

use serde::Serialize;

use crate::entry::ListError;

/// Everything the directory-statistics report needs, gathered in one call.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryStats {
    pub tally: UsageTally,
    pub extensions: Vec<ExtensionStat>,
    pub attributes: AttributeStats,
    pub largest: Vec<LargestFile>,
}

/// Collect the composite statistics for `root`, keeping the `largest_window`
/// biggest files.
///
/// Each accumulator is an independent fold and re-walks the tree from
/// scratch; nothing from one walk is carried into the next.
pub fn collect_stats(root: &Path, largest_window: usize) -> Result<DirectoryStats, ListError> {
    Ok(DirectoryStats {
        tally: usage_tally(root)?,
        extensions: extension_stats(root)?,
        attributes: attribute_stats(root)?,
        largest: largest_files(root, largest_window)?,
    })
}
