//! Console and JSON reporting
//!
//! Formats listings, the composite statistics report, and search results.
//! Everything here writes to stdout; the library computes, this module
//! renders.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::entry::{Entry, EntryKind};
use crate::search::SizeHit;
use crate::stats::{DirectoryStats, ExtensionStat};

/// Format a byte count with binary units and one decimal place:
/// `"512 B"`, `"2.5 KB"`, `"150.3 MB"`, `"3.7 GB"`.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let value = bytes as f64;
    if value < KB {
        format!("{bytes} B")
    } else if value < MB {
        format!("{:.1} KB", value / KB)
    } else if value < GB {
        format!("{:.1} MB", value / MB)
    } else {
        format!("{:.1} GB", value / GB)
    }
}

fn stream(use_color: bool) -> StandardStream {
    StandardStream::stdout(if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    })
}

fn bold() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_bold(true);
    spec
}

fn cyan() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Cyan));
    spec
}

/// Shorten a name to `max` characters, marking the cut with an ellipsis.
fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() > max {
        let kept: String = name.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        name.to_string()
    }
}

/// Print the single-level listing table: TYPE / NAME / SIZE / MODIFIED /
/// HIDDEN.
pub fn print_listing(entries: &[Entry], use_color: bool) -> io::Result<()> {
    let mut stdout = stream(use_color);

    if entries.is_empty() {
        writeln!(stdout, "Directory is empty")?;
        return Ok(());
    }

    writeln!(stdout, "{}", "-".repeat(96))?;
    stdout.set_color(&bold())?;
    writeln!(
        stdout,
        "{:<6} {:<45} {:<12} {:<12} {:<8}",
        "TYPE", "NAME", "SIZE", "MODIFIED", "HIDDEN"
    )?;
    stdout.reset()?;
    writeln!(stdout, "{}", "-".repeat(96))?;

    for entry in entries {
        let kind = if entry.symlink {
            "LINK"
        } else if entry.kind == EntryKind::Directory {
            "DIR"
        } else {
            "FILE"
        };
        let size = if entry.is_file() {
            format_size(entry.size)
        } else {
            "0".to_string()
        };
        let modified = entry
            .modified
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let hidden = if entry.hidden { "hidden" } else { "-" };

        writeln!(
            stdout,
            "{:<6} {:<45} {:<12} {:<12} {:<8}",
            kind,
            truncate_name(&entry.name, 38),
            size,
            modified,
            hidden
        )?;
    }
    Ok(())
}

/// Print the composite directory-statistics report: general counts, the
/// top extension buckets, attribute counters, and the largest files.
pub fn print_stats(
    path: &Path,
    stats: &DirectoryStats,
    top_types: usize,
    use_color: bool,
) -> io::Result<()> {
    let mut stdout = stream(use_color);

    stdout.set_color(&bold())?;
    writeln!(stdout, "Directory statistics: {}", path.display())?;
    stdout.reset()?;
    writeln!(stdout, "{}", "=".repeat(60))?;

    writeln!(stdout, "\nGeneral:")?;
    writeln!(stdout, "  Files:       {}", stats.tally.files)?;
    writeln!(stdout, "  Directories: {}", stats.tally.dirs)?;
    writeln!(stdout, "  Total size:  {}", format_size(stats.tally.bytes))?;

    writeln!(stdout, "\nFile types (top {top_types}):")?;
    write_type_rows(&mut stdout, &stats.extensions, top_types)?;

    writeln!(stdout, "\nAttributes:")?;
    writeln!(stdout, "  hidden:   {}", stats.attributes.hidden)?;
    writeln!(stdout, "  system:   {}", stats.attributes.system)?;
    writeln!(stdout, "  readonly: {}", stats.attributes.readonly)?;
    writeln!(stdout, "  archive:  {}", stats.attributes.archive)?;

    writeln!(stdout, "\nLargest files:")?;
    if stats.largest.is_empty() {
        writeln!(stdout, "  none found")?;
    }
    for (i, file) in stats.largest.iter().enumerate() {
        writeln!(
            stdout,
            "  {}. {:<35} {}",
            i + 1,
            truncate_name(&file.name, 30),
            format_size(file.size)
        )?;
    }

    writeln!(stdout, "\n{}", "=".repeat(60))?;
    Ok(())
}

/// Print extension histogram rows on their own (the type-analysis view).
pub fn print_types(types: &[ExtensionStat], use_color: bool) -> io::Result<()> {
    let mut stdout = stream(use_color);
    if types.is_empty() {
        writeln!(stdout, "No files found")?;
        return Ok(());
    }
    write_type_rows(&mut stdout, types, types.len())
}

fn write_type_rows(
    stdout: &mut StandardStream,
    types: &[ExtensionStat],
    limit: usize,
) -> io::Result<()> {
    for stat in types.iter().take(limit) {
        write!(stdout, "  ")?;
        stdout.set_color(&cyan())?;
        write!(stdout, "{:<14}", stat.extension)?;
        stdout.reset()?;
        writeln!(
            stdout,
            "{:>6} files  {:>10}  [{}]",
            stat.count,
            format_size(stat.total_bytes),
            stat.category.label()
        )?;
    }
    Ok(())
}

/// Print bare-path search results, with sizes where the file is still
/// readable.
pub fn print_paths(results: &[PathBuf], label: &str, use_color: bool) -> io::Result<()> {
    let mut stdout = stream(use_color);
    write_search_header(&mut stdout, label, results.len())?;

    for (i, path) in results.iter().enumerate() {
        match std::fs::metadata(path) {
            Ok(meta) => writeln!(
                stdout,
                "{:>4}. {}   ({})",
                i + 1,
                path.display(),
                format_size(meta.len())
            )?,
            Err(_) => writeln!(stdout, "{:>4}. {}", i + 1, path.display())?,
        }
    }
    Ok(())
}

/// Print size-search hits, largest first.
pub fn print_size_hits(results: &[SizeHit], use_color: bool) -> io::Result<()> {
    let mut stdout = stream(use_color);
    write_search_header(&mut stdout, "size", results.len())?;

    for (i, hit) in results.iter().enumerate() {
        writeln!(
            stdout,
            "{:>4}. {}   [{}]   ({:.2} MB)",
            i + 1,
            hit.path.display(),
            hit.extension,
            hit.size_mb
        )?;
    }
    Ok(())
}

fn write_search_header(stdout: &mut StandardStream, label: &str, found: usize) -> io::Result<()> {
    writeln!(stdout, "{}", "=".repeat(60))?;
    stdout.set_color(&bold())?;
    writeln!(stdout, "Search: {label}  ({found} found)")?;
    stdout.reset()?;
    writeln!(stdout, "{}", "=".repeat(60))?;
    if found == 0 {
        writeln!(stdout, "Nothing found.")?;
    }
    Ok(())
}

/// Print any serializable report as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{json}");
    Ok(())
}
