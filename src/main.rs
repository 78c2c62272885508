//! CLI entry point for dirscope

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use dirscope::{
    collect_stats, extension_stats, find_by_extension, find_by_pattern, find_larger_than,
    find_system_files, list_dir, menu, print_json, print_listing, print_paths, print_size_hits,
    print_stats, print_types,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirscope")]
#[command(about = "Interactive console browser and analyser for directory trees")]
#[command(version)]
struct Args {
    /// Directory to browse or analyse
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Print the immediate directory listing and exit
    #[arg(short, long)]
    list: bool,

    /// Print directory statistics and exit
    #[arg(short, long)]
    stats: bool,

    /// Print the extension histogram (top N rows, all when N is omitted)
    #[arg(short = 't', long = "types", value_name = "N", num_args = 0..=1)]
    types: Option<Option<usize>>,

    /// Find files whose name matches a wildcard pattern (* and ?)
    #[arg(short = 'f', long = "find", value_name = "PATTERN")]
    find: Option<String>,

    /// Make --find match case-sensitively (default is insensitive)
    #[arg(long = "case-sensitive", requires = "find")]
    case_sensitive: bool,

    /// Find files by extension (comma-separated, leading dot optional)
    #[arg(short = 'e', long = "ext", value_name = "EXTS", value_delimiter = ',')]
    ext: Vec<String>,

    /// Find files of at least this many megabytes
    #[arg(long = "larger-than", value_name = "MB")]
    larger_than: Option<f64>,

    /// Find system files (.exe, .dll, .sys) in the well-known system roots
    #[arg(long = "system-files")]
    system_files: bool,

    /// Largest-files window size for --stats
    #[arg(long = "top", value_name = "K", default_value = "3")]
    top: usize,

    /// Output reports in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    /// Whether any one-shot operation flag was given; without one the
    /// interactive menu runs.
    fn one_shot(&self) -> bool {
        self.list
            || self.stats
            || self.types.is_some()
            || self.find.is_some()
            || !self.ext.is_empty()
            || self.larger_than.is_some()
            || self.system_files
    }
}

fn main() {
    let args = Args::parse();
    let use_color = should_use_color(args.color);

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let result = if args.one_shot() {
        run_one_shot(&args, &root, use_color)
    } else {
        menu::run(root, use_color).map_err(Into::into)
    };

    if let Err(e) = result {
        eprintln!("dirscope: {e}");
        process::exit(1);
    }
}

/// Run the requested one-shot operations in a fixed order.
fn run_one_shot(args: &Args, root: &Path, use_color: bool) -> Result<(), Box<dyn std::error::Error>> {
    if args.list {
        let entries = list_dir(root)?;
        if args.json {
            print_json(&entries)?;
        } else {
            print_listing(&entries, use_color)?;
        }
    }

    if args.stats {
        let stats = collect_stats(root, args.top)?;
        if args.json {
            print_json(&stats)?;
        } else {
            print_stats(root, &stats, 5, use_color)?;
        }
    }

    if let Some(limit) = args.types {
        let types = extension_stats(root)?;
        let n = limit.unwrap_or(types.len());
        let shown = &types[..n.min(types.len())];
        if args.json {
            print_json(&shown)?;
        } else {
            print_types(shown, use_color)?;
        }
    }

    if let Some(pattern) = &args.find {
        let hits = find_by_pattern(root, pattern, args.case_sensitive)?;
        if args.json {
            print_json(&hits)?;
        } else {
            print_paths(&hits, "pattern", use_color)?;
        }
    }

    if !args.ext.is_empty() {
        let hits = find_by_extension(root, &args.ext)?;
        if args.json {
            print_json(&hits)?;
        } else {
            print_paths(&hits, "extensions", use_color)?;
        }
    }

    if let Some(min_mb) = args.larger_than {
        let hits = find_larger_than(root, min_mb)?;
        if args.json {
            print_json(&hits)?;
        } else {
            print_size_hits(&hits, use_color)?;
        }
    }

    if args.system_files {
        let hits = find_system_files(root);
        if args.json {
            print_json(&hits)?;
        } else {
            print_paths(&hits, "system", use_color)?;
        }
    }

    Ok(())
}
