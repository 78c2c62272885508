//! Interactive console menu
//!
//! Thin I/O glue over the library: a banner, a command loop, a search
//! submenu, and navigation state. All analysis work happens in the core
//! modules; this file only prompts and dispatches.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::entry::list_dir;
use crate::paths::{self, parent_path};
use crate::platform;
use crate::report;
use crate::search;
use crate::stats;

/// Extension buckets shown in the statistics report.
const TOP_TYPES: usize = 5;

/// Largest-files window size for the statistics report.
const TOP_LARGEST: usize = 3;

/// Run the interactive menu until the user quits or stdin closes.
pub fn run(start: PathBuf, use_color: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut current = start;

    print_banner(&current)?;

    loop {
        print_main_menu(&current)?;
        let Some(choice) = prompt(&mut input, "Choose a command: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => show_listing(&current, use_color),
            "2" => show_stats(&current, use_color)?,
            "3" => search_menu(&mut input, &current, use_color)?,
            "4" => show_types(&current, use_color)?,
            "5" => current = parent_path(&current),
            "6" => {
                if let Some(next) = move_down(&mut input, &current)? {
                    current = next;
                }
            }
            "7" => {
                if let Some(next) = choose_from(&mut input, "Available roots:", root_choices())? {
                    current = next;
                }
            }
            "8" => {
                if let Some(next) =
                    choose_from(&mut input, "Special folders:", paths::special_folders())?
                {
                    current = next;
                }
            }
            "0" => break,
            _ => println!("Unknown command."),
        }
    }

    println!("Bye.");
    Ok(())
}

fn print_banner(current: &Path) -> io::Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", "-".repeat(72))?;
    writeln!(stdout, "{:^72}", "DIRSCOPE")?;
    writeln!(stdout, "{}", "-".repeat(72))?;

    let roots: Vec<String> = platform::available_roots()
        .iter()
        .map(|r| r.display().to_string())
        .collect();
    writeln!(stdout, "Available roots: {}", roots.join(", "))?;
    writeln!(stdout, "Current path: {}", current.display())?;

    let folders = paths::special_folders();
    if !folders.is_empty() {
        writeln!(stdout, "\nSpecial folders:")?;
        for (name, path) in folders {
            writeln!(stdout, "  {name}: {}", path.display())?;
        }
    }
    writeln!(stdout, "{}", "-".repeat(72))?;
    Ok(())
}

fn print_main_menu(current: &Path) -> io::Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "\nCurrent directory: {}", current.display())?;
    writeln!(stdout, "  1. List directory contents")?;
    writeln!(stdout, "  2. Directory statistics")?;
    writeln!(stdout, "  3. Search files")?;
    writeln!(stdout, "  4. File type analysis")?;
    writeln!(stdout, "  5. Go to parent directory")?;
    writeln!(stdout, "  6. Enter subdirectory")?;
    writeln!(stdout, "  7. Change root")?;
    writeln!(stdout, "  8. Go to special folder")?;
    writeln!(stdout, "  0. Quit")?;
    Ok(())
}

/// Print a prompt and read one trimmed line; None at end of input.
fn prompt(input: &mut impl BufRead, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn show_listing(current: &Path, use_color: bool) {
    match list_dir(current) {
        Ok(entries) => {
            if let Err(e) = report::print_listing(&entries, use_color) {
                eprintln!("dirscope: {e}");
            }
        }
        Err(e) => eprintln!("dirscope: {e}"),
    }
}

fn show_stats(current: &Path, use_color: bool) -> io::Result<()> {
    match stats::collect_stats(current, TOP_LARGEST) {
        Ok(stats) => report::print_stats(current, &stats, TOP_TYPES, use_color),
        Err(e) => {
            eprintln!("dirscope: {e}");
            Ok(())
        }
    }
}

fn show_types(current: &Path, use_color: bool) -> io::Result<()> {
    match stats::extension_stats(current) {
        Ok(types) => report::print_types(&types, use_color),
        Err(e) => {
            eprintln!("dirscope: {e}");
            Ok(())
        }
    }
}

fn search_menu(input: &mut impl BufRead, current: &Path, use_color: bool) -> io::Result<()> {
    println!("\nSearch in: {}", current.display());
    println!("  1. By wildcard pattern (*, ?)");
    println!("  2. By extensions");
    println!("  3. By minimum size");
    println!("  4. System files");
    println!("  0. Back");

    let Some(choice) = prompt(input, "Choose a search: ")? else {
        return Ok(());
    };

    match choice.as_str() {
        "1" => {
            let Some(pattern) = prompt(input, "Pattern (e.g. *.txt): ")? else {
                return Ok(());
            };
            let Some(case) = prompt(input, "Case sensitive? (y/N): ")? else {
                return Ok(());
            };
            let case_sensitive = case.eq_ignore_ascii_case("y");
            match search::find_by_pattern(current, &pattern, case_sensitive) {
                Ok(hits) => report::print_paths(&hits, "pattern", use_color)?,
                Err(e) => eprintln!("dirscope: {e}"),
            }
        }
        "2" => {
            let Some(raw) = prompt(input, "Extensions, comma separated (exe, .dll): ")? else {
                return Ok(());
            };
            let extensions: Vec<String> = raw.split(',').map(|s| s.to_string()).collect();
            match search::find_by_extension(current, &extensions) {
                Ok(hits) => report::print_paths(&hits, "extensions", use_color)?,
                Err(e) => eprintln!("dirscope: {e}"),
            }
        }
        "3" => {
            let Some(raw) = prompt(input, "Minimum size (MB): ")? else {
                return Ok(());
            };
            match raw.replace(',', ".").parse::<f64>() {
                Ok(min_mb) => match search::find_larger_than(current, min_mb) {
                    Ok(hits) => report::print_size_hits(&hits, use_color)?,
                    Err(e) => eprintln!("dirscope: {e}"),
                },
                Err(_) => println!("Not a number: {raw}"),
            }
        }
        "4" => {
            let hits = search::find_system_files(current);
            report::print_paths(&hits, "system", use_color)?;
        }
        "0" => {}
        _ => println!("Unknown search."),
    }
    Ok(())
}

fn move_down(input: &mut impl BufRead, current: &Path) -> io::Result<Option<PathBuf>> {
    let Some(name) = prompt(input, "Subdirectory name: ")? else {
        return Ok(None);
    };
    if name.is_empty() {
        return Ok(None);
    }
    if let Err(e) = paths::validate_component(&name) {
        println!("{e}");
        return Ok(None);
    }
    let next = current.join(&name);
    if next.is_dir() {
        Ok(Some(next))
    } else {
        println!("No such subdirectory: {name}");
        Ok(None)
    }
}

fn root_choices() -> Vec<(String, PathBuf)> {
    platform::available_roots()
        .into_iter()
        .map(|root| (root.display().to_string(), root))
        .collect()
}

/// Show a numbered list and return the chosen path, if any.
fn choose_from(
    input: &mut impl BufRead,
    title: &str,
    mut choices: Vec<(String, PathBuf)>,
) -> io::Result<Option<PathBuf>> {
    if choices.is_empty() {
        println!("Nothing available.");
        return Ok(None);
    }
    println!("{title}");
    for (i, (name, path)) in choices.iter().enumerate() {
        println!("  {}. {name} ({})", i + 1, path.display());
    }
    let Some(raw) = prompt(input, "Choose a number: ")? else {
        return Ok(None);
    };
    match raw.parse::<usize>() {
        Ok(n) if (1..=choices.len()).contains(&n) => Ok(Some(choices.remove(n - 1).1)),
        _ => {
            println!("Invalid choice.");
            Ok(None)
        }
    }
}
