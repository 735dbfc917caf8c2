use console::style;
use modstrip_core::{FileOutcome, InputKind, InputReport, ProcessedFileResult, RunSummary};
use std::path::{Path, PathBuf};

pub fn print_usage() {
    eprintln!(
        "{}",
        style("Error: no directory or file pattern given.").red()
    );
    eprintln!("Usage:");
    eprintln!("  modstrip ./build/          # directory, searched recursively");
    eprintln!("  modstrip './build/*.js'    # pattern, one directory only");
    eprintln!("  modstrip ./build ./dist    # several inputs");
}

/// Shows `path` relative to the working directory when it lives under it.
pub fn shown<'a>(path: &'a Path, cwd: &Path) -> std::path::Display<'a> {
    path.strip_prefix(cwd).unwrap_or(path).display()
}

pub fn print_input(report: &InputReport, cwd: &Path) {
    println!("\nProcessing {}...", style(&report.token).cyan());
    match report.kind {
        InputKind::Pattern => {
            println!("  -> file pattern");
            println!("  -> matched {} files", report.files.len());
            for (i, f) in report.files.iter().enumerate() {
                println!("    {}. {}", i + 1, style(shown(f, cwd)).dim());
            }
        }
        InputKind::Directory if report.files.is_empty() && !report.problems.is_empty() => {}
        InputKind::Directory => {
            println!("  -> directory (recursive)");
            println!("  -> found {} .js files", report.files.len());
        }
    }
    for p in &report.problems {
        eprintln!("  {} {}", style("Error:").red(), p);
    }
}

pub fn print_file_list<'a>(files: impl ExactSizeIterator<Item = &'a PathBuf>, cwd: &Path) {
    println!("\nCleaning {} .js files:", files.len());
    for (i, f) in files.enumerate() {
        println!("  {}. {}", i + 1, style(shown(f, cwd)).dim());
    }
    println!();
}

pub fn print_result(result: &ProcessedFileResult, cwd: &Path) {
    let p = shown(&result.path, cwd);
    match &result.outcome {
        FileOutcome::Cleaned {
            match_count,
            chars_removed,
        } => println!(
            "{} {} ({} {}, {} chars removed)",
            style("cleaned").green(),
            p,
            match_count,
            if *match_count == 1 { "match" } else { "matches" },
            chars_removed
        ),
        FileOutcome::Unchanged => println!("{} {}", style("unchanged").dim(), p),
        FileOutcome::Failed(e) => eprintln!(
            "{} {} - {}",
            style("failed").red(),
            style(p).dim(),
            style(e).red()
        ),
    }
}

pub fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Cleaned:       {} files", style(summary.cleaned).green());
    println!("  Unchanged:     {} files", summary.unchanged);
    println!("  Errors:        {} files", style(summary.failed).red());
    println!("  Total:         {} files", summary.total());
    println!("  Chars removed: {}", summary.chars_removed);
}
