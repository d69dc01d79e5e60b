//! Report formatting and printing utilities.
//!
//! Command handlers return summaries; this module turns them into terminal output.
//! Primary output (keys, echo JSON, detected codes) goes to stdout, status lines
//! and warnings to stderr, so stdout can be piped.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::args::ExtractFormat;
use super::commands::{
    CommandResult, CommandSummary, ExtractSummary, InitSummary, LangsSummary, MaterializeSummary,
    MergeSummary, SheetSummary,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout/stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, verbose, out, err),
        CommandSummary::Langs(summary) => print_langs(summary, out, err),
        CommandSummary::Sheet(summary) => print_sheet(summary, verbose, out, err),
        CommandSummary::Materialize(summary) => print_materialize(summary, verbose, err),
        CommandSummary::Merge(summary) => print_merge(summary, verbose, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

/// Spreadsheet column name for a zero-based index (0 → A, 26 → AA).
pub fn column_name(index: usize) -> String {
    let mut name = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}

// ============================================================
// Internal Functions
// ============================================================

fn print_saved<E: Write>(err: &mut E, what: String) {
    let _ = writeln!(err, "{} {}", SUCCESS_MARK.green(), what.green());
}

fn print_warning<E: Write>(err: &mut E, message: &str) {
    let _ = writeln!(err, "{} {}", "warning:".bold().yellow(), message);
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn print_extract<O: Write, E: Write>(
    summary: &ExtractSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    if verbose {
        for file in &summary.files {
            let _ = writeln!(err, "  {} {}", "read".dimmed(), file.display());
        }
        if let Some(kind) = summary.kind {
            let _ = writeln!(err, "  {} {}", "kind".dimmed(), kind.as_str());
        }
    }

    match &summary.output {
        Some(path) => print_saved(
            err,
            format!(
                "Saved: {} ({})",
                path.display(),
                plural(summary.keys.len(), "key", "keys")
            ),
        ),
        None => match (&summary.format, &summary.echo) {
            (ExtractFormat::Json, Some(echo)) => {
                let _ = writeln!(out, "{}", echo);
            }
            _ => {
                for key in &summary.keys {
                    let _ = writeln!(out, "{}", key);
                }
            }
        },
    }

    if summary.keys.is_empty() {
        print_warning(err, "no translatable strings found");
    }
}

fn print_codes<O: Write>(codes: &[String], out: &mut O) {
    let _ = writeln!(out, "Detected language codes:");
    for code in codes {
        let _ = writeln!(out, "{}", code);
    }
}

fn print_langs<O: Write, E: Write>(summary: &LangsSummary, out: &mut O, err: &mut E) {
    if summary.codes.is_empty() {
        print_warning(err, "no language codes detected");
        return;
    }
    print_codes(&summary.codes, out);
}

fn print_sheet<O: Write, E: Write>(
    summary: &SheetSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    if summary.codes.is_empty() {
        print_warning(err, "no language codes detected, spreadsheet not written");
        return;
    }
    print_codes(&summary.codes, out);

    if verbose && !summary.targets.is_empty() {
        let width = summary.targets.iter().map(|c| c.width()).max().unwrap_or(0);
        for (i, code) in summary.targets.iter().enumerate() {
            let padding = " ".repeat(width - code.width());
            let _ = writeln!(
                err,
                "  {}{}  {} {}",
                code.cyan(),
                padding,
                "column".dimmed(),
                column_name(i + 2)
            );
        }
    }

    if let Some(path) = &summary.output {
        print_saved(
            err,
            format!(
                "Saved: {} ({}, {})",
                path.display(),
                plural(summary.key_count, "key", "keys"),
                plural(summary.targets.len(), "language", "languages")
            ),
        );
    }
}

fn print_materialize<E: Write>(summary: &MaterializeSummary, verbose: bool, err: &mut E) {
    if verbose {
        for path in &summary.written {
            let _ = writeln!(err, "  {} {}", "wrote".dimmed(), path.display());
        }
    }
    print_saved(
        err,
        format!(
            "Exported {} to: {}",
            plural(summary.written.len(), "file", "files"),
            summary.out_dir.display()
        ),
    );
}

fn print_merge<E: Write>(summary: &MergeSummary, verbose: bool, err: &mut E) {
    if summary.merged.is_empty() {
        print_warning(err, "no files to merge in the old folder");
        return;
    }

    if verbose {
        for file in &summary.merged {
            let _ = writeln!(
                err,
                "  {} {} ({} kept, {} added)",
                "merged".dimmed(),
                file.file_name,
                file.kept_count,
                file.added_count
            );
            if file.old_degraded {
                let _ = writeln!(
                    err,
                    "    {} old file unreadable, treated as empty",
                    "note:".cyan()
                );
            }
            if file.new_degraded {
                let _ = writeln!(
                    err,
                    "    {} new file missing or unreadable, treated as empty",
                    "note:".cyan()
                );
            }
        }
    }

    print_saved(
        err,
        format!(
            "Merged {} into: {}",
            plural(summary.merged.len(), "file", "files"),
            summary.out_dir.display()
        ),
    );
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else if let Some(error) = &summary.error {
        let _ = writeln!(err, "{} {}", FAILURE_MARK.red(), error.red());
    }
}
