use crate::config::DEFAULT_PATTERN;
use crate::types::{ArchivedEntry, Report};
use colored::Colorize;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// What was scanned, in words: "screenshots" "on the desktop" by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub noun: String,
    pub place: String,
}

impl Scope {
    pub fn new(pattern: &str, source_dir: Option<&Path>) -> Self {
        let noun = if pattern == DEFAULT_PATTERN {
            "screenshots".to_string()
        } else {
            format!("entries matching '{pattern}'")
        };
        let place = match source_dir {
            Some(dir) => format!("in {}", dir.display()),
            None => "on the desktop".to_string(),
        };
        Self { noun, place }
    }
}

#[must_use]
pub fn summary_line(report: &Report, scope: &Scope) -> String {
    let Scope { noun, place } = scope;
    match &report.archive_folder {
        Some(folder) if report.dry_run => format!(
            "Found {} {noun} {place}. Would move oldest {noun} to {}",
            report.matched_count,
            folder.display()
        ),
        Some(folder) => format!(
            "Found {} {noun} {place}. Moving oldest {noun} to {}",
            report.matched_count,
            folder.display()
        ),
        None => format!(
            "Found {} {noun} {place}. Nothing to do.",
            report.matched_count
        ),
    }
}

/// `"<index>. <name> - <timestamp>"`, index starting at 1.
#[must_use]
pub fn entry_line(index: usize, entry: &ArchivedEntry) -> String {
    format!(
        "{}. {} - {}",
        index,
        entry.name,
        entry.created_at.format(TIMESTAMP_FORMAT)
    )
}

pub fn print_report(report: &Report, scope: &Scope) {
    let summary = summary_line(report, scope);
    if report.archived.is_empty() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.cyan());
    }

    for (i, entry) in report.archived.iter().enumerate() {
        println!("{}", entry_line(i + 1, entry));
    }

    for name in &report.skipped {
        println!("{} {} (timestamp unreadable)", "Skipped:".yellow(), name);
    }
}
