mod archiver;
mod config;
mod error;
mod naming;
mod paths;
mod report;
mod scanner;
mod types;

use archiver::Archiver;
use clap::Parser;
use colored::Colorize;
use config::{RetentionPolicy, TimestampSource, UnreadablePolicy};
use naming::ContainsPattern;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Move old screenshots off the desktop", long_about = None)]
struct Args {
    /// Number of newest screenshots to leave on the desktop
    #[arg(long, short = 'k', default_value_t = config::DEFAULT_KEEP_COUNT)]
    keep_count: usize,

    /// Name of the archive folder, created under the archive parent
    #[arg(long, default_value = config::DEFAULT_ARCHIVE_FOLDER)]
    archive_folder: String,

    /// Directory to clean (defaults to the desktop)
    #[arg(long, value_name = "DIR")]
    source_dir: Option<PathBuf>,

    /// Directory holding the archive folder (defaults to the home directory)
    #[arg(long, value_name = "DIR")]
    archive_parent: Option<PathBuf>,

    /// Substring a file name must contain to be considered
    #[arg(long, default_value = config::DEFAULT_PATTERN)]
    pattern: String,

    /// Timestamp used to decide which files are oldest
    #[arg(long, value_enum, default_value_t = TimestampSource::Created)]
    timestamp: TimestampSource,

    /// Skip files whose timestamp cannot be read instead of aborting
    #[arg(long)]
    skip_unreadable: bool,

    /// Show what would be moved without touching anything
    #[arg(long, short = 'n')]
    dry_run: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    println!("Desktop Cleanup v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args) {
        eprintln!("{} {e}", "Error:".red());
        std::process::exit(1);
    }
}

fn run(args: Args) -> error::Result<()> {
    let scope = report::Scope::new(&args.pattern, args.source_dir.as_deref());
    let source_dir = match args.source_dir {
        Some(dir) => dir,
        None => paths::desktop_dir()?,
    };
    let archive_parent = match args.archive_parent {
        Some(dir) => dir,
        None => paths::home_dir()?,
    };

    let policy = RetentionPolicy {
        keep_count: args.keep_count,
        archive_folder_name: args.archive_folder,
        timestamp_source: args.timestamp,
        on_unreadable: if args.skip_unreadable {
            UnreadablePolicy::Skip
        } else {
            UnreadablePolicy::Abort
        },
        dry_run: args.dry_run,
    };
    log::debug!(
        "Cleaning {} into {} with {:?}",
        source_dir.display(),
        archive_parent.display(),
        policy
    );

    let archiver = Archiver::new(policy, ContainsPattern::new(args.pattern));
    let report = archiver.run(&source_dir, &archive_parent)?;
    report::print_report(&report, &scope);
    log::info!(
        "Archived {} of {} matched entries",
        report.archived_count(),
        report.matched_count
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["desktop_cleanup"]);
        assert_eq!(args.keep_count, 14);
        assert_eq!(args.archive_folder, "Old Screenshots");
        assert_eq!(args.pattern, "Screenshot");
        assert_eq!(args.timestamp, TimestampSource::Created);
        assert!(args.source_dir.is_none());
        assert!(!args.dry_run);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "desktop_cleanup",
            "-k",
            "3",
            "--archive-folder",
            "Archive",
            "--timestamp",
            "modified",
            "--skip-unreadable",
            "-vv",
        ]);
        assert_eq!(args.keep_count, 3);
        assert_eq!(args.archive_folder, "Archive");
        assert_eq!(args.timestamp, TimestampSource::Modified);
        assert!(args.skip_unreadable);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_negative_keep_count_rejected() {
        assert!(Args::try_parse_from(["desktop_cleanup", "-k", "-1"]).is_err());
    }
}
