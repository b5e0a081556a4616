use chrono::{DateTime, Local};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub file_name: OsString,
    pub path: PathBuf,
    pub created_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArchivedEntry {
    pub name: String,
    pub created_at: DateTime<Local>,
    pub destination: PathBuf,
}

/// Outcome of one cleanup pass. `archived` is in move order (oldest first).
#[derive(Debug, Default)]
pub struct Report {
    pub matched_count: usize,
    pub archived: Vec<ArchivedEntry>,
    pub skipped: Vec<String>,
    pub archive_folder: Option<PathBuf>,
    pub dry_run: bool,
}

impl Report {
    #[must_use]
    pub fn archived_count(&self) -> usize {
        self.archived.len()
    }
}
