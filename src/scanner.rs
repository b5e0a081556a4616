use crate::config::TimestampSource;
use crate::error::{CleanupError, Result};
use chrono::{DateTime, Local};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A directory entry before its metadata has been read.
///
/// `file_name` is the name on disk; `name` is its lossy UTF-8 form for matching and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub name: String,
    pub file_name: OsString,
    pub path: PathBuf,
}

/// Fails with `DirectoryUnavailable` unless `path` is an existing directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(m) if m.is_dir() => Ok(()),
        Ok(_) => Err(CleanupError::unavailable(path, "not a directory")),
        Err(e) => Err(CleanupError::unavailable(path, e.to_string())),
    }
}

/// Lists the immediate children of `dir`, files and directories alike, sorted by name.
pub fn list_entries(dir: &Path) -> Result<Vec<Listing>> {
    ensure_directory(dir)?;

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            let entry = entry.map_err(|e| CleanupError::unavailable(dir, e.to_string()))?;
            Ok(Listing {
                name: entry.file_name().to_string_lossy().to_string(),
                file_name: entry.file_name().to_os_string(),
                path: entry.path().to_path_buf(),
            })
        })
        .collect()
}

/// Reads the ordering timestamp of `path`, following symlinks.
pub fn read_timestamp(path: &Path, source: TimestampSource) -> io::Result<DateTime<Local>> {
    let metadata = fs::metadata(path)?;
    let time = match source {
        TimestampSource::Created => metadata.created()?,
        TimestampSource::Modified => metadata.modified()?,
    };
    Ok(time.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn test_list_entries_is_flat_and_sorted() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("b.png")).unwrap();
        File::create(dir.path().join("a.png")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested").join("Screenshot.png")).unwrap();

        let names: Vec<_> = list_entries(dir.path())
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "nested"]);
    }

    #[test]
    fn test_list_entries_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = list_entries(&missing).unwrap_err();
        assert!(matches!(err, CleanupError::DirectoryUnavailable { ref path, .. } if *path == missing));
    }

    #[test]
    fn test_ensure_directory_rejects_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        File::create(&file).unwrap();

        assert!(matches!(
            ensure_directory(&file),
            Err(CleanupError::DirectoryUnavailable { .. })
        ));
    }

    #[test]
    fn test_read_modified_timestamp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Screenshot.png");
        let file = File::create(&path).unwrap();
        let when = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        file.set_modified(when).unwrap();

        let ts = read_timestamp(&path, TimestampSource::Modified).unwrap();
        assert_eq!(ts, DateTime::<Local>::from(when));
    }

    #[test]
    fn test_read_timestamp_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_timestamp(&dir.path().join("gone.png"), TimestampSource::Modified)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
