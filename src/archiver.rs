use crate::config::{RetentionPolicy, UnreadablePolicy};
use crate::error::{CleanupError, Result};
use crate::naming::NamingPolicy;
use crate::scanner::{self, Listing};
use crate::types::{ArchivedEntry, FileEntry, Report};
use log::{debug, info, warn};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path};

/// Moves the oldest matched entries of a directory into an archive folder.
///
/// Holds no state between runs; every call to [`Archiver::run`] rescans the source.
pub struct Archiver<N: NamingPolicy> {
    policy: RetentionPolicy,
    naming: N,
}

impl<N: NamingPolicy> Archiver<N> {
    pub fn new(policy: RetentionPolicy, naming: N) -> Self {
        Self { policy, naming }
    }

    /// Performs one cleanup pass.
    ///
    /// Aborts on the first error. Moves completed before a failure stay where they are.
    pub fn run(&self, source_dir: &Path, archive_parent_dir: &Path) -> Result<Report> {
        scanner::ensure_directory(archive_parent_dir)?;
        let listing = scanner::list_entries(source_dir)?;

        let archive_folder = archive_parent_dir.join(&self.policy.archive_folder_name);
        let archive_root =
            archive_root_in(source_dir, archive_parent_dir, &self.policy.archive_folder_name)?;

        // The archive folder may itself live in the source directory and match.
        let matched: Vec<Listing> = listing
            .into_iter()
            .filter(|l| {
                self.naming.matches(&l.name) && archive_root.as_ref() != Some(&l.file_name)
            })
            .collect();
        let matched_count = matched.len();
        debug!(
            "{} of the entries in {} match",
            matched_count,
            source_dir.display()
        );

        let mut report = Report {
            matched_count,
            dry_run: self.policy.dry_run,
            ..Report::default()
        };

        if matched_count <= self.policy.keep_count {
            debug!(
                "{} matched <= keep count {}, nothing to do",
                matched_count, self.policy.keep_count
            );
            return Ok(report);
        }

        let mut entries = self.read_entries(matched, &mut report)?;
        if entries.len() <= self.policy.keep_count {
            return Ok(report);
        }

        // Stable: equal timestamps keep listing order.
        entries.sort_by_key(|e| e.created_at);
        let excess = entries.len() - self.policy.keep_count;
        entries.truncate(excess);
        debug!("{} entries selected for archiving", entries.len());

        report.archive_folder = Some(archive_folder.clone());
        if !self.policy.dry_run {
            create_archive_folder(&archive_folder)?;
        }

        for entry in entries {
            let destination = archive_folder.join(&entry.file_name);
            if destination.symlink_metadata().is_ok() {
                return Err(CleanupError::DestinationCollision {
                    name: entry.name,
                    destination,
                });
            }

            if !self.policy.dry_run {
                move_entry(&entry.path, &destination).map_err(|source| {
                    CleanupError::MoveFailed {
                        name: entry.name.clone(),
                        source,
                    }
                })?;
                info!("Moved {} to {}", entry.name, destination.display());
            }

            report.archived.push(ArchivedEntry {
                name: entry.name,
                created_at: entry.created_at,
                destination,
            });
        }

        Ok(report)
    }

    fn read_entries(&self, matched: Vec<Listing>, report: &mut Report) -> Result<Vec<FileEntry>> {
        let mut entries = Vec::with_capacity(matched.len());
        for Listing {
            name,
            file_name,
            path,
        } in matched
        {
            match scanner::read_timestamp(&path, self.policy.timestamp_source) {
                Ok(created_at) => entries.push(FileEntry {
                    name,
                    file_name,
                    path,
                    created_at,
                }),
                Err(source) => match self.policy.on_unreadable {
                    UnreadablePolicy::Abort => {
                        return Err(CleanupError::MetadataUnavailable { name, source });
                    }
                    UnreadablePolicy::Skip => {
                        warn!("Skipping {name}: {source}");
                        report.skipped.push(name);
                    }
                },
            }
        }
        Ok(entries)
    }
}

/// Name of the child of `source_dir` that holds the archive folder, if the archive
/// folder sits anywhere below `source_dir`.
fn archive_root_in(
    source_dir: &Path,
    archive_parent_dir: &Path,
    archive_folder_name: &str,
) -> Result<Option<OsString>> {
    let canonical = |path: &Path| {
        fs::canonicalize(path).map_err(|e| CleanupError::unavailable(path, e.to_string()))
    };
    let source = canonical(source_dir)?;
    let folder = canonical(archive_parent_dir)?.join(archive_folder_name);

    Ok(match folder.strip_prefix(&source) {
        Ok(rest) => match rest.components().next() {
            Some(Component::Normal(name)) => Some(name.to_os_string()),
            _ => None,
        },
        Err(_) => None,
    })
}

fn create_archive_folder(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| CleanupError::ArchiveCreationFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Created archive folder {}", path.display());
    Ok(())
}

/// Renames `from` to `to`, copying regular files when they sit on another device.
fn move_entry(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices && from.is_file() => {
            debug!("{} is on another device, copying", from.display());
            copy_then_remove(from, to)
        }
        other => other,
    }
}

/// A failed copy leaves nothing at `to`, so a later run does not see a collision.
fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    if let Err(e) = fs::copy(from, to) {
        fs::remove_file(to).ok();
        return Err(e);
    }
    fs::remove_file(from)
}
