use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a cleanup run.
#[derive(Debug, Error)]
pub enum CleanupError {
    /// Source or archive parent directory is missing, unreadable, or could not be resolved.
    #[error("directory unavailable: {path}: {reason}")]
    DirectoryUnavailable { path: PathBuf, reason: String },

    /// The archive folder could not be created.
    #[error("failed to create archive folder {path}: {source}")]
    ArchiveCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Timestamp metadata could not be read for a matched entry.
    #[error("cannot read timestamp of '{name}': {source}")]
    MetadataUnavailable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// An entry with the same name already sits in the archive folder.
    #[error("'{name}' already exists at {destination}")]
    DestinationCollision { name: String, destination: PathBuf },

    /// The move itself failed.
    #[error("failed to move '{name}': {source}")]
    MoveFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CleanupError>;

impl CleanupError {
    pub fn unavailable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::DirectoryUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
