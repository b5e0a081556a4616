use clap::ValueEnum;

pub const DEFAULT_KEEP_COUNT: usize = 14;
pub const DEFAULT_ARCHIVE_FOLDER: &str = "Old Screenshots";
pub const DEFAULT_PATTERN: &str = "Screenshot";

/// Which filesystem timestamp orders the matched entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimestampSource {
    #[default]
    Created,
    Modified,
}

/// What to do when a matched entry's timestamp cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnreadablePolicy {
    #[default]
    Abort,
    Skip,
}

/// Immutable settings for a single run.
#[derive(Debug, Clone)]
pub struct RetentionPolicy {
    pub keep_count: usize,
    pub archive_folder_name: String,
    pub timestamp_source: TimestampSource,
    pub on_unreadable: UnreadablePolicy,
    pub dry_run: bool,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            keep_count: DEFAULT_KEEP_COUNT,
            archive_folder_name: DEFAULT_ARCHIVE_FOLDER.to_string(),
            timestamp_source: TimestampSource::default(),
            on_unreadable: UnreadablePolicy::default(),
            dry_run: false,
        }
    }
}
