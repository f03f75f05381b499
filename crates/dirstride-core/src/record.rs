//! File record produced per yielded entry.

use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Local, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// File metadata timestamps, stored as UTC instants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timestamps {
    /// Creation time. Falls back to the modification time on
    /// platforms that do not report one.
    pub created: DateTime<Utc>,
    /// Last access time. Falls back to the modification time on
    /// platforms that do not report one.
    pub accessed: DateTime<Utc>,
    /// Last modification time.
    pub modified: DateTime<Utc>,
}

impl Timestamps {
    /// Create timestamps from explicit instants.
    pub fn new(created: DateTime<Utc>, accessed: DateTime<Utc>, modified: DateTime<Utc>) -> Self {
        Self {
            created,
            accessed,
            modified,
        }
    }

    /// Convert platform timestamps, substituting the modification
    /// time for anything the platform could not report.
    pub fn from_system(
        modified: SystemTime,
        accessed: Option<SystemTime>,
        created: Option<SystemTime>,
    ) -> Self {
        let modified = DateTime::<Utc>::from(modified);
        Self {
            created: created.map(DateTime::from).unwrap_or(modified),
            accessed: accessed.map(DateTime::from).unwrap_or(modified),
            modified,
        }
    }

    /// Timestamps pinned to the Unix epoch, used when metadata is
    /// unavailable.
    pub fn epoch() -> Self {
        Self {
            created: DateTime::UNIX_EPOCH,
            accessed: DateTime::UNIX_EPOCH,
            modified: DateTime::UNIX_EPOCH,
        }
    }

    /// Creation time in the local timezone.
    pub fn created_local(&self) -> DateTime<Local> {
        self.created.with_timezone(&Local)
    }

    /// Last access time in the local timezone.
    pub fn accessed_local(&self) -> DateTime<Local> {
        self.accessed.with_timezone(&Local)
    }

    /// Last modification time in the local timezone.
    pub fn modified_local(&self) -> DateTime<Local> {
        self.modified.with_timezone(&Local)
    }
}

/// A single file yielded by a walk.
///
/// Immutable after construction. `path` is always the owning
/// directory joined with `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// File name (not full path), lossily converted for display.
    pub name: CompactString,

    /// Full path of the file.
    pub path: PathBuf,

    /// Size in bytes.
    pub size: u64,

    /// Platform attribute bits (`st_mode` on Unix, file attribute
    /// flags on Windows).
    pub attributes: u32,

    /// File metadata timestamps.
    pub timestamps: Timestamps,
}

impl FileRecord {
    /// Create a new file record.
    pub fn new(
        name: impl Into<CompactString>,
        path: impl Into<PathBuf>,
        size: u64,
        attributes: u32,
        timestamps: Timestamps,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size,
            attributes,
            timestamps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = FileRecord::new(
            "notes.txt",
            "/data/notes.txt",
            1024,
            0o100644,
            Timestamps::epoch(),
        );
        assert_eq!(record.name.as_str(), "notes.txt");
        assert_eq!(record.path, PathBuf::from("/data/notes.txt"));
        assert_eq!(record.size, 1024);
        assert_eq!(record.attributes, 0o100644);
    }

    #[test]
    fn test_timestamps_fallback_to_modified() {
        let now = SystemTime::now();
        let timestamps = Timestamps::from_system(now, None, None);

        assert_eq!(timestamps.created, timestamps.modified);
        assert_eq!(timestamps.accessed, timestamps.modified);
    }

    #[test]
    fn test_timestamps_keep_distinct_values() {
        let now = SystemTime::now();
        let earlier = now - std::time::Duration::from_secs(3600);
        let timestamps = Timestamps::from_system(now, Some(earlier), Some(earlier));

        assert_ne!(timestamps.created, timestamps.modified);
        assert_eq!(timestamps.created, timestamps.accessed);
    }

    #[test]
    fn test_local_projection_same_instant() {
        let timestamps = Timestamps::from_system(SystemTime::now(), None, None);
        let local = timestamps.modified_local();

        assert_eq!(local.with_timezone(&Utc), timestamps.modified);
    }

    #[test]
    fn test_epoch_timestamps() {
        let timestamps = Timestamps::epoch();
        assert_eq!(timestamps.modified, DateTime::UNIX_EPOCH);
        assert_eq!(timestamps.created, timestamps.accessed);
    }
}
