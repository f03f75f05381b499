//! Native directory search handle.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use compact_str::CompactString;
use tracing::debug;

use dirstride_core::{FileRecord, Pattern, Timestamps};

/// One open directory scan.
///
/// Wraps the platform directory stream; the underlying handle is
/// released when the value is dropped. `.` and `..` are never
/// reported by the stream.
#[derive(Debug)]
pub(crate) struct DirSearch {
    dir: PathBuf,
    handle: fs::ReadDir,
}

impl DirSearch {
    /// Open a scan over `dir`.
    ///
    /// Open failure is silent: `None` means the directory contributes
    /// zero entries, whether it is missing, unreadable, or not a
    /// directory at all.
    pub(crate) fn open(dir: &Path) -> Option<Self> {
        match fs::read_dir(dir) {
            Ok(handle) => Some(Self {
                dir: dir.to_path_buf(),
                handle,
            }),
            Err(error) => {
                debug!("cannot open {}: {error}", dir.display());
                None
            }
        }
    }

    /// Next entry whose name matches `pattern`, or `None` when the
    /// scan is exhausted. A read error truncates the scan.
    pub(crate) fn next_match(&mut self, pattern: &Pattern) -> Option<ScanEntry> {
        loop {
            let entry = match self.handle.next()? {
                Ok(entry) => entry,
                Err(error) => {
                    debug!("read error in {}: {error}", self.dir.display());
                    return None;
                }
            };

            let name = entry.file_name();
            if !pattern.matches(&name) {
                continue;
            }

            let is_dir = match entry.file_type() {
                Ok(file_type) => file_type.is_dir(),
                Err(error) => {
                    // Entry vanished between readdir and classification.
                    debug!("cannot classify {}: {error}", entry.path().display());
                    continue;
                }
            };

            return Some(ScanEntry {
                name,
                is_dir,
                entry,
            });
        }
    }
}

/// One matching entry reported by a scan.
///
/// Carries the deferred metadata handle so a record is only built
/// when the entry is actually yielded.
#[derive(Debug)]
pub(crate) struct ScanEntry {
    pub(crate) name: OsString,
    pub(crate) is_dir: bool,
    entry: fs::DirEntry,
}

impl ScanEntry {
    /// Materialize a file record, paying the metadata lookup.
    ///
    /// If the entry vanished since the scan reported it, the record
    /// is produced with zeroed size and attributes and epoch
    /// timestamps so counting stays consistent with enumeration.
    pub(crate) fn into_record(self) -> FileRecord {
        let path = self.entry.path();
        let name = CompactString::new(self.name.to_string_lossy());

        match self.entry.metadata() {
            Ok(metadata) => {
                let timestamps = Timestamps::from_system(
                    metadata.modified().unwrap_or(std::time::UNIX_EPOCH),
                    metadata.accessed().ok(),
                    metadata.created().ok(),
                );
                let attributes = get_attributes(&metadata);
                FileRecord::new(name, path, metadata.len(), attributes, timestamps)
            }
            Err(error) => {
                debug!("cannot stat {}: {error}", path.display());
                FileRecord::new(name, path, 0, 0, Timestamps::epoch())
            }
        }
    }
}

// Cross-platform attribute helpers

/// Get the platform attribute bits from metadata.
#[cfg(unix)]
fn get_attributes(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    metadata.mode()
}

#[cfg(windows)]
fn get_attributes(metadata: &fs::Metadata) -> u32 {
    use std::os::windows::fs::MetadataExt;
    metadata.file_attributes()
}

#[cfg(not(any(unix, windows)))]
fn get_attributes(_metadata: &fs::Metadata) -> u32 {
    0
}
