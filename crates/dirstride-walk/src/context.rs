//! Traversal stack frames.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// One frame of the traversal stack: a directory whose scan is
/// running, suspended, or finished.
///
/// The pending list is not allocated until the frame discovers its
/// first subdirectory, so leaf-heavy trees never pay for it.
#[derive(Debug)]
pub(crate) struct SearchContext {
    path: PathBuf,
    pending: Option<Vec<OsString>>,
    exhausted: bool,
}

impl SearchContext {
    /// Create a frame for a directory that has not been scanned yet.
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            pending: None,
            exhausted: false,
        }
    }

    /// Directory this frame scans.
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Remember a discovered subdirectory for later descent.
    pub(crate) fn push_pending(&mut self, name: OsString) {
        self.pending.get_or_insert_with(Vec::new).push(name);
    }

    /// Take the most recently discovered subdirectory, if any.
    pub(crate) fn pop_pending(&mut self) -> Option<OsString> {
        self.pending.as_mut()?.pop()
    }

    /// Mark this frame's scan as finished.
    pub(crate) fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }

    /// Whether this frame's scan already ran to the end.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
