//! Aggregate counts produced by a walk.

use serde::{Deserialize, Serialize};

/// Number of files and directories seen by a traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkCounts {
    /// Files matched and yielded (or tallied on the count-only path).
    pub files: u64,
    /// Directories discovered, whether or not they were descended into.
    pub directories: u64,
}

impl WalkCounts {
    /// Create zeroed counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally one file.
    pub fn record_file(&mut self) {
        self.files += 1;
    }

    /// Tally one directory.
    pub fn record_directory(&mut self) {
        self.directories += 1;
    }

    /// Total entries seen (files + directories).
    pub fn total(&self) -> u64 {
        self.files + self.directories
    }
}
