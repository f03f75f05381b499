//! Directory tree enumeration for dirstride.
//!
//! This crate traverses a directory tree lazily using an explicit
//! stack of suspended directory scans instead of call-stack
//! recursion, holding at most one native directory handle open at
//! any time.
//!
//! # Overview
//!
//! - **Lazy**: records are materialized one pull at a time; nothing
//!   is buffered unless collected
//! - **Bounded resources**: one open directory handle, one stack
//!   frame per ancestor of the directory currently scanning
//! - **Silent failures**: a missing or unreadable directory
//!   contributes zero entries instead of an error
//! - **Count-only mode**: tallies files and directories without
//!   paying for record construction
//!
//! # Example
//!
//! ```rust,no_run
//! use dirstride_walk::{enumerate, SearchScope};
//!
//! let walk = enumerate("/var/log", "*.log", SearchScope::Recursive).unwrap();
//! for record in &walk {
//!     println!("{} ({} bytes)", record.path.display(), record.size);
//! }
//! ```

use std::path::PathBuf;

mod context;
mod find;
mod walker;

pub use walker::{TreeWalk, TreeWalker};

// Re-export core types for convenience
pub use dirstride_core::{
    FileRecord, Pattern, SearchScope, Timestamps, WalkCounts, WalkError, WalkOptions,
};

/// Build a restartable walk over `root`.
///
/// Inputs are validated before any directory is opened: an empty
/// root, an empty pattern, or a malformed glob is rejected with
/// [`WalkError::InvalidArgument`]. The root itself is not required
/// to exist; walking a missing or unreadable root yields nothing.
pub fn enumerate(
    root: impl Into<PathBuf>,
    pattern: &str,
    scope: SearchScope,
) -> Result<TreeWalk, WalkError> {
    let options = WalkOptions::builder()
        .root(root)
        .pattern(pattern)
        .scope(scope)
        .build()
        .map_err(|e| WalkError::invalid_argument(e.to_string()))?;
    TreeWalk::new(&options)
}

/// Walk to completion and collect every record in traversal order.
pub fn collect(
    root: impl Into<PathBuf>,
    pattern: &str,
    scope: SearchScope,
) -> Result<Vec<FileRecord>, WalkError> {
    Ok(enumerate(root, pattern, scope)?.iter().collect())
}

/// Count files and directories without materializing records.
pub fn count(
    root: impl Into<PathBuf>,
    pattern: &str,
    scope: SearchScope,
) -> Result<WalkCounts, WalkError> {
    Ok(enumerate(root, pattern, scope)?.iter().run_to_end())
}

/// Count only files.
pub fn file_count(
    root: impl Into<PathBuf>,
    pattern: &str,
    scope: SearchScope,
) -> Result<u64, WalkError> {
    Ok(count(root, pattern, scope)?.files)
}

/// Count only directories.
pub fn directory_count(
    root: impl Into<PathBuf>,
    pattern: &str,
    scope: SearchScope,
) -> Result<u64, WalkError> {
    Ok(count(root, pattern, scope)?.directories)
}
