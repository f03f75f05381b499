//! Explicit-stack depth-first walker.

use std::path::{Path, PathBuf};

use tracing::trace;

use dirstride_core::{FileRecord, Pattern, SearchScope, WalkCounts, WalkError, WalkOptions};

use crate::context::SearchContext;
use crate::find::DirSearch;

/// Traversal phase of a walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NotStarted,
    Scanning,
    Descending,
    Ascending,
    Done,
}

/// Pull-based depth-first walker over a directory tree.
///
/// Holds at most one open directory handle at any time: the handle of
/// the frame currently scanning. A frame's handle is closed the
/// moment its scan is exhausted, before any descent opens the next
/// one, and resumed parents are never reopened. Dropping the walker
/// mid-traversal releases the handle the same way.
#[derive(Debug)]
pub struct TreeWalker {
    root: PathBuf,
    pattern: Pattern,
    scope: SearchScope,
    current: SearchContext,
    suspended: Vec<SearchContext>,
    search: Option<DirSearch>,
    counts: WalkCounts,
    phase: Phase,
}

impl TreeWalker {
    pub(crate) fn new(root: PathBuf, pattern: Pattern, scope: SearchScope) -> Self {
        Self {
            current: SearchContext::new(root.clone()),
            root,
            pattern,
            scope,
            suspended: Vec::new(),
            search: None,
            counts: WalkCounts::new(),
            phase: Phase::NotStarted,
        }
    }

    /// Files and directories seen so far.
    ///
    /// Valid at any point during traversal; once the walker is
    /// exhausted this is the final tally.
    pub fn counts(&self) -> WalkCounts {
        self.counts
    }

    /// Rewind to the initial state, discarding all progress.
    ///
    /// The next pull starts a fresh traversal from the root.
    pub fn reset(&mut self) {
        self.search = None;
        self.suspended.clear();
        self.current = SearchContext::new(self.root.clone());
        self.counts = WalkCounts::new();
        self.phase = Phase::NotStarted;
    }

    /// Drive the traversal to completion without materializing
    /// records and return the final counts.
    ///
    /// Files are tallied as they are matched but no metadata is read
    /// and no record is built, so this costs one directory scan per
    /// directory and nothing per file.
    pub fn run_to_end(mut self) -> WalkCounts {
        while self.advance(false).is_some() {}
        self.counts
    }

    /// Advance the state machine until a file is yielded (when
    /// `materialize` is set) or the traversal finishes.
    fn advance(&mut self, materialize: bool) -> Option<FileRecord> {
        loop {
            match self.phase {
                Phase::NotStarted => {
                    self.open_current();
                    self.phase = Phase::Scanning;
                }
                Phase::Scanning => {
                    if self.current.is_exhausted() {
                        // Resumed parent or failed open: straight to
                        // the pending descents.
                        self.phase = Phase::Descending;
                        continue;
                    }
                    let next = self
                        .search
                        .as_mut()
                        .and_then(|search| search.next_match(&self.pattern));
                    match next {
                        Some(entry) if entry.is_dir => {
                            self.counts.record_directory();
                            if self.scope.is_recursive() {
                                self.current.push_pending(entry.name);
                            }
                        }
                        Some(entry) => {
                            self.counts.record_file();
                            if materialize {
                                return Some(entry.into_record());
                            }
                        }
                        None => {
                            self.current.mark_exhausted();
                            // Close this frame's handle before any
                            // descent opens the next one.
                            self.search = None;
                            self.phase = Phase::Descending;
                        }
                    }
                }
                Phase::Descending => match self.current.pop_pending() {
                    Some(name) => {
                        let child = self.current.path().join(&name);
                        trace!("descending into {}", child.display());
                        let parent =
                            std::mem::replace(&mut self.current, SearchContext::new(child));
                        self.suspended.push(parent);
                        self.open_current();
                        self.phase = Phase::Scanning;
                    }
                    None => {
                        self.phase = Phase::Ascending;
                    }
                },
                Phase::Ascending => match self.suspended.pop() {
                    Some(parent) => {
                        self.current = parent;
                        self.phase = Phase::Scanning;
                    }
                    None => {
                        self.phase = Phase::Done;
                    }
                },
                Phase::Done => return None,
            }
        }
    }

    /// Open the scan for the current frame, or mark it exhausted if
    /// the directory cannot be opened.
    fn open_current(&mut self) {
        match DirSearch::open(self.current.path()) {
            Some(search) => self.search = Some(search),
            None => self.current.mark_exhausted(),
        }
    }
}

impl Iterator for TreeWalker {
    type Item = FileRecord;

    fn next(&mut self) -> Option<FileRecord> {
        self.advance(true)
    }
}

/// A restartable walk: validated inputs plus the compiled pattern.
///
/// Each [`TreeWalk::iter`] call starts an independent traversal;
/// walkers share no mutable state.
#[derive(Debug, Clone)]
pub struct TreeWalk {
    root: PathBuf,
    pattern: Pattern,
    scope: SearchScope,
}

impl TreeWalk {
    /// Validate options and build a restartable walk.
    ///
    /// The root does not have to exist: a missing or unreadable root
    /// produces an empty walk, not an error.
    pub fn new(options: &WalkOptions) -> Result<Self, WalkError> {
        if options.root.as_os_str().is_empty() {
            return Err(WalkError::invalid_argument("root path cannot be empty"));
        }
        let pattern = options.compile_pattern()?;
        let root = absolutize(&options.root)?;
        Ok(Self {
            root,
            pattern,
            scope: options.scope,
        })
    }

    /// Root directory, absolutized.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Pattern text entry names are matched against.
    pub fn pattern(&self) -> &str {
        self.pattern.text()
    }

    /// Traversal scope.
    pub fn scope(&self) -> SearchScope {
        self.scope
    }

    /// Start a fresh traversal.
    pub fn iter(&self) -> TreeWalker {
        TreeWalker::new(self.root.clone(), self.pattern.clone(), self.scope)
    }
}

impl<'a> IntoIterator for &'a TreeWalk {
    type Item = FileRecord;
    type IntoIter = TreeWalker;

    fn into_iter(self) -> TreeWalker {
        self.iter()
    }
}

/// Resolve a path against the current directory without touching the
/// filesystem, so a nonexistent root still reaches the silent-empty
/// path rather than failing here.
fn absolutize(path: &Path) -> Result<PathBuf, WalkError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().map_err(|source| WalkError::CurrentDir { source })?;
        Ok(cwd.join(path))
    }
}
