//! Entry name patterns.

use std::ffi::OsStr;
use std::path::Path;

use compact_str::CompactString;
use globset::{Glob, GlobMatcher};

use crate::error::WalkError;

/// Compiled glob applied to entry names during a scan.
///
/// Every entry a directory scan reports is checked against the
/// pattern, files and subdirectories alike, so a pattern narrower
/// than `"*"` constrains descent as well as the yielded files.
#[derive(Debug, Clone)]
pub struct Pattern {
    text: CompactString,
    matcher: Option<GlobMatcher>,
}

impl Pattern {
    /// Compile a glob pattern.
    ///
    /// `"*"` skips matcher construction entirely. An empty or
    /// syntactically invalid pattern is rejected.
    pub fn new(text: &str) -> Result<Self, WalkError> {
        if text.is_empty() {
            return Err(WalkError::invalid_argument("pattern cannot be empty"));
        }
        let matcher = if text == "*" {
            None
        } else {
            let glob = Glob::new(text).map_err(|e| {
                WalkError::invalid_argument(format!("invalid pattern {text:?}: {e}"))
            })?;
            Some(glob.compile_matcher())
        };
        Ok(Self {
            text: CompactString::new(text),
            matcher,
        })
    }

    /// The match-everything pattern.
    pub fn match_all() -> Self {
        Self {
            text: CompactString::const_new("*"),
            matcher: None,
        }
    }

    /// Original pattern text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check an entry name against the pattern.
    pub fn matches(&self, name: &OsStr) -> bool {
        match &self.matcher {
            Some(matcher) => matcher.is_match(Path::new(name)),
            None => true,
        }
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::match_all()
    }
}
