//! Walk options and input validation.

use std::path::PathBuf;

use compact_str::CompactString;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::WalkError;
use crate::pattern::Pattern;

/// How far a walk descends from its root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Scan only the root directory itself.
    #[default]
    TopLevel,
    /// Descend depth-first into every discovered subdirectory.
    Recursive,
}

impl SearchScope {
    /// Check whether subdirectories are descended into.
    pub fn is_recursive(self) -> bool {
        matches!(self, SearchScope::Recursive)
    }
}

/// Validated inputs for a walk.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct WalkOptions {
    /// Root directory to walk.
    pub root: PathBuf,

    /// Glob applied to every entry name the scan reports.
    #[builder(default = "default_pattern()")]
    #[serde(default = "default_pattern")]
    pub pattern: CompactString,

    /// Traversal scope.
    #[builder(default)]
    #[serde(default)]
    pub scope: SearchScope,
}

fn default_pattern() -> CompactString {
    CompactString::const_new("*")
}

impl WalkOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("root path cannot be empty".to_string());
            }
        } else {
            return Err("root path is required".to_string());
        }
        if let Some(ref pattern) = self.pattern {
            if let Err(e) = Pattern::new(pattern) {
                return Err(match e {
                    WalkError::InvalidArgument { reason } => reason,
                    other => other.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl WalkOptions {
    /// Create a new options builder.
    pub fn builder() -> WalkOptionsBuilder {
        WalkOptionsBuilder::default()
    }

    /// Create simple options for a top-level walk matching everything.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pattern: default_pattern(),
            scope: SearchScope::TopLevel,
        }
    }

    /// Compile the pattern text, rejecting empty or malformed globs.
    pub fn compile_pattern(&self) -> Result<Pattern, WalkError> {
        Pattern::new(&self.pattern)
    }
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::new(".")
    }
}
