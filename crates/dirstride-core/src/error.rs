//! Error types for walk operations.

use thiserror::Error;

/// Errors that can occur when setting up a walk.
///
/// Traversal itself never fails: an unreadable or missing directory
/// contributes zero entries. Errors are only raised for inputs that
/// are rejected before any directory is opened.
#[derive(Debug, Error)]
pub enum WalkError {
    /// An input was rejected during validation.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The current directory could not be resolved for a relative root.
    #[error("cannot resolve current directory")]
    CurrentDir {
        #[source]
        source: std::io::Error,
    },
}

impl WalkError {
    /// Create an invalid argument error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = WalkError::invalid_argument("pattern cannot be empty");
        assert_eq!(err.to_string(), "invalid argument: pattern cannot be empty");
    }

    #[test]
    fn test_current_dir_has_source() {
        use std::error::Error;

        let err = WalkError::CurrentDir {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
    }
}
