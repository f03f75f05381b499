//! Core types for dirstride.
//!
//! This crate provides the fundamental data structures shared across
//! the dirstride workspace: file records, walk options, aggregate
//! counts, name patterns, and the error type.

mod counts;
mod error;
mod options;
mod pattern;
mod record;

pub use counts::WalkCounts;
pub use error::WalkError;
pub use options::{SearchScope, WalkOptions, WalkOptionsBuilder};
pub use pattern::Pattern;
pub use record::{FileRecord, Timestamps};
