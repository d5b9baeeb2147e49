//! Error types for path mutation.
//!
//! This module defines the structured errors that can occur after a path has
//! been parsed: an unusable root value, or an index segment no list can
//! represent. Parsing failures live in [`crate::path::PathError`].

use thiserror::Error;

/// Structured error types for path mutation operations.
///
/// Both variants are terminal for the call and are produced before any part
/// of the root is mutated, so a failed `set_path` never leaves a partially
/// written structure behind.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetError {
    /// `set_path` was invoked on a value that is not a map.
    ///
    /// Carries the observed type name of the root for diagnostics.
    #[error("cannot set a path on {actual} root: not a map")]
    RootNotAMap { actual: &'static str },

    /// A path segment parsed as a negative integer.
    ///
    /// Lists cannot grow backwards, so there is no position the segment
    /// could address.
    #[error("negative index '{segment}' in path: lists cannot grow backwards")]
    NegativeIndex { segment: String },
}

impl SetError {
    /// Check if this error is about the root value itself.
    pub fn is_root_error(&self) -> bool {
        matches!(self, SetError::RootNotAMap { .. })
    }

    /// Check if this error is about an unrepresentable list index.
    pub fn is_index_error(&self) -> bool {
        matches!(self, SetError::NegativeIndex { .. })
    }
}

// Conversion from SetError to the main Error type
impl From<SetError> for crate::Error {
    fn from(err: SetError) -> Self {
        crate::Error::Set(err)
    }
}
