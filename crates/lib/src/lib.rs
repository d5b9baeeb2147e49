//! pathset: set values at dotted paths inside JSON-like documents.
//!
//! This library mutates a nested structure of maps and lists through a path
//! string such as `"servers[0].host"`, creating every missing intermediate
//! container along the way. It is intended for callers who hold a mutable
//! map of string keys to arbitrary values (directly analogous to a parsed
//! JSON object) and want to assign a value at arbitrary depth without
//! checking and creating each level by hand.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A tagged union of everything a document can
//!   hold: leaf values (`Null`, `Bool`, `Int`, `Float`, `Text`), branch
//!   values ([`Map`], [`List`]), and the `Absent` hole marker used to pad
//!   lists up to a target index.
//! * **Maps (`map::Map`)**: The mapping node and the root of every document.
//!   [`Map::set_path`] is the primary entry point.
//! * **Lists (`list::List`)**: The sequence node. Positions that were never
//!   targeted by a write hold `Absent` and serialize to JSON `null`.
//! * **Paths (`path`)**: Dotted/bracketed path strings. `a[0].b` and `a.0.b`
//!   address the same slot; a segment is a list index exactly when the whole
//!   token parses as a base-10 integer, otherwise it is a map key.
//!
//! Setting a path merges a freshly synthesized chain of containers into the
//! existing structure: siblings of the targeted slot are preserved, only the
//! exact targeted position is overwritten.
//!
//! ## Example
//!
//! ```
//! use pathset::Map;
//!
//! let mut root = Map::new();
//! root.set_path("servers[0].host", "example.com")?;
//! root.set_path("servers[0].port", 9000)?;
//! root.set_path("servers[2].host", "backup.example.com")?;
//!
//! assert_eq!(
//!     serde_json::to_value(&root)?,
//!     serde_json::json!({
//!         "servers": [
//!             {"host": "example.com", "port": 9000},
//!             null,
//!             {"host": "backup.example.com"},
//!         ]
//!     })
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod errors;
pub mod list;
pub mod map;
mod merge;
pub mod path;
pub mod value;

pub use errors::SetError;
pub use list::List;
pub use map::Map;
pub use path::PathError;
pub use value::Value;

/// Result type used throughout the pathset library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the pathset library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured path parsing errors from the path module
    #[error(transparent)]
    Path(path::PathError),

    /// Structured mutation errors from the errors module
    #[error(transparent)]
    Set(errors::SetError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Path(_) => "path",
            Error::Set(_) => "set",
        }
    }

    /// Check if this error indicates a path that failed validation.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Error::Path(_))
    }

    /// Check if this error indicates an unusable root value.
    pub fn is_root_error(&self) -> bool {
        match self {
            Error::Set(err) => err.is_root_error(),
            _ => false,
        }
    }

    /// Check if this error indicates an out-of-range list index.
    pub fn is_index_error(&self) -> bool {
        match self {
            Error::Set(err) => err.is_index_error(),
            _ => false,
        }
    }
}
