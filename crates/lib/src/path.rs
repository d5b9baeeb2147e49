//! Path parsing for nested document access.
//!
//! A path addresses one slot inside a nested structure of maps and lists.
//! Two index spellings are interchangeable: `servers[0].host` and
//! `servers.0.host` parse to the same segments. Whether a segment is a map
//! key or a list index is not decided here; it is resolved later by a
//! fallible integer parse (see [`Segment::index`]).
//!
//! Segments are never trimmed. Empty or whitespace-only tokens past the
//! first are valid map keys, so `"a. 0 "` addresses the key `" 0 "`, not
//! list position zero.

use std::fmt;

use thiserror::Error;

/// Error type for path validation failures.
///
/// The first segment of a path must be a plain map key: the root of a
/// document is always a map, never a list, so a path cannot open with a
/// separator or an index.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path contained no segments at all.
    #[error("invalid path: empty path")]
    Empty,

    /// The first segment was empty, i.e. the path starts with a separator.
    #[error("invalid path '{path}': leading separator")]
    LeadingSeparator { path: String },

    /// The first segment parses as an integer and would index into the root.
    #[error("invalid path '{path}': first segment '{segment}' is an index")]
    IndexedRoot { path: String, segment: String },
}

// Conversion from PathError to the main Error type
impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}

/// One component of a parsed path.
///
/// A segment is a raw string token. Its kind — map key or list index — is
/// resolved lazily: a segment addresses a list slot exactly when the whole
/// token parses as a base-10 integer.
///
/// # Examples
///
/// ```
/// # use pathset::path::Segment;
/// assert_eq!(Segment::new("3").index(), Some(3));
/// assert_eq!(Segment::new("host").index(), None);
///
/// // Whitespace is never trimmed, so this is a map key.
/// assert_eq!(Segment::new(" 3 ").index(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    inner: String,
}

impl Segment {
    /// Creates a segment from a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Segment {
            inner: token.into(),
        }
    }

    /// Returns the segment as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Interprets this segment as a list index.
    ///
    /// Returns `Some` when the whole token parses as a base-10 integer
    /// (standard integer-literal rules: an optional sign is accepted, no
    /// surrounding whitespace). Returns `None` for anything else, which
    /// makes the segment a map key.
    ///
    /// Negative results are possible here; they are rejected with a
    /// dedicated error during container synthesis.
    pub fn index(&self) -> Option<i64> {
        self.inner.parse().ok()
    }
}

impl AsRef<str> for Segment {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Parses a path string into its ordered segments.
///
/// Bracket syntax is normalized first: every `[` becomes a separator and
/// every `]` is dropped, so `a[0].b` and `a.0.b` produce identical segment
/// sequences. The normalized string is then split on `.` with no trimming
/// and no filtering; only the first segment is validated.
///
/// # Errors
///
/// Returns a [`PathError`] when the path is empty, starts with a separator,
/// or opens with a segment that parses as an integer.
///
/// # Examples
///
/// ```
/// use pathset::path;
///
/// let segments = path::parse("servers[0].host")?;
/// let tokens: Vec<&str> = segments.iter().map(|s| s.as_str()).collect();
/// assert_eq!(tokens, ["servers", "0", "host"]);
///
/// assert!(path::parse("").is_err());
/// assert!(path::parse("[0].host").is_err());
/// assert!(path::parse("0.host").is_err());
/// # Ok::<(), pathset::PathError>(())
/// ```
pub fn parse(path: &str) -> Result<Vec<Segment>, PathError> {
    // "a[0].b" and "a.0.b" address the same slot
    let normalized = path.replace('[', ".").replace(']', "");

    let segments: Vec<Segment> = normalized.split('.').map(Segment::new).collect();
    let Some(first) = segments.first() else {
        return Err(PathError::Empty);
    };

    if first.as_str().is_empty() || first.as_str() == "." {
        if path.is_empty() {
            return Err(PathError::Empty);
        }
        return Err(PathError::LeadingSeparator {
            path: path.to_string(),
        });
    }
    if first.index().is_some() {
        return Err(PathError::IndexedRoot {
            path: path.to_string(),
            segment: first.as_str().to_string(),
        });
    }

    Ok(segments)
}
