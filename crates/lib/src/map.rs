//! The mapping node and the document root.
//!
//! [`Map`] is the container every document starts from: a mapping of string
//! keys to [`Value`] nodes. It carries the plain container surface you would
//! expect plus [`Map::set_path`], the entry point that writes a value deep
//! into the structure while creating missing intermediate containers.

use std::{collections::HashMap, fmt};

use tracing::trace;

use crate::{merge, path, value::Value};

/// A mapping of string keys to values.
///
/// `Map` is the root node type of every document: the library guarantees
/// that a path always opens with a map key, so mutation always starts here.
/// Insertion/iteration order is irrelevant to correctness and not preserved.
///
/// # Examples
///
/// ## Basic Operations
/// ```
/// # use pathset::Map;
/// let mut map = Map::new();
/// map.insert("name", "Alice");
/// map.insert("age", 30);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("name").and_then(|v| v.as_text()), Some("Alice"));
/// ```
///
/// ## Path Operations
/// ```
/// # use pathset::Map;
/// let mut map = Map::new();
/// map.set_path("user.profile.name", "Alice")?;
///
/// let user = map.get("user").and_then(|v| v.as_map()).unwrap();
/// let profile = user.get("profile").and_then(|v| v.as_map()).unwrap();
/// assert_eq!(profile.get("name").and_then(|v| v.as_text()), Some("Alice"));
/// # Ok::<(), pathset::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Map {
    /// Child nodes indexed by string keys
    children: HashMap<String, Value>,
}

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
        }
    }

    /// Returns true if this map has no entries
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of direct keys
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the map contains the given key
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.children.contains_key(key.as_ref())
    }

    /// Gets a value by key (immutable reference)
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.children.get(key.as_ref())
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut Value> {
        self.children.get_mut(key.as_ref())
    }

    /// Inserts a value under a key, returning the previous value if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Removes a key, returning its value if it was present
    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<Value> {
        self.children.remove(key.as_ref())
    }

    /// Returns an iterator over the entries
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.children.iter()
    }

    /// Returns an iterator over the keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    /// Returns an iterator over the values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    /// Sets `value` at `path` inside this map, creating every missing
    /// intermediate container along the way.
    ///
    /// The path is parsed into segments, a minimal chain of containers is
    /// synthesized around the value, and the chain is deep-merged into the
    /// existing structure in place: siblings of the targeted slot survive
    /// untouched, list positions below a targeted index are padded with
    /// holes, and only the exact targeted position is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`](crate::PathError) when the path fails
    /// validation (empty, leading separator, or integer first segment) and
    /// [`SetError::NegativeIndex`](crate::SetError) when a segment parses as
    /// a negative integer. On error the map is left completely unchanged;
    /// mutation only begins once parsing and synthesis have succeeded.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathset::Map;
    /// let mut map = Map::new();
    /// map.set_path("a[3].c", "test")?;
    ///
    /// // Positions 0-2 are holes, serialized as null.
    /// assert_eq!(
    ///     serde_json::to_value(&map)?,
    ///     serde_json::json!({"a": [null, null, null, {"c": "test"}]})
    /// );
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn set_path(&mut self, path: impl AsRef<str>, value: impl Into<Value>) -> crate::Result<()> {
        let path = path.as_ref();
        let segments = path::parse(path)?;
        let incoming = merge::synthesize(&segments, value.into())?;
        trace!(%path, "merging synthesized chain into root");

        // The parser rejects index-valued first segments, so the chain is
        // always rooted at a single-entry map.
        debug_assert!(matches!(incoming, Value::Map(_)));
        if let Value::Map(incoming) = incoming {
            for (key, value) in incoming {
                let existing = self.children.remove(&key);
                let merged = merge::merge(existing, value);
                self.children.insert(key, merged);
            }
        }
        Ok(())
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl From<HashMap<String, Value>> for Map {
    fn from(children: HashMap<String, Value>) -> Self {
        Self { children }
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = std::collections::hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
