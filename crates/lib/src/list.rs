//! The sequence node.
//!
//! [`List`] is an ordered collection of [`Value`] nodes. Positions that were
//! never targeted by a write hold the [`Value::Absent`] hole marker, which
//! is distinct from an actual `null` leaf in memory but serializes to JSON
//! `null`. Index-driven growth pads the tail with holes.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::value::Value;

/// An ordered collection of values, possibly containing holes.
///
/// # Examples
///
/// ```
/// # use pathset::{List, Value};
/// let mut list = List::with_len(3);
/// assert!(list[0].is_absent());
///
/// list[2] = Value::Int(7);
/// assert_eq!(list.get(2), Some(&Value::Int(7)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a list of `len` holes
    pub fn with_len(len: usize) -> Self {
        Self {
            items: vec![Value::Absent; len],
        }
    }

    /// Returns the number of positions, holes included
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no positions at all
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets the value at `index`, if the position exists
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Gets a mutable reference to the value at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Appends a value at the end of the list
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Grows the list up to `len` positions, filling the new tail with
    /// holes. Never shrinks.
    pub fn grow_to(&mut self, len: usize) {
        if self.items.len() < len {
            self.items.resize(len, Value::Absent);
        }
    }

    /// Returns an iterator over the positions, holes included
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl Index<usize> for List {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl IndexMut<usize> for List {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.items[index]
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
