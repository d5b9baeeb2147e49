//! Container synthesis and recursive merging.
//!
//! These two steps are the heart of `set_path`. [`synthesize`] walks the
//! parsed segments backward and wraps the value in the minimal chain of
//! containers that hosts it at the addressed position, with no knowledge of
//! what already exists. [`merge`] then combines that chain with the existing
//! structure: untouched siblings are preserved, lists grow with hole
//! padding, and only the exact targeted slot is overwritten.

use crate::{errors::SetError, list::List, map::Map, path::Segment, value::Value};

/// Builds the minimal container chain hosting `value` at the position the
/// segments address.
///
/// Segments are processed last to first. A segment that parses as a
/// non-negative integer `idx` becomes a list of length `idx + 1`, all holes
/// except position `idx` which holds the chain built so far; any other
/// segment becomes a single-entry map.
///
/// # Errors
///
/// Returns [`SetError::NegativeIndex`] when a segment parses as a negative
/// integer: no list position could represent it, and guessing a wrap-around
/// or clamping policy would corrupt the structure silently.
pub(crate) fn synthesize(segments: &[Segment], value: Value) -> Result<Value, SetError> {
    let mut current = value;
    for segment in segments.iter().rev() {
        current = match segment.index() {
            Some(idx) if idx < 0 => {
                return Err(SetError::NegativeIndex {
                    segment: segment.as_str().to_string(),
                });
            }
            Some(idx) => {
                let idx = idx as usize;
                let mut list = List::with_len(idx + 1);
                list[idx] = current;
                Value::List(list)
            }
            None => {
                let mut map = Map::new();
                map.insert(segment.as_str(), current);
                Value::Map(map)
            }
        };
    }
    Ok(current)
}

/// Merges `incoming` into `existing`, returning the combined node.
///
/// Dispatch is on the variant of `incoming`:
///
/// - **Map**: extends an existing map per key, recursing into each entry;
///   any non-map `existing` is discarded in favor of a fresh map.
/// - **List**: reuses an existing list as the base, growing it to the
///   incoming length with hole padding; any non-list `existing` is
///   discarded. A hole in `incoming` never overwrites a previously-set
///   value at that position.
/// - **leaf**: discards `existing` unconditionally — the overwrite case.
pub(crate) fn merge(existing: Option<Value>, incoming: Value) -> Value {
    match incoming {
        Value::Map(src) => {
            let mut dst = match existing {
                Some(Value::Map(map)) => map,
                _ => Map::new(),
            };
            for (key, value) in src {
                let prior = dst.remove(&key);
                let merged = merge(prior, value);
                dst.insert(key, merged);
            }
            Value::Map(dst)
        }
        Value::List(src) => {
            let mut dst = match existing {
                Some(Value::List(list)) => list,
                _ => List::new(),
            };
            dst.grow_to(src.len());
            for (i, item) in src.into_iter().enumerate() {
                // An incoming hole is padding, never an overwrite: a slot
                // that is newly in range but was never targeted must keep
                // whatever a prior write put there.
                if item.is_absent() {
                    continue;
                }
                let prior = match std::mem::replace(&mut dst[i], Value::Absent) {
                    Value::Absent => None,
                    value => Some(value),
                };
                dst[i] = merge(prior, item);
            }
            Value::List(dst)
        }
        leaf => leaf,
    }
}
