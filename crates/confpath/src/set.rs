//! Structural mutator: assign a value at a path, creating intermediate
//! containers on demand.

use serde_json::{Map, Value};

use crate::path::{format_path, resolve_index, PathStep};
use crate::{value_kind, PathError};

/// Set `value` at `path` in `data`, mutating `data` in place.
///
/// Intermediate mappings and sequences are created as needed; whether a level
/// becomes a mapping or a sequence is decided by the *next* path step (index
/// steps call for sequences). Sequences shorter than an addressed index are
/// right-padded with `null`. An element of the wrong container type under an
/// index step is replaced outright, discarding its previous contents.
///
/// Two deliberate behaviors to be aware of:
///
/// - An empty path merges: when both `data` and `value` are mappings, the
///   value's keys overwrite and extend the data's keys.
/// - A terminal index step on a sequence **appends**, ignoring the index
///   value. Repeated sets through such a path accumulate elements rather
///   than overwrite.
///
/// The mutation is not atomic: containers created before a deeper mismatch
/// is detected remain in the document after the error.
///
/// # Errors
///
/// [`PathError::InvalidPath`] on a shape mismatch while descending (for
/// example a key step into a scalar), [`PathError::InvalidAssignment`] when
/// the value cannot land on the data at all (non-mapping merge at the empty
/// path, or descent through a scalar).
///
/// # Example
///
/// ```
/// use confpath::{parse_path, set};
/// use serde_json::json;
///
/// let mut doc = json!({});
/// set(&mut doc, &parse_path("a.0.b"), json!(5)).unwrap();
/// assert_eq!(doc, json!({"a": [{"b": 5}]}));
/// ```
pub fn set(data: &mut Value, path: &[PathStep], value: Value) -> Result<(), PathError> {
    if path.is_empty() {
        return match (data, value) {
            (Value::Object(map), Value::Object(new_entries)) => {
                for (key, entry) in new_entries {
                    map.insert(key, entry);
                }
                Ok(())
            }
            (data, value) => Err(PathError::InvalidAssignment {
                path: String::new(),
                value_kind: value_kind(&value),
                data_kind: value_kind(data),
            }),
        };
    }

    if path.len() == 1 {
        return match (&path[0], &mut *data) {
            // A mapping takes any terminal step as a key; an index step is
            // stringified.
            (step, Value::Object(map)) => {
                map.insert(step.to_string(), value);
                Ok(())
            }
            (PathStep::Index(_), Value::Array(items)) => {
                // The index value is ignored on purpose: terminal index steps
                // append, so callers build sequences in insertion order.
                items.push(value);
                Ok(())
            }
            (step, other) => Err(PathError::InvalidPath {
                path: step.to_string(),
                kind: value_kind(other),
            }),
        };
    }

    // Two or more steps remaining.
    let next_is_index = path[1].is_index();
    match (&path[0], &mut *data) {
        (step, Value::Object(map)) => {
            // Create the child with the shape the next step needs. An
            // existing entry is kept as-is even when its shape does not
            // match; the recursion then reports the mismatch.
            let child = map.entry(step.to_string()).or_insert_with(|| {
                if next_is_index {
                    Value::Array(Vec::new())
                } else {
                    Value::Object(Map::new())
                }
            });
            set(child, &path[1..], value)
        }
        (PathStep::Index(index), Value::Array(items)) => {
            let index =
                resolve_index(*index, items.len()).ok_or_else(|| PathError::InvalidPath {
                    path: format_path(path),
                    kind: "array",
                })?;
            // Pad so the index exists.
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            let child = &mut items[index];
            // Coerce the element to the shape the next step needs, replacing
            // a non-matching value.
            if next_is_index {
                if !child.is_array() {
                    *child = Value::Array(Vec::new());
                }
            } else if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            set(child, &path[1..], value)
        }
        (_, other) => Err(PathError::InvalidAssignment {
            path: format_path(path),
            value_kind: value_kind(&value),
            data_kind: value_kind(other),
        }),
    }
}
