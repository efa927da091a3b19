//! Single-value accessor.

use serde_json::Value;

use crate::path::{resolve_index, PathStep};
use crate::{value_kind, PathError};

/// Walk `data` along `path` and return the value found there.
///
/// Missing mapping keys and out-of-range sequence indices at any depth are
/// soft misses reported as `Ok(None)`. An explicit `null` stored at the path
/// is a found value, returned as `Some(&Value::Null)`.
///
/// # Errors
///
/// Applying a step to data of the wrong shape is a hard error: an index step
/// into anything that is not a sequence, or a key step into anything that is
/// not a mapping, returns [`PathError::InvalidPath`].
///
/// # Example
///
/// ```
/// use confpath::{get, parse_path};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [10, 20]}});
///
/// assert_eq!(get(&doc, &parse_path("a.b.1")).unwrap(), Some(&json!(20)));
/// assert_eq!(get(&doc, &parse_path("a.missing")).unwrap(), None);
/// assert!(get(&doc, &parse_path("a.0")).is_err()); // index into a mapping
/// ```
pub fn get<'a>(data: &'a Value, path: &[PathStep]) -> Result<Option<&'a Value>, PathError> {
    let mut current = data;
    for step in path {
        match (step, current) {
            (PathStep::Index(index), Value::Array(items)) => {
                match resolve_index(*index, items.len()).and_then(|i| items.get(i)) {
                    Some(item) => current = item,
                    None => return Ok(None),
                }
            }
            (PathStep::Key(key), Value::Object(map)) => match map.get(key) {
                Some(value) => current = value,
                None => return Ok(None),
            },
            (step, other) => {
                return Err(PathError::InvalidPath {
                    path: step.to_string(),
                    kind: value_kind(other),
                })
            }
        }
    }
    Ok(Some(current))
}

/// Like [`get`], substituting `default` for a missing path.
///
/// ```
/// use confpath::{get_or, parse_path};
/// use serde_json::json;
///
/// let doc = json!({"mtu": 1500});
/// let fallback = json!(9214);
///
/// assert_eq!(get_or(&doc, &parse_path("mtu"), &fallback).unwrap(), &json!(1500));
/// assert_eq!(get_or(&doc, &parse_path("speed"), &fallback).unwrap(), &json!(9214));
/// ```
pub fn get_or<'a>(
    data: &'a Value,
    path: &[PathStep],
    default: &'a Value,
) -> Result<&'a Value, PathError> {
    Ok(get(data, path)?.unwrap_or(default))
}
