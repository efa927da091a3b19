//! Fan-out accessors: collect every value matching a dot-notation path.

use serde_json::Value;

use crate::path::{Path, PathStep};
use crate::PathError;

/// Get all values from `data` matching a dot-notation path.
///
/// Sequences encountered along the way are unpacked recursively: every
/// element is visited with the same remaining path and the results are
/// concatenated in element order. Mappings are descended by literal key only;
/// a digit-only segment is a key here, not an index.
///
/// A missing key, or an explicit `null` stored at the key, contributes
/// nothing. Scalars where further descent is expected also contribute
/// nothing.
///
/// # Errors
///
/// With `required` set, any branch whose mapping lacks its segment raises
/// [`PathError::MissingVariable`] carrying the full originally-requested
/// path.
///
/// # Example
///
/// ```
/// use confpath::get_all;
/// use serde_json::json;
///
/// let doc = json!({"a": [{"b": 1}, {"b": 2}, {}]});
/// assert_eq!(get_all(&doc, "a.b", false).unwrap(), vec![&json!(1), &json!(2)]);
/// ```
pub fn get_all<'a>(
    data: &'a Value,
    path: &str,
    required: bool,
) -> Result<Vec<&'a Value>, PathError> {
    collect_all(data, path, required, path)
}

fn collect_all<'a>(
    data: &'a Value,
    path: &str,
    required: bool,
    org_path: &str,
) -> Result<Vec<&'a Value>, PathError> {
    match data {
        Value::Array(items) => {
            let mut output = Vec::new();
            for item in items {
                output.extend(collect_all(item, path, required, org_path)?);
            }
            Ok(output)
        }
        Value::Object(map) => {
            let (head, rest) = split_head(path);
            match map.get(head) {
                None | Some(Value::Null) => {
                    if required {
                        return Err(PathError::MissingVariable {
                            path: org_path.to_string(),
                        });
                    }
                    Ok(Vec::new())
                }
                Some(value) => match rest {
                    Some(rest) => collect_all(value, rest, required, org_path),
                    None => Ok(vec![value]),
                },
            }
        }
        _ => Ok(Vec::new()),
    }
}

fn split_head(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}

/// Get all values matching a dot-notation path, with the concrete location of
/// each match.
///
/// Same fan-out rules as [`get_all`], but each match comes with the path that
/// reaches that exact value in this document: literal keys plus resolved
/// sequence positions, including the terminal key.
///
/// The returned [`PathMatches`] is a lazy, single-pass iterator; the document
/// is traversed as the caller pulls items. There is no `required` variant;
/// missing branches simply yield nothing.
///
/// # Example
///
/// ```
/// use confpath::{get_all_with_path, PathStep};
/// use serde_json::json;
///
/// let doc = json!({"a": [{"b": 1}, {"b": 2}]});
/// let mut matches = get_all_with_path(&doc, "a.b");
///
/// let (location, value) = matches.next().unwrap();
/// assert_eq!(
///     location,
///     vec![
///         PathStep::Key("a".to_string()),
///         PathStep::Index(0),
///         PathStep::Key("b".to_string()),
///     ]
/// );
/// assert_eq!(value, &json!(1));
/// ```
pub fn get_all_with_path<'a>(data: &'a Value, path: &str) -> PathMatches<'a> {
    PathMatches {
        segments: path.split('.').map(str::to_string).collect(),
        stack: vec![Frame {
            data,
            segment: 0,
            location: Vec::new(),
        }],
    }
}

/// Lazy iterator over `(location, value)` matches of a dot-notation path.
///
/// Produced by [`get_all_with_path`]. Single-pass and not restartable: the
/// traversal state is consumed as items are pulled.
pub struct PathMatches<'a> {
    segments: Vec<String>,
    stack: Vec<Frame<'a>>,
}

struct Frame<'a> {
    data: &'a Value,
    segment: usize,
    location: Path,
}

impl<'a> Iterator for PathMatches<'a> {
    type Item = (Path, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        // Explicit work stack instead of recursion so the traversal can pause
        // at every match.
        while let Some(frame) = self.stack.pop() {
            match frame.data {
                Value::Array(items) => {
                    // Reverse so popping preserves element order.
                    for (index, item) in items.iter().enumerate().rev() {
                        let mut location = frame.location.clone();
                        location.push(PathStep::Index(index as i64));
                        self.stack.push(Frame {
                            data: item,
                            segment: frame.segment,
                            location,
                        });
                    }
                }
                Value::Object(map) => {
                    let segment = &self.segments[frame.segment];
                    match map.get(segment.as_str()) {
                        None | Some(Value::Null) => {}
                        Some(value) => {
                            let mut location = frame.location;
                            location.push(PathStep::Key(segment.clone()));
                            if frame.segment + 1 < self.segments.len() {
                                self.stack.push(Frame {
                                    data: value,
                                    segment: frame.segment + 1,
                                    location,
                                });
                            } else {
                                return Some((location, value));
                            }
                        }
                    }
                }
                _ => {}
            }
        }
        None
    }
}
