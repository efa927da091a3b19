//! Path types and dot-notation parsing.

use std::fmt;

/// A single step in a document path.
///
/// A step either keys into a mapping or indexes into a sequence. Negative
/// indices count from the end of the sequence, so `Index(-1)` addresses the
/// last element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(i64),
}

/// A document path: an ordered list of steps. Empty means the document itself.
pub type Path = Vec<PathStep>;

impl PathStep {
    /// Build a step from a raw string segment.
    ///
    /// A segment consisting entirely of ASCII digits becomes an [`Index`]
    /// (`"007"` parses as index 7). Anything else stays a [`Key`], including
    /// signed or padded numbers such as `"-1"` and `" 1"`.
    ///
    /// [`Index`]: PathStep::Index
    /// [`Key`]: PathStep::Key
    ///
    /// # Example
    ///
    /// ```
    /// use confpath::PathStep;
    ///
    /// assert_eq!(PathStep::from_segment("mtu"), PathStep::Key("mtu".to_string()));
    /// assert_eq!(PathStep::from_segment("0"), PathStep::Index(0));
    /// assert_eq!(PathStep::from_segment("007"), PathStep::Index(7));
    /// assert_eq!(PathStep::from_segment("-1"), PathStep::Key("-1".to_string()));
    /// ```
    pub fn from_segment(segment: &str) -> Self {
        if is_numeric_segment(segment) {
            // Digit-only segments longer than an i64 saturate instead of
            // falling back to a key, so they still fail as indexes.
            return match segment.parse::<i64>() {
                Ok(index) => PathStep::Index(index),
                Err(_) => PathStep::Index(i64::MAX),
            };
        }
        PathStep::Key(segment.to_string())
    }

    /// Whether this step indexes into a sequence.
    pub fn is_index(&self) -> bool {
        matches!(self, PathStep::Index(_))
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => f.write_str(key),
            PathStep::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathStep {
    fn from(segment: &str) -> Self {
        PathStep::from_segment(segment)
    }
}

impl From<String> for PathStep {
    fn from(segment: String) -> Self {
        PathStep::from_segment(&segment)
    }
}

impl From<i64> for PathStep {
    fn from(index: i64) -> Self {
        PathStep::Index(index)
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        PathStep::Index(index as i64)
    }
}

/// Check whether a path segment is interpreted as a sequence index.
///
/// True for non-empty strings of ASCII digits only. Signs, spaces and empty
/// strings are not numeric, so they key into mappings instead.
pub fn is_numeric_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a dot-notation path string into steps.
///
/// The empty string parses to the empty path (the document itself).
///
/// # Example
///
/// ```
/// use confpath::{parse_path, PathStep};
///
/// assert_eq!(
///     parse_path("vrfs.0.name"),
///     vec![
///         PathStep::Key("vrfs".to_string()),
///         PathStep::Index(0),
///         PathStep::Key("name".to_string()),
///     ]
/// );
/// assert_eq!(parse_path(""), Vec::<PathStep>::new());
/// ```
pub fn parse_path(path: &str) -> Path {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').map(PathStep::from_segment).collect()
}

/// Format path steps back into a dot-notation string.
pub fn format_path(path: &[PathStep]) -> String {
    let segments: Vec<String> = path.iter().map(ToString::to_string).collect();
    segments.join(".")
}

/// Resolve a possibly-negative index against a sequence length.
///
/// Returns `None` when a negative index reaches before the first element.
/// A non-negative index is returned as-is even when past the end; bounds
/// are the caller's concern.
pub(crate) fn resolve_index(index: i64, len: usize) -> Option<usize> {
    if index >= 0 {
        return Some(index as usize);
    }
    len.checked_sub(index.unsigned_abs() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_segment() {
        assert!(is_numeric_segment("0"));
        assert!(is_numeric_segment("123"));
        assert!(is_numeric_segment("007"));
        assert!(!is_numeric_segment("-1"));
        assert!(!is_numeric_segment(" 1"));
        assert!(!is_numeric_segment("1.5"));
        assert!(!is_numeric_segment(""));
        assert!(!is_numeric_segment("abc"));
    }

    #[test]
    fn test_from_segment() {
        assert_eq!(PathStep::from_segment("name"), PathStep::Key("name".to_string()));
        assert_eq!(PathStep::from_segment("0"), PathStep::Index(0));
        assert_eq!(PathStep::from_segment("007"), PathStep::Index(7));
        assert_eq!(PathStep::from_segment("-1"), PathStep::Key("-1".to_string()));
        assert_eq!(PathStep::from_segment(""), PathStep::Key(String::new()));
    }

    #[test]
    fn test_parse_path() {
        assert_eq!(parse_path(""), Vec::<PathStep>::new());
        assert_eq!(
            parse_path("a.0.b"),
            vec![
                PathStep::Key("a".to_string()),
                PathStep::Index(0),
                PathStep::Key("b".to_string()),
            ]
        );
        // Consecutive dots produce empty keys, not an error.
        assert_eq!(
            parse_path("a..b"),
            vec![
                PathStep::Key("a".to_string()),
                PathStep::Key(String::new()),
                PathStep::Key("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[]), "");
        assert_eq!(
            format_path(&parse_path("a.0.b")),
            "a.0.b"
        );
        assert_eq!(
            format_path(&[PathStep::Key("a".to_string()), PathStep::Index(-1)]),
            "a.-1"
        );
    }

    #[test]
    fn test_parse_format_roundtrip() {
        for path in ["a", "a.b", "a.0.b", "a.007.b", "spine.uplinks.0"] {
            // "007" normalizes to "7" on the way back out.
            let expected = path.replace("007", "7");
            assert_eq!(format_path(&parse_path(path)), expected);
        }
    }

    #[test]
    fn test_resolve_index() {
        assert_eq!(resolve_index(0, 3), Some(0));
        assert_eq!(resolve_index(5, 3), Some(5));
        assert_eq!(resolve_index(-1, 3), Some(2));
        assert_eq!(resolve_index(-3, 3), Some(0));
        assert_eq!(resolve_index(-4, 3), None);
    }
}
