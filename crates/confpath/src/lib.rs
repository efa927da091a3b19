//! Dot-notation path utilities for structured configuration documents.
//!
//! This crate implements a small path language over semi-structured data
//! (`serde_json::Value`): nested mappings and sequences with arbitrary scalar
//! leaves, the shape produced by parsing YAML-like device configuration.
//!
//! Four operations are provided:
//!
//! - [`get`] / [`get_or`] — walk a pre-split path to a single value, with a
//!   default for missing branches.
//! - [`get_all`] — collect every value matching a dot-notation path,
//!   unpacking sequences encountered along the way.
//! - [`get_all_with_path`] — like [`get_all`], but lazily yields each value
//!   together with the concrete path (list positions resolved) that reaches it.
//! - [`set`] — assign a value at a path, creating intermediate mappings and
//!   sequences on demand, mutating the document in place.
//!
//! # Example
//!
//! ```
//! use confpath::{get, get_all, parse_path, set};
//! use serde_json::json;
//!
//! let mut doc = json!({"vrfs": [{"name": "prod"}, {"name": "dev"}]});
//!
//! // Sequences fan out: one lookup, every element.
//! let names = get_all(&doc, "vrfs.name", false).unwrap();
//! assert_eq!(names, vec![&json!("prod"), &json!("dev")]);
//!
//! // Digit-only segments index into sequences.
//! set(&mut doc, &parse_path("vrfs.0.mtu"), json!(9214)).unwrap();
//! assert_eq!(get(&doc, &parse_path("vrfs.0.mtu")).unwrap(), Some(&json!(9214)));
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod get;
pub mod get_all;
pub mod list;
pub mod path;
pub mod set;

pub use get::{get, get_or};
pub use get_all::{get_all, get_all_with_path, PathMatches};
pub use list::{remove_item, upsert_item};
pub use path::{format_path, is_numeric_segment, parse_path, Path, PathStep};
pub use set::set;

/// Errors raised by path traversal and mutation.
///
/// Missing keys and out-of-range indices are not errors; accessors resolve
/// them with a default or an empty result. Only structural mismatches and
/// opted-in required lookups surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A lookup with `required` set found nothing for the requested path.
    ///
    /// Carries the full originally-requested path, not the sub-path at the
    /// point of failure.
    #[error("'{path}' is required but was not found in the data")]
    MissingVariable { path: String },

    /// A path step cannot be applied to the data present at that step, for
    /// example an index step into a mapping or a key step into a scalar.
    #[error("path '{path}' cannot be applied to data of type '{kind}'")]
    InvalidPath { path: String, kind: &'static str },

    /// A value cannot be assigned onto the data at the target path, for
    /// example merging a scalar into a mapping at the root.
    #[error("value of type '{value_kind}' cannot be set at path '{path}' on data of type '{data_kind}'")]
    InvalidAssignment {
        path: String,
        value_kind: &'static str,
        data_kind: &'static str,
    },
}

/// Name the JSON type of a value, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!(true)), "boolean");
        assert_eq!(value_kind(&json!(1)), "number");
        assert_eq!(value_kind(&json!("s")), "string");
        assert_eq!(value_kind(&json!([])), "array");
        assert_eq!(value_kind(&json!({})), "object");
    }

    #[test]
    fn test_error_messages_carry_paths() {
        let err = PathError::MissingVariable {
            path: "a.b".to_string(),
        };
        assert!(err.to_string().contains("a.b"));

        let err = PathError::InvalidPath {
            path: "0".to_string(),
            kind: "object",
        };
        assert!(err.to_string().contains("object"));

        let err = PathError::InvalidAssignment {
            path: String::new(),
            value_kind: "number",
            data_kind: "object",
        };
        assert!(err.to_string().contains("number"));
        assert!(err.to_string().contains("object"));
    }
}
