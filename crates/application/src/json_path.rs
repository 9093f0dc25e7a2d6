//! JSON path extraction for test assertions
//!
//! Addresses a decoded JSON tree with a slash-delimited path whose
//! segments may carry bracketed integer indices, e.g.
//! `data[0]/first_name`. Works on any order-preserving
//! [`serde_json::Value`] tree; used by tests to pull single values out of
//! response bodies.

use thiserror::Error;

/// Errors from JSON path lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPathError {
    /// No value exists at the given path.
    #[error("path not found: {0}")]
    PathNotFound(String),

    /// The value at the path has the wrong shape for the lookup.
    #[error("type mismatch at {path}: expected {expected}")]
    TypeMismatch {
        /// The path segment where the mismatch occurred.
        path: String,
        /// What the lookup expected to find there.
        expected: &'static str,
    },

    /// The path string itself is malformed.
    #[error("invalid path syntax: {0}")]
    InvalidPath(String),
}

/// Looks up the value at `path` within `root`.
///
/// Each slash-delimited segment names an object key, optionally followed
/// by one or more `[n]` array indices.
///
/// # Errors
///
/// Returns [`JsonPathError::PathNotFound`] for a missing key or
/// out-of-range index, [`JsonPathError::TypeMismatch`] when a segment
/// addresses into a non-object or non-array, and
/// [`JsonPathError::InvalidPath`] for malformed path syntax.
pub fn extract<'a>(
    root: &'a serde_json::Value,
    path: &str,
) -> Result<&'a serde_json::Value, JsonPathError> {
    let mut current = root;
    for segment in path.split('/') {
        let (key, indices) = parse_segment(segment)?;
        if !key.is_empty() {
            current = current
                .as_object()
                .ok_or_else(|| JsonPathError::TypeMismatch {
                    path: segment.to_string(),
                    expected: "object",
                })?
                .get(key)
                .ok_or_else(|| JsonPathError::PathNotFound(path.to_string()))?;
        }
        for index in indices {
            current = current
                .as_array()
                .ok_or_else(|| JsonPathError::TypeMismatch {
                    path: segment.to_string(),
                    expected: "array",
                })?
                .get(index)
                .ok_or_else(|| JsonPathError::PathNotFound(path.to_string()))?;
        }
    }
    Ok(current)
}

/// Looks up the value at `path` and renders it as a string.
///
/// Strings are returned as-is; numbers and booleans are rendered in their
/// canonical form.
///
/// # Errors
///
/// Same as [`extract`], plus [`JsonPathError::TypeMismatch`] when the
/// addressed value is not a scalar.
pub fn extract_string(root: &serde_json::Value, path: &str) -> Result<String, JsonPathError> {
    match extract(root, path)? {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        _ => Err(JsonPathError::TypeMismatch {
            path: path.to_string(),
            expected: "scalar",
        }),
    }
}

/// Splits one segment into its key and any trailing `[n]` indices.
fn parse_segment(segment: &str) -> Result<(&str, Vec<usize>), JsonPathError> {
    let Some(bracket) = segment.find('[') else {
        return Ok((segment, Vec::new()));
    };
    let key = &segment[..bracket];
    let mut indices = Vec::new();
    let mut rest = &segment[bracket..];
    while !rest.is_empty() {
        let inner = rest
            .strip_prefix('[')
            .and_then(|r| r.split_once(']'))
            .ok_or_else(|| JsonPathError::InvalidPath(segment.to_string()))?;
        let index = inner
            .0
            .parse::<usize>()
            .map_err(|_| JsonPathError::InvalidPath(segment.to_string()))?;
        indices.push(index);
        rest = inner.1;
    }
    Ok((key, indices))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_plain_key_path() {
        let root = json!({"page": 2, "per_page": 6});
        assert_eq!(extract(&root, "page").unwrap(), &json!(2));
    }

    #[test]
    fn test_nested_path_with_index() {
        let root = json!({"data": [{"first_name": "Eve"}, {"first_name": "Bob"}]});
        assert_eq!(
            extract_string(&root, "data[0]/first_name").unwrap(),
            "Eve"
        );
        assert_eq!(
            extract_string(&root, "data[1]/first_name").unwrap(),
            "Bob"
        );
    }

    #[test]
    fn test_numeric_scalar_renders_as_string() {
        let root = json!({"a": 1});
        assert_eq!(extract_string(&root, "a").unwrap(), "1");
    }

    #[test]
    fn test_nested_indices() {
        let root = json!({"grid": [[1, 2], [3, 4]]});
        assert_eq!(extract(&root, "grid[1][0]").unwrap(), &json!(3));
    }

    #[test]
    fn test_missing_key_is_path_not_found() {
        let root = json!({"data": []});
        assert!(matches!(
            extract(&root, "missing"),
            Err(JsonPathError::PathNotFound(_))
        ));
    }

    #[test]
    fn test_out_of_range_index_is_path_not_found() {
        let root = json!({"data": [1]});
        assert!(matches!(
            extract(&root, "data[5]"),
            Err(JsonPathError::PathNotFound(_))
        ));
    }

    #[test]
    fn test_indexing_a_non_array_is_type_mismatch() {
        let root = json!({"data": {"first_name": "Eve"}});
        assert!(matches!(
            extract(&root, "data[0]"),
            Err(JsonPathError::TypeMismatch { expected: "array", .. })
        ));
    }

    #[test]
    fn test_keying_into_a_scalar_is_type_mismatch() {
        let root = json!({"a": 1});
        assert!(matches!(
            extract(&root, "a/b"),
            Err(JsonPathError::TypeMismatch { expected: "object", .. })
        ));
    }

    #[test]
    fn test_non_scalar_string_render_is_type_mismatch() {
        let root = json!({"data": [1, 2]});
        assert!(matches!(
            extract_string(&root, "data"),
            Err(JsonPathError::TypeMismatch { expected: "scalar", .. })
        ));
    }

    #[test]
    fn test_malformed_bracket_is_invalid_path() {
        let root = json!({"data": [1]});
        assert!(matches!(
            extract(&root, "data[x]"),
            Err(JsonPathError::InvalidPath(_))
        ));
        assert!(matches!(
            extract(&root, "data[0"),
            Err(JsonPathError::InvalidPath(_))
        ));
    }
}
