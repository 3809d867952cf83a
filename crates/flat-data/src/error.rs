//! Flat data error types.

/// Errors from flat data operations.
#[derive(Debug, thiserror::Error)]
pub enum FlatDataError {
    /// A merge or parse source was not a flat mapping.
    #[error("invalid argument: expected {expected}, found {found}")]
    InvalidArgument {
        /// What the operation accepts.
        expected: &'static str,
        /// A short description of what it was given.
        found: String,
    },

    /// A JSON document could not be parsed.
    #[error("failed to parse JSON: {source}")]
    Json {
        /// The underlying parse error.
        #[from]
        source: serde_json::Error,
    },

    /// A TOML document could not be parsed.
    #[error("failed to parse TOML: {source}")]
    Toml {
        /// The underlying parse error.
        #[from]
        source: toml::de::Error,
    },

    /// A document exceeded the size accepted by the loader.
    #[error("document is {size} bytes, exceeding the {limit} byte limit")]
    TooLarge {
        /// Size of the rejected document.
        size: usize,
        /// Maximum accepted size.
        limit: usize,
    },
}

impl FlatDataError {
    /// Build an [`InvalidArgument`](Self::InvalidArgument) error for a value
    /// that is not a flat mapping.
    pub(crate) fn not_a_mapping(found: &serde_json::Value) -> Self {
        Self::InvalidArgument {
            expected: "a flat mapping or data wrapper",
            found: value_kind(found).to_owned(),
        }
    }
}

/// Result type for flat data operations.
pub type FlatDataResult<T> = Result<T, FlatDataError>;

/// Short JSON type name, for error messages and log fields.
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_a_mapping_message() {
        let err = FlatDataError::not_a_mapping(&json!([1, 2]));
        assert_eq!(
            err.to_string(),
            "invalid argument: expected a flat mapping or data wrapper, found array"
        );
    }

    #[test]
    fn test_value_kind_null() {
        assert_eq!(value_kind(&serde_json::Value::Null), "null");
        assert_eq!(value_kind(&json!({})), "object");
    }
}
