//! Parsing flat mappings from JSON and TOML text.
//!
//! These helpers only parse text the caller already holds, typically an
//! embedded defaults document (`include_str!("defaults.toml")`). Reading and
//! writing files is left to the stores that own the wrapper's `id`.

use serde_json::Value;
use tracing::debug;

use crate::error::{FlatDataError, FlatDataResult};
use crate::wrapper::{FlatData, FlatDataWrapper};

/// Maximum accepted document size (1 MiB).
pub const MAX_DOCUMENT_SIZE: usize = 1_048_576;

/// Parse a JSON document into a flat mapping.
///
/// # Errors
///
/// Returns [`FlatDataError::Json`] if the text is not valid JSON,
/// [`FlatDataError::InvalidArgument`] if the document is not an object, and
/// [`FlatDataError::TooLarge`] if it exceeds [`MAX_DOCUMENT_SIZE`].
pub fn parse_json(text: &str) -> FlatDataResult<FlatData> {
    check_size(text)?;
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => {
            debug!(keys = map.len(), "parsed JSON flat data");
            Ok(map)
        },
        other => Err(FlatDataError::not_a_mapping(&other)),
    }
}

/// Parse a TOML document into a flat mapping.
///
/// Top-level keys become mapping keys. Tables and arrays become nested JSON
/// values, which the wrapper treats as atomic.
///
/// # Errors
///
/// Returns [`FlatDataError::Toml`] if the text is not valid TOML and
/// [`FlatDataError::TooLarge`] if it exceeds [`MAX_DOCUMENT_SIZE`].
pub fn parse_toml(text: &str) -> FlatDataResult<FlatData> {
    check_size(text)?;
    let map: FlatData = toml::from_str(text)?;
    debug!(keys = map.len(), "parsed TOML flat data");
    Ok(map)
}

fn check_size(text: &str) -> FlatDataResult<()> {
    if text.len() > MAX_DOCUMENT_SIZE {
        return Err(FlatDataError::TooLarge {
            size: text.len(),
            limit: MAX_DOCUMENT_SIZE,
        });
    }
    Ok(())
}

impl FlatDataWrapper {
    /// Build a wrapper from JSON documents for data and defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if either document fails [`parse_json`].
    pub fn from_json_parts(
        data: Option<&str>,
        defaults: Option<&str>,
        id: Option<&str>,
    ) -> FlatDataResult<Self> {
        let data = data.map(parse_json).transpose()?;
        let defaults = defaults.map(parse_json).transpose()?;
        Ok(Self::with_parts(data.as_ref(), defaults.as_ref(), id))
    }

    /// Build a wrapper whose defaults come from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if `defaults_toml` fails [`parse_toml`].
    pub fn from_toml_defaults(
        data: Option<&FlatData>,
        defaults_toml: &str,
        id: Option<&str>,
    ) -> FlatDataResult<Self> {
        let defaults = parse_toml(defaults_toml)?;
        Ok(Self::with_parts(data, Some(&defaults), id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_json_object() {
        let map = parse_json(r#"{"theme": "dark", "size": 12}"#).unwrap();
        assert_eq!(map["theme"], json!("dark"));
        assert_eq!(map["size"], json!(12));
    }

    #[test]
    fn test_parse_json_rejects_non_object() {
        let err = parse_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, FlatDataError::InvalidArgument { .. }));

        let err = parse_json("null").unwrap_err();
        assert!(matches!(err, FlatDataError::InvalidArgument { .. }));
    }

    #[test]
    fn test_parse_json_malformed() {
        let err = parse_json("{not json").unwrap_err();
        assert!(matches!(err, FlatDataError::Json { .. }));
    }

    #[test]
    fn test_parse_toml_flat() {
        let map = parse_toml(
            r#"
            theme = "light"
            font_size = 14
            recent = ["a.txt", "b.txt"]

            [window]
            width = 800
        "#,
        )
        .unwrap();

        assert_eq!(map["theme"], json!("light"));
        assert_eq!(map["font_size"], json!(14));
        assert_eq!(map["recent"], json!(["a.txt", "b.txt"]));
        assert_eq!(map["window"], json!({"width": 800}));
    }

    #[test]
    fn test_parse_toml_malformed() {
        let err = parse_toml("theme = ").unwrap_err();
        assert!(matches!(err, FlatDataError::Toml { .. }));
    }

    #[test]
    fn test_too_large() {
        let text = format!(r#"{{"k": "{}"}}"#, "x".repeat(MAX_DOCUMENT_SIZE));
        let err = parse_json(&text).unwrap_err();
        assert!(matches!(err, FlatDataError::TooLarge { .. }));
    }

    #[test]
    fn test_from_json_parts() {
        let w = FlatDataWrapper::from_json_parts(
            Some(r#"{"a": 1}"#),
            Some(r#"{"a": 0, "b": 2}"#),
            Some("prefs"),
        )
        .unwrap();

        assert_eq!(w.get("a"), Some(&json!(1)));
        assert_eq!(w.get("b"), Some(&json!(2)));
        assert_eq!(w.id(), Some("prefs"));

        let empty = FlatDataWrapper::from_json_parts(None, None, None).unwrap();
        assert_eq!(empty, FlatDataWrapper::new());
    }

    #[test]
    fn test_from_toml_defaults() {
        let w = FlatDataWrapper::from_toml_defaults(None, "volume = 5\nmuted = false", None)
            .unwrap();
        assert!(w.data().is_empty());
        assert_eq!(w.get("volume"), Some(&json!(5)));
        assert_eq!(w.get("muted"), Some(&json!(false)));
    }
}
