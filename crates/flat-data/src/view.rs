//! Read-views over a wrapper's data with fallback to its defaults.
//!
//! Reads resolve from `data` first and fall back to `defaults` only when the
//! key is absent from `data`. A key present with a JSON `null` value counts as
//! set. Writes, deletes and enumeration act on `data` alone.

use serde_json::Value;

use crate::layer::DataLayer;
use crate::wrapper::FlatData;

/// Shared read-view over a wrapper.
#[derive(Debug, Clone, Copy)]
pub struct DataView<'a> {
    data: &'a FlatData,
    defaults: &'a FlatData,
}

impl<'a> DataView<'a> {
    pub(crate) fn new(data: &'a FlatData, defaults: &'a FlatData) -> Self {
        Self { data, defaults }
    }

    /// Value for `key` from data, falling back to defaults.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.data.get(key).or_else(|| self.defaults.get(key))
    }

    /// Which layer a read of `key` resolves from.
    #[must_use]
    pub fn source_of(&self, key: &str) -> Option<DataLayer> {
        if self.data.contains_key(key) {
            Some(DataLayer::Data)
        } else if self.defaults.contains_key(key) {
            Some(DataLayer::Defaults)
        } else {
            None
        }
    }

    /// Whether `key` is set in data. Defaults are not consulted.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Keys set in data.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.data.keys().map(String::as_str)
    }

    /// Entries set in data.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + use<'a> {
        self.data.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of keys set in data.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether data is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Mutable read-view over a wrapper.
///
/// Same fallback semantics as [`DataView`], plus [`set`](Self::set) and
/// [`delete`](Self::delete), which only ever touch data.
#[derive(Debug)]
pub struct DataViewMut<'a> {
    data: &'a mut FlatData,
    defaults: &'a FlatData,
}

impl<'a> DataViewMut<'a> {
    pub(crate) fn new(data: &'a mut FlatData, defaults: &'a FlatData) -> Self {
        Self { data, defaults }
    }

    /// Reborrow as a shared view.
    #[must_use]
    pub fn as_view(&self) -> DataView<'_> {
        DataView::new(self.data, self.defaults)
    }

    /// Value for `key` from data, falling back to defaults.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key).or_else(|| self.defaults.get(key))
    }

    /// Set `key` in data, returning the previous data value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data.insert(key.into(), value.into())
    }

    /// Remove `key` from data, returning the removed value. Later reads of
    /// `key` fall back to defaults.
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    /// Keys set in data.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Entries set in data.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.data.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of keys set in data.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether data is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> FlatData {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_get_prefers_data() {
        let data = map(json!({"theme": "dark"}));
        let defaults = map(json!({"theme": "light", "lang": "en"}));
        let view = DataView::new(&data, &defaults);

        assert_eq!(view.get("theme"), Some(&json!("dark")));
        assert_eq!(view.get("lang"), Some(&json!("en")));
        assert_eq!(view.get("missing"), None);
    }

    #[test]
    fn test_null_in_data_does_not_fall_back() {
        let data = map(json!({"theme": null}));
        let defaults = map(json!({"theme": "light"}));
        let view = DataView::new(&data, &defaults);

        assert_eq!(view.get("theme"), Some(&Value::Null));
        assert_eq!(view.source_of("theme"), Some(DataLayer::Data));
    }

    #[test]
    fn test_enumeration_ignores_defaults() {
        let data = map(json!({"a": 1}));
        let defaults = map(json!({"b": 2}));
        let view = DataView::new(&data, &defaults);

        assert_eq!(view.keys().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(view.entries().collect::<Vec<_>>(), vec![("a", &json!(1))]);
        assert_eq!(view.len(), 1);
        assert!(!view.contains_key("b"));
    }

    #[test]
    fn test_delete_falls_back_to_default() {
        let mut data = map(json!({"a": 1}));
        let defaults = map(json!({"a": 0}));
        let mut view = DataViewMut::new(&mut data, &defaults);

        assert_eq!(view.delete("a"), Some(json!(1)));
        assert_eq!(view.get("a"), Some(&json!(0)));
        assert!(view.is_empty());
        assert!(data.is_empty());
    }

    #[test]
    fn test_set_writes_data_only() {
        let mut data = FlatData::new();
        let defaults = map(json!({"a": 0}));
        let mut view = DataViewMut::new(&mut data, &defaults);

        assert_eq!(view.set("a", 5), None);
        assert_eq!(view.set("a", 6), Some(json!(5)));
        assert_eq!(view.as_view().get("a"), Some(&json!(6)));
        assert_eq!(defaults["a"], json!(0));
    }
}
