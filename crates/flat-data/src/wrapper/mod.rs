//! The flat data wrapper.
//!
//! A [`FlatDataWrapper`] owns a flat mapping of explicit `data`, a flat
//! mapping of `defaults` read beneath it, and an optional opaque `id` that
//! settings or user-data stores use to associate the wrapper with a
//! persistence key.
//!
//! Values are never merged recursively: objects and arrays are atomic and
//! [`merge`](FlatDataWrapper::merge) replaces them wholesale.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::FlatDataResult;
use crate::resolve::{DataRef, resolve_data_from_wrapper};
use crate::view::{DataView, DataViewMut};

/// A flat key/value mapping.
pub type FlatData = serde_json::Map<String, Value>;

/// Flat data with defaults accessible through a read-view.
///
/// Mainly useful for flat key/value settings or user data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatDataWrapper {
    /// Explicitly set values.
    pub(crate) data: FlatData,
    /// Values read when a key is absent from `data`. Never mutated after
    /// construction.
    defaults: FlatData,
    /// Opaque identifier for external stores.
    #[serde(deserialize_with = "deserialize_id")]
    id: Option<String>,
}

impl FlatDataWrapper {
    /// Create an empty wrapper with no defaults and no id.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wrapper from optional parts.
    ///
    /// `data` and `defaults` are copied one level deep, so later changes to
    /// the caller's maps do not show through. Missing maps become empty and
    /// a missing or empty `id` becomes `None`.
    #[must_use]
    pub fn with_parts(
        data: Option<&FlatData>,
        defaults: Option<&FlatData>,
        id: Option<&str>,
    ) -> Self {
        Self {
            data: data.cloned().unwrap_or_default(),
            defaults: defaults.cloned().unwrap_or_default(),
            id: normalize_id(id.map(str::to_owned)),
        }
    }

    /// Replace the data.
    #[must_use]
    pub fn with_data(mut self, data: FlatData) -> Self {
        self.data = data;
        self
    }

    /// Replace the defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: FlatData) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set the identifier. An empty string clears it.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = normalize_id(Some(id.into()));
        self
    }

    /// Explicitly set values, without defaults.
    #[must_use]
    pub fn data(&self) -> &FlatData {
        &self.data
    }

    /// Default values.
    #[must_use]
    pub fn defaults(&self) -> &FlatData {
        &self.defaults
    }

    /// Identifier this data is associated with, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Consume the wrapper, returning its data.
    #[must_use]
    pub fn into_data(self) -> FlatData {
        self.data
    }

    /// Read-view with fallback to defaults.
    ///
    /// The view is a plain borrow, so asking for it repeatedly costs nothing
    /// and always observes the current data.
    #[must_use]
    pub fn view(&self) -> DataView<'_> {
        DataView::new(&self.data, &self.defaults)
    }

    /// Mutable read-view. Writes and deletes go to data.
    #[must_use]
    pub fn view_mut(&mut self) -> DataViewMut<'_> {
        DataViewMut::new(&mut self.data, &self.defaults)
    }

    /// Value for `key`, falling back to defaults when absent from data.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.view().get(key)
    }

    /// Set `key` in data, returning the previous data value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.view_mut().set(key, value)
    }

    /// Remove `key` from data, returning the removed value.
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        self.view_mut().delete(key)
    }

    /// Keys set in data.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.view().keys()
    }

    /// Entries set in data.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.view().entries()
    }

    /// Shallow-merge `source` into data.
    ///
    /// `source` may be another wrapper (only its data is used, never its
    /// defaults), a flat mapping, or a JSON object. Keys in `source`
    /// overwrite existing keys; nested values are replaced, not combined.
    ///
    /// # Errors
    ///
    /// Returns [`FlatDataError::InvalidArgument`](crate::FlatDataError::InvalidArgument)
    /// if `source` is a JSON value other than an object. Data is left
    /// unchanged in that case.
    pub fn merge<'a>(&mut self, source: impl Into<DataRef<'a>>) -> FlatDataResult<&mut Self> {
        let source = source.into();
        let entries = match resolve_data_from_wrapper(source).into_map() {
            Ok(entries) => entries,
            Err(e) => {
                debug!(id = ?self.id, source = source.kind(), "rejected merge source");
                return Err(e);
            },
        };

        for (key, value) in entries {
            self.data.insert(key.clone(), value.clone());
        }

        debug!(
            id = ?self.id,
            source = source.kind(),
            merged = entries.len(),
            total = self.data.len(),
            "merged flat data"
        );
        Ok(self)
    }
}

fn normalize_id(id: Option<String>) -> Option<String> {
    id.filter(|id| !id.is_empty())
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(normalize_id(Option::<String>::deserialize(deserializer)?))
}
