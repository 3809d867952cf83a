//! Type checks and unwrapping for values that may be data wrappers.
//!
//! [`DataRef`] is the borrowed form of "anything a caller might hand to
//! [`FlatDataWrapper::merge`]": another wrapper, a flat mapping, or a dynamic
//! JSON value whose shape is only known at runtime.

use serde_json::Value;

use crate::error::{FlatDataError, FlatDataResult, value_kind};
use crate::wrapper::{FlatData, FlatDataWrapper};

/// A borrowed value that may or may not be a [`FlatDataWrapper`].
#[derive(Debug, Clone, Copy)]
pub enum DataRef<'a> {
    /// A data wrapper.
    Wrapper(&'a FlatDataWrapper),
    /// A plain flat mapping.
    Map(&'a FlatData),
    /// An arbitrary JSON value.
    Value(&'a Value),
}

impl<'a> DataRef<'a> {
    /// Resolve to a flat mapping.
    ///
    /// Wrappers resolve to their `data` (never their defaults) and JSON
    /// objects to their entries.
    ///
    /// # Errors
    ///
    /// Returns [`FlatDataError::InvalidArgument`] for any JSON value that is
    /// not an object, including `null`.
    pub fn into_map(self) -> FlatDataResult<&'a FlatData> {
        match resolve_data_from_wrapper(self) {
            Self::Map(map) | Self::Value(Value::Object(map)) => Ok(map),
            Self::Wrapper(wrapper) => Ok(wrapper.data()),
            Self::Value(other) => Err(FlatDataError::not_a_mapping(other)),
        }
    }

    /// Short description of the referenced value, for log fields.
    #[must_use]
    pub fn kind(self) -> &'static str {
        match self {
            Self::Wrapper(_) => "wrapper",
            Self::Map(_) => "object",
            Self::Value(value) => value_kind(value),
        }
    }
}

impl<'a> From<&'a FlatDataWrapper> for DataRef<'a> {
    fn from(wrapper: &'a FlatDataWrapper) -> Self {
        Self::Wrapper(wrapper)
    }
}

impl<'a> From<&'a FlatData> for DataRef<'a> {
    fn from(map: &'a FlatData) -> Self {
        Self::Map(map)
    }
}

impl<'a> From<&'a Value> for DataRef<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Value(value)
    }
}

/// If `value` is a [`FlatDataWrapper`], returns its `data`; otherwise returns
/// `value` unchanged.
#[must_use]
pub fn resolve_data_from_wrapper<'a>(value: impl Into<DataRef<'a>>) -> DataRef<'a> {
    match value.into() {
        DataRef::Wrapper(wrapper) => DataRef::Map(wrapper.data()),
        other => other,
    }
}

/// Whether `value` is a [`FlatDataWrapper`].
#[must_use]
pub fn is_data_wrapper<'a>(value: impl Into<DataRef<'a>>) -> bool {
    matches!(value.into(), DataRef::Wrapper(_))
}
