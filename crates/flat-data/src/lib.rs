#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Flat key/value data with layered defaults.
//!
//! [`FlatDataWrapper`] holds two flat mappings: explicit `data`, and
//! `defaults` read beneath it. Reads fall back from data to defaults per key;
//! writes, deletes and enumeration only ever see data.
//!
//! # Usage
//!
//! ```rust
//! use flat_data::FlatDataWrapper;
//! use serde_json::json;
//!
//! let defaults = json!({"theme": "light", "font_size": 12});
//! let mut settings = FlatDataWrapper::with_parts(None, defaults.as_object(), Some("user-42"));
//!
//! settings.merge(&json!({"theme": "dark"})).unwrap();
//!
//! assert_eq!(settings.get("theme"), Some(&json!("dark")));
//! assert_eq!(settings.get("font_size"), Some(&json!(12)));
//! assert_eq!(settings.keys().collect::<Vec<_>>(), vec!["theme"]);
//! ```
//!
//! # Merging
//!
//! [`FlatDataWrapper::merge`] is shallow. Keys from the source overwrite
//! keys in data and nested objects or arrays are replaced wholesale. Merging
//! another wrapper uses only its data, never its defaults. A JSON value that
//! is not an object is rejected with [`FlatDataError::InvalidArgument`].
//!
//! # Concurrency
//!
//! The wrapper is plain owned data. Mutation takes `&mut self`, so sharing
//! one across threads needs external synchronization such as a `Mutex`.

/// Error types.
pub mod error;
/// Layer tracking and resolved snapshots.
pub mod layer;
/// Parsing flat mappings from JSON and TOML text.
pub mod loader;
/// Wrapper type checks and unwrapping.
pub mod resolve;
/// Read-views with fallback to defaults.
pub mod view;
/// The flat data wrapper.
pub mod wrapper;

pub use error::{FlatDataError, FlatDataResult};
pub use layer::{DataLayer, KeySources};
pub use resolve::{DataRef, is_data_wrapper, resolve_data_from_wrapper};
pub use view::{DataView, DataViewMut};
pub use wrapper::{FlatData, FlatDataWrapper};
