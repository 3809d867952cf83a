//! Tracking which layer a key resolves from.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::wrapper::{FlatData, FlatDataWrapper};

/// Which layer of a wrapper a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataLayer {
    /// Explicitly set data.
    Data,
    /// Default values.
    Defaults,
}

impl std::fmt::Display for DataLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Data => write!(f, "data"),
            Self::Defaults => write!(f, "defaults"),
        }
    }
}

/// Tracks which layer each visible key resolves from.
pub type KeySources = HashMap<String, DataLayer>;

impl FlatDataWrapper {
    /// Which layer a read of `key` resolves from, or `None` if neither layer
    /// has it.
    #[must_use]
    pub fn source_of(&self, key: &str) -> Option<DataLayer> {
        self.view().source_of(key)
    }

    /// Layer of every key readable through the fallback chain.
    #[must_use]
    pub fn key_sources(&self) -> KeySources {
        let mut sources: KeySources = self
            .defaults()
            .keys()
            .map(|key| (key.clone(), DataLayer::Defaults))
            .collect();
        for key in self.data().keys() {
            sources.insert(key.clone(), DataLayer::Data);
        }
        sources
    }

    /// Snapshot of defaults overlaid with data.
    ///
    /// Unlike [`keys`](Self::keys), this includes keys only present in
    /// defaults.
    #[must_use]
    pub fn resolved(&self) -> FlatData {
        let mut resolved = self.defaults().clone();
        for (key, value) in self.data() {
            resolved.insert(key.clone(), value.clone());
        }
        resolved
    }

    /// Keys present in defaults but not set in data.
    #[must_use]
    pub fn missing_from_data(&self) -> Vec<&str> {
        self.defaults()
            .keys()
            .filter(|key| !self.data().contains_key(key.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Remove `key` from data so it reads from defaults again.
    pub fn reset(&mut self, key: &str) -> Option<Value> {
        let removed = self.delete(key);
        if removed.is_some() {
            trace!(id = ?self.id(), key, "reset key to default");
        }
        removed
    }

    /// Remove all data so every key reads from defaults.
    pub fn clear(&mut self) {
        self.data.clear();
        trace!(id = ?self.id(), "cleared data");
    }
}
