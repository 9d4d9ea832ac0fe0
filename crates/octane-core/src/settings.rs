//! Key/value settings backend consumed by the stores.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::error::{OctaneError, Result};

/// Settings key of the search history blob.
pub const SEARCH_HISTORY_KEY: &str = "search_history";
/// Settings key of the workspace session (bookmarks) blob.
pub const WORKSPACE_SESSION_KEY: &str = "workspace_session";
/// Settings key of the customized visible fields blob.
pub const VISIBLE_FIELDS_KEY: &str = "visible_fields";

/// A store of serialized text blobs keyed by name.
///
/// Mirrors the settings facility of the hosting IDE: values written with
/// [`write`](SettingsStore::write) become durable once [`commit`](SettingsStore::commit)
/// succeeds.
pub trait SettingsStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Stages `value` under `key`.
    fn write(&self, key: &str, value: String) -> Result<()>;

    /// Makes all staged values durable.
    fn commit(&self) -> Result<()>;
}

/// Settings store that lives only in memory.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a single value.
    pub fn with_value(key: &str, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.into());
        }
        store
    }
}

impl SettingsStore for MemorySettingsStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: String) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| OctaneError::internal("settings lock poisoned"))?;
        values.insert(key.to_string(), value);
        Ok(())
    }

    fn commit(&self) -> Result<()> {
        Ok(())
    }
}
