//! Settings store backed by a single JSON file.

use octane_core::error::{OctaneError, Result};
use octane_core::settings::SettingsStore;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::storage::{AtomicFile, FileFormat};

/// [`SettingsStore`] keeping every value in one JSON object on disk.
///
/// ```json
/// {
///   "search_history": "{\"id\":\"...\",\"queries\":[\"defect\"]}",
///   "workspace_session": "{\"id\":\"...\",\"entities\":[]}"
/// }
/// ```
///
/// The file is read once when the store is opened. Writes are staged in memory
/// and [`commit`](SettingsStore::commit) rewrites the whole file atomically.
pub struct JsonFileSettingsStore {
    file: AtomicFile<BTreeMap<String, String>>,
    values: Mutex<BTreeMap<String, String>>,
}

impl JsonFileSettingsStore {
    /// Opens the store at `path`.
    ///
    /// A missing file starts an empty store. So does an unreadable one, which
    /// is overwritten by the next commit.
    pub fn open(path: PathBuf) -> Self {
        let file = AtomicFile::new(path, FileFormat::Json);
        let values = match file.load() {
            Ok(Some(values)) => values,
            Ok(None) => {
                tracing::debug!(path = %file.path().display(), "settings file not found, starting empty");
                BTreeMap::new()
            }
            Err(e) => {
                tracing::warn!(path = %file.path().display(), error = %e, "settings file unreadable, starting empty");
                BTreeMap::new()
            }
        };

        Self {
            file,
            values: Mutex::new(values),
        }
    }

    fn values(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| OctaneError::internal("settings lock poisoned"))
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: String) -> Result<()> {
        self.values()?.insert(key.to_string(), value);
        Ok(())
    }

    fn commit(&self) -> Result<()> {
        let values = self.values()?;
        self.file.save(&values)?;
        Ok(())
    }
}
