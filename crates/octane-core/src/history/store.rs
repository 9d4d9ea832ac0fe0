//! Search history store.

use std::sync::Arc;

use super::model::SearchHistory;
use crate::connection::ConnectionSource;
use crate::scoped::ScopedStore;
use crate::settings::SettingsStore;

/// Keeps the search history of the current connection.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use octane_core::connection::{ConnectionConfig, SharedConnection};
/// use octane_core::history::SearchHistoryStore;
/// use octane_core::settings::MemorySettingsStore;
///
/// let connection = SharedConnection::new(ConnectionConfig::new("https://octane", 1, 2, "jane"));
/// let mut store = SearchHistoryStore::load(
///     Arc::new(MemorySettingsStore::new()),
///     Arc::new(connection),
/// );
///
/// store.update_history("A");
/// store.update_history("B");
/// store.update_history("A");
/// assert_eq!(store.history(), vec!["A", "B"]);
/// ```
pub struct SearchHistoryStore {
    inner: ScopedStore<SearchHistory>,
}

impl SearchHistoryStore {
    /// Loads the persisted history. Never fails; see [`ScopedStore::load`].
    pub fn load(settings: Arc<dyn SettingsStore>, connection: Arc<dyn ConnectionSource>) -> Self {
        Self {
            inner: ScopedStore::load(settings, connection),
        }
    }

    /// Returns the history, most recent first.
    pub fn history(&mut self) -> Vec<String> {
        self.inner.read(|history| history.queries.clone())
    }

    /// Records `filter` as the most recently used one. Empty filters are ignored.
    pub fn update_history<'a>(&mut self, filter: impl Into<Option<&'a str>>) {
        let Some(filter) = filter.into().filter(|f| !f.is_empty()) else {
            return;
        };

        self.inner.update(|history| {
            history.record(filter);
            true
        });
    }
}
