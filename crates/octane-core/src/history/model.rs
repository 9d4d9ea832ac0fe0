//! Search history model.

use serde::{Deserialize, Serialize};

use crate::connection::ConnectionIdentity;
use crate::scoped::ScopedState;
use crate::serde_helpers::null_as_default;
use crate::settings::SEARCH_HISTORY_KEY;

/// Maximum number of filters kept in the search history.
pub const MAX_SEARCH_HISTORY_SIZE: usize = 5;

/// Recently used search filters, most recent first.
///
/// Holds at most [`MAX_SEARCH_HISTORY_SIZE`] distinct entries.
///
/// # Serialized form
///
/// ```json
/// { "id": "<connection identity>", "queries": ["defect", "login"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistory {
    pub id: ConnectionIdentity,
    #[serde(default, deserialize_with = "null_as_default")]
    pub queries: Vec<String>,
}

impl SearchHistory {
    pub fn new(id: ConnectionIdentity) -> Self {
        Self {
            id,
            queries: Vec::new(),
        }
    }

    /// Moves `filter` to the front, dropping any earlier occurrence and
    /// truncating to [`MAX_SEARCH_HISTORY_SIZE`].
    pub fn record(&mut self, filter: &str) {
        self.queries.retain(|query| query != filter);
        self.queries.insert(0, filter.to_string());
        self.queries.truncate(MAX_SEARCH_HISTORY_SIZE);
    }
}

impl ScopedState for SearchHistory {
    const KEY: &'static str = SEARCH_HISTORY_KEY;

    fn identity(&self) -> &ConnectionIdentity {
        &self.id
    }

    fn empty(identity: ConnectionIdentity) -> Self {
        Self::new(identity)
    }
}
