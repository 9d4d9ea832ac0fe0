//! Search history: the most recently used free-text filters.

pub mod model;
pub mod store;

pub use model::{MAX_SEARCH_HISTORY_SIZE, SearchHistory};
pub use store::SearchHistoryStore;
