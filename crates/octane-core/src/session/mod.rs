//! Session bookmarks: detail windows to restore and the active item.

pub mod model;
pub mod store;

pub use model::WorkspaceSession;
pub use store::SessionBookmarkStore;
