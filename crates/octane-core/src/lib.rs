//! Workspace session state for the ALM Octane IDE integration.
//!
//! The IDE keeps a little UI state per connected workspace: the recently used
//! search filters, the entity detail windows to reopen after a restart, the
//! active item, and which fields each detail window shows. This crate holds
//! that state in memory, persists it through a host supplied
//! [`SettingsStore`](settings::SettingsStore), and resets the connection-scoped
//! parts whenever the server, shared space, workspace or user changes.

pub mod bookmark;
pub mod connection;
pub mod error;
pub mod fields;
pub mod history;
pub mod lifecycle;
pub mod scoped;
pub mod session;
pub mod settings;

mod serde_helpers;

#[cfg(test)]
mod test_support;

pub use bookmark::{EntityBookmark, EntityId};
pub use connection::{ConnectionConfig, ConnectionIdentity, ConnectionSource, SharedConnection};
pub use error::{OctaneError, Result};
pub use fields::FieldsCache;
pub use history::SearchHistoryStore;
pub use lifecycle::ShutdownFlag;
pub use session::SessionBookmarkStore;
pub use settings::{MemorySettingsStore, SettingsStore};
