//! Connection-scoped persisted state.
//!
//! [`ScopedStore`] owns one piece of session-local state together with the
//! settings backend it is persisted to and the connection it belongs to. Before
//! every read or mutation it recomputes the connection identity; if the user has
//! switched server, shared space, workspace or account since the state was
//! created, the state is thrown away and replaced by an empty one stamped with
//! the new identity. Stale data from one workspace never surfaces in another.
//!
//! Persistence is best effort. A blob that cannot be read back yields an empty
//! state, and a failed write is logged and otherwise ignored: the in-memory state
//! stays authoritative for the rest of the session.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::connection::{ConnectionIdentity, ConnectionSource};
use crate::error::Result;
use crate::settings::SettingsStore;

/// State that is stamped with the connection identity it was created under.
pub trait ScopedState: Serialize + DeserializeOwned {
    /// Settings key the state is persisted under.
    const KEY: &'static str;

    /// Identity this state belongs to.
    fn identity(&self) -> &ConnectionIdentity;

    /// Creates an empty state for `identity`.
    fn empty(identity: ConnectionIdentity) -> Self;
}

/// Persisted state guarded by the connection identity.
///
/// [`read`](Self::read) and [`update`](Self::update) are the only ways in, so
/// every change goes through the guard and is written back.
///
/// ```compile_fail
/// use octane_core::history::SearchHistory;
/// use octane_core::scoped::ScopedStore;
///
/// fn bypass(store: &mut ScopedStore<SearchHistory>) {
///     store.guard().queries.clear();
/// }
/// ```
pub struct ScopedStore<T> {
    state: T,
    settings: Arc<dyn SettingsStore>,
    connection: Arc<dyn ConnectionSource>,
}

impl<T: ScopedState> ScopedStore<T> {
    /// Loads the state persisted under `T::KEY`.
    ///
    /// A missing or unreadable blob yields an empty state for the current
    /// identity. A blob from a different identity is kept as loaded and reset
    /// by the guard on first access.
    pub fn load(settings: Arc<dyn SettingsStore>, connection: Arc<dyn ConnectionSource>) -> Self {
        let state = match settings.read(T::KEY) {
            Some(blob) => match serde_json::from_str::<T>(&blob) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!(key = T::KEY, error = %e, "discarding unreadable persisted state");
                    T::empty(connection.identity())
                }
            },
            None => {
                tracing::debug!(key = T::KEY, "no persisted state, starting empty");
                T::empty(connection.identity())
            }
        };

        Self {
            state,
            settings,
            connection,
        }
    }

    /// Validates the state against the current connection identity.
    ///
    /// On mismatch the state is replaced by an empty one for the new identity,
    /// which is persisted right away.
    fn guard(&mut self) -> &mut T {
        let current = self.connection.identity();
        if *self.state.identity() != current {
            tracing::info!(
                key = T::KEY,
                previous = %self.state.identity(),
                identity = %current,
                "connection identity changed, resetting state"
            );
            self.state = T::empty(current);
            self.persist();
        }
        &mut self.state
    }

    /// Runs the guard, then reads from the state.
    pub fn read<R>(&mut self, f: impl FnOnce(&T) -> R) -> R {
        f(self.guard())
    }

    /// Runs the guard, then mutates the state.
    ///
    /// `f` returns whether it changed anything; only changes are persisted.
    pub fn update(&mut self, f: impl FnOnce(&mut T) -> bool) -> bool {
        let changed = f(self.guard());
        if changed {
            self.persist();
        }
        changed
    }

    /// Writes the state to the settings backend, logging and discarding failures.
    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!(key = T::KEY, error = %e, "failed to persist state, keeping it in memory");
        }
    }

    fn try_persist(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.state)?;
        self.settings.write(T::KEY, blob)?;
        self.settings.commit()
    }
}
