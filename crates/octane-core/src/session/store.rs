//! Session bookmark store.

use std::sync::Arc;

use super::model::WorkspaceSession;
use crate::bookmark::EntityBookmark;
use crate::connection::ConnectionSource;
use crate::lifecycle::ShutdownFlag;
use crate::scoped::ScopedStore;
use crate::settings::SettingsStore;

/// Keeps the detail windows to restore and the active item of the current
/// connection.
///
/// Once the shutdown flag is raised, unregistering becomes a no-op: window
/// close events fired while the IDE tears down must not wipe the set of
/// windows to reopen on the next start.
pub struct SessionBookmarkStore {
    inner: ScopedStore<WorkspaceSession>,
    shutdown: ShutdownFlag,
}

impl SessionBookmarkStore {
    /// Loads the persisted session. Never fails; see [`ScopedStore::load`].
    pub fn load(
        settings: Arc<dyn SettingsStore>,
        connection: Arc<dyn ConnectionSource>,
        shutdown: ShutdownFlag,
    ) -> Self {
        Self {
            inner: ScopedStore::load(settings, connection),
            shutdown,
        }
    }

    /// Registers an entity whose detail window is open.
    pub fn register_entity(&mut self, entity: &EntityBookmark) {
        self.inner.update(|session| session.register(entity));
    }

    /// Forgets an entity whose detail window was closed.
    pub fn unregister_entity(&mut self, entity: &EntityBookmark) {
        if self.is_shutting_down() {
            tracing::debug!(id = %entity.id, "ignoring unregister during shutdown");
            return;
        }
        self.inner.update(|session| session.unregister(entity));
    }

    /// Forgets all registered entities.
    pub fn unregister_all(&mut self) {
        if self.is_shutting_down() {
            tracing::debug!("ignoring unregister_all during shutdown");
            return;
        }
        self.inner.update(|session| {
            let changed = !session.entities.is_empty();
            session.entities.clear();
            changed
        });
    }

    /// Returns the registered entities in registration order.
    pub fn all_registered(&mut self) -> Vec<EntityBookmark> {
        self.inner.read(|session| session.entities.clone())
    }

    pub fn set_active_entity(&mut self, entity: &EntityBookmark) {
        self.inner.update(|session| {
            let unchanged = session
                .active_entity()
                .is_some_and(|active| active == *entity && active.sub_type == entity.sub_type);
            session.set_active_entity(entity);
            !unchanged
        });
    }

    pub fn active_entity(&mut self) -> Option<EntityBookmark> {
        self.inner.read(|session| session.active_entity())
    }

    pub fn clear_active_entity(&mut self) {
        self.inner.update(|session| {
            let changed = session.active_entity().is_some();
            session.clear_active_entity();
            changed
        });
    }

    /// Returns whether `entity` is the active item, comparing `(id, base_type)`.
    pub fn is_active_item<'a>(&mut self, entity: impl Into<Option<&'a EntityBookmark>>) -> bool {
        let Some(entity) = entity.into() else {
            return false;
        };
        self.active_entity()
            .is_some_and(|active| active.is_same_entity(entity))
    }

    /// Raises the shutdown flag shared with the host.
    pub fn mark_shutting_down(&self) {
        self.shutdown.mark();
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.is_set()
    }
}
