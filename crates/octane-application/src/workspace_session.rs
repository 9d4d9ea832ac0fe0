//! Wiring of the workspace session stores.

use anyhow::{Context, Result};
use std::sync::Arc;

use octane_core::{
    ConnectionConfig, ConnectionSource, EntityBookmark, FieldsCache, SearchHistoryStore,
    SessionBookmarkStore, SettingsStore, SharedConnection, ShutdownFlag,
};
use octane_infrastructure::{ConnectionConfigService, JsonFileSettingsStore, OctanePaths};

/// Detail windows to reopen after a restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestorePlan {
    /// Registered entities, in the order they were opened.
    pub registered: Vec<EntityBookmark>,
    /// The item that was active, if any.
    pub active: Option<EntityBookmark>,
}

/// Owns every piece of per-workspace UI state of one extension instance.
///
/// The host builds exactly one of these when the extension loads and hands
/// references to the tool windows that need it.
pub struct WorkspaceSessionContext {
    connection: SharedConnection,
    shutdown: ShutdownFlag,
    history: SearchHistoryStore,
    bookmarks: SessionBookmarkStore,
    fields: FieldsCache,
    config_service: Option<ConnectionConfigService>,
}

impl WorkspaceSessionContext {
    /// Wires the stores onto an explicit settings backend and connection.
    pub fn new(settings: Arc<dyn SettingsStore>, connection: SharedConnection) -> Self {
        let shutdown = ShutdownFlag::new();
        let source: Arc<dyn ConnectionSource> = Arc::new(connection.clone());

        Self {
            history: SearchHistoryStore::load(settings.clone(), source.clone()),
            bookmarks: SessionBookmarkStore::load(settings.clone(), source, shutdown.clone()),
            fields: FieldsCache::load(settings),
            connection,
            shutdown,
            config_service: None,
        }
    }

    /// Loads connection settings and persisted state from the files resolved by `paths`.
    pub fn bootstrap(paths: &OctanePaths) -> Result<Self> {
        let config_service = ConnectionConfigService::from_paths(paths)
            .context("failed to resolve connection settings path")?;
        let config = config_service
            .load()
            .context("failed to load connection settings")?;

        let settings_file = paths
            .settings_file()
            .context("failed to resolve settings path")?;
        let settings: Arc<dyn SettingsStore> = Arc::new(JsonFileSettingsStore::open(settings_file));

        tracing::info!(identity = %config.identity(), "[Bootstrap] Workspace session loaded");

        let mut context = Self::new(settings, SharedConnection::new(config));
        context.config_service = Some(config_service);
        Ok(context)
    }

    pub fn connection(&self) -> ConnectionConfig {
        self.connection.current()
    }

    /// Switches to new connection settings and saves them when file backed.
    ///
    /// Connection-scoped state is reset lazily, on the next access to each store.
    pub fn apply_connection(&mut self, config: ConnectionConfig) -> Result<()> {
        if let Some(service) = &self.config_service {
            service
                .save(&config)
                .context("failed to save connection settings")?;
        }
        tracing::info!(identity = %config.identity(), "Connection settings changed");
        self.connection.update(config);
        Ok(())
    }

    pub fn history(&mut self) -> &mut SearchHistoryStore {
        &mut self.history
    }

    pub fn bookmarks(&mut self) -> &mut SessionBookmarkStore {
        &mut self.bookmarks
    }

    pub fn fields(&mut self) -> &mut FieldsCache {
        &mut self.fields
    }

    /// Returns the detail windows to reopen for the current connection.
    pub fn restore_plan(&mut self) -> RestorePlan {
        RestorePlan {
            registered: self.bookmarks.all_registered(),
            active: self.bookmarks.active_entity(),
        }
    }

    /// Signals that the IDE is shutting down.
    ///
    /// From here on closing detail windows no longer unregisters them, so they
    /// are reopened on the next start.
    pub fn begin_shutdown(&self) {
        tracing::info!("Shutdown started, freezing registered entities");
        self.shutdown.mark();
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.is_set()
    }
}
