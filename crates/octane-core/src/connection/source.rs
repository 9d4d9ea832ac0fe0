//! Access to the current connection configuration.

use std::sync::{Arc, RwLock};

use super::model::{ConnectionConfig, ConnectionIdentity};

/// Supplies the connection configuration that is current right now.
///
/// Stores call this on every access, so implementations must reflect edits to
/// the connection settings immediately.
pub trait ConnectionSource: Send + Sync {
    /// Returns a snapshot of the current configuration.
    fn current(&self) -> ConnectionConfig;

    /// Computes the identity of the current configuration.
    fn identity(&self) -> ConnectionIdentity {
        self.current().identity()
    }
}

/// Cloneable handle to a connection configuration the host can update.
///
/// All clones observe the same configuration.
#[derive(Debug, Clone, Default)]
pub struct SharedConnection {
    inner: Arc<RwLock<ConnectionConfig>>,
}

impl SharedConnection {
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Replaces the configuration seen by every holder of this handle.
    pub fn update(&self, config: ConnectionConfig) {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = config;
    }
}

impl ConnectionSource for SharedConnection {
    fn current(&self) -> ConnectionConfig {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
