//! Fixtures shared by the unit tests of this crate.

use crate::connection::{ConnectionConfig, SharedConnection};
use crate::error::{OctaneError, Result};
use crate::settings::SettingsStore;

/// Settings backend whose writes always fail.
pub struct FailingSettingsStore;

impl SettingsStore for FailingSettingsStore {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _value: String) -> Result<()> {
        Err(OctaneError::io("disk full"))
    }

    fn commit(&self) -> Result<()> {
        Err(OctaneError::io("disk full"))
    }
}

pub fn primary_workspace() -> ConnectionConfig {
    ConnectionConfig::new("https://octane.example.com", 1001, 1002, "jane")
}

pub fn other_workspace() -> ConnectionConfig {
    ConnectionConfig::new("https://octane.example.com", 1001, 2002, "jane")
}

pub fn connection() -> SharedConnection {
    SharedConnection::new(primary_workspace())
}
