//! File-backed persistence and process setup for the Octane workspace session.

pub mod config_service;
pub mod json_settings_store;
pub mod logging;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConnectionConfigService;
pub use crate::json_settings_store::JsonFileSettingsStore;
pub use crate::logging::{LoggingConfig, init_logging};
pub use crate::paths::OctanePaths;
