//! Unified path management for Octane configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/octane/            # Config directory (platform config dir)
//! ├── connection.toml          # Connection settings
//! ├── settings.json            # Persisted UI state (history, bookmarks, fields)
//! └── logs/                    # Application logs
//!     └── octane-session.log.YYYY-MM-DD
//! ```

use octane_core::OctaneError;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "octane";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for OctaneError {
    fn from(err: PathError) -> Self {
        OctaneError::config(err.to_string())
    }
}

/// Resolves the files the extension reads and writes.
///
/// With a base directory every path lives under it, which is how tests and
/// portable installs keep their state out of the user's config directory.
#[derive(Debug, Clone, Default)]
pub struct OctanePaths {
    base: Option<PathBuf>,
}

impl OctanePaths {
    pub fn new(base: Option<PathBuf>) -> Self {
        Self { base }
    }

    /// Returns the Octane configuration directory.
    ///
    /// - `Ok(PathBuf)`: the base directory, or e.g. `~/.config/octane/`
    /// - `Err(PathError::ConfigDirNotFound)`: no base and no platform config dir
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    /// Returns the path of `connection.toml`.
    pub fn connection_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("connection.toml"))
    }

    /// Returns the path of `settings.json`.
    pub fn settings_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("settings.json"))
    }

    /// Returns the logs directory.
    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_dir() {
        // Headless CI machines may not have a config dir at all.
        if let Ok(config_dir) = OctanePaths::default().config_dir() {
            assert!(config_dir.ends_with("octane"));
        }
    }

    #[test]
    fn test_files_live_under_base() {
        let paths = OctanePaths::new(Some(PathBuf::from("/tmp/octane-test")));
        let config_dir = paths.config_dir().unwrap();

        let connection_file = paths.connection_file().unwrap();
        assert!(connection_file.ends_with("connection.toml"));
        assert!(connection_file.starts_with(&config_dir));

        let settings_file = paths.settings_file().unwrap();
        assert!(settings_file.ends_with("settings.json"));
        assert!(settings_file.starts_with(&config_dir));

        let logs_dir = paths.logs_dir().unwrap();
        assert!(logs_dir.ends_with("logs"));
        assert!(logs_dir.starts_with(&config_dir));
    }

    #[test]
    fn test_path_error_converts_to_config_error() {
        let err: OctaneError = PathError::ConfigDirNotFound.into();
        assert!(err.is_config());
    }
}
