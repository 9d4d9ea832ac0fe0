//! Connection configuration service.

use octane_core::connection::ConnectionConfig;
use octane_core::error::Result;
use std::path::PathBuf;

use crate::paths::OctanePaths;
use crate::storage::{AtomicFile, FileFormat};

/// Reads and writes `connection.toml`.
pub struct ConnectionConfigService {
    file: AtomicFile<ConnectionConfig>,
}

impl ConnectionConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path, FileFormat::Toml),
        }
    }

    /// Uses the connection file resolved by `paths`.
    pub fn from_paths(paths: &OctanePaths) -> Result<Self> {
        Ok(Self::new(paths.connection_file()?))
    }

    /// Loads the connection settings.
    ///
    /// A missing or empty file yields the default (unconfigured) settings; a
    /// file that cannot be parsed is an error.
    pub fn load(&self) -> Result<ConnectionConfig> {
        let config = self.file.load()?.unwrap_or_default();
        Ok(config)
    }

    pub fn save(&self, config: &ConnectionConfig) -> Result<()> {
        self.file.save(config)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_default() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConnectionConfigService::new(temp_dir.path().join("connection.toml"));
        assert_eq!(service.load().unwrap(), ConnectionConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OctanePaths::new(Some(temp_dir.path().to_path_buf()));
        let service = ConnectionConfigService::from_paths(&paths).unwrap();
        let config = ConnectionConfig::new("https://octane.example.com", 1001, 1002, "jane");

        service.save(&config).unwrap();

        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn test_reads_hand_written_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("connection.toml");
        fs::write(
            &path,
            "url = \"https://octane.example.com\"\nshared_space_id = 7\nworkspace_id = 8\nuser = \"sam\"\n",
        )
        .unwrap();

        let config = ConnectionConfigService::new(path).load().unwrap();
        assert_eq!(config.identity().as_str(), "https://octane.example.com78sam");
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("connection.toml");
        fs::write(&path, "url = ").unwrap();

        let err = ConnectionConfigService::new(path).load().unwrap_err();
        assert!(err.is_serialization());
    }
}
