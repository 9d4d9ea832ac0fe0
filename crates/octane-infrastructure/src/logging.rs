//! Logging initialization.
//!
//! Events go to stderr and, when a log directory is configured, to a daily
//! rotated file (`octane-session.log.YYYY-MM-DD`). The `OCTANE_LOG` environment
//! variable overrides the configured level using `EnvFilter` directives.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::paths::OctanePaths;

/// Environment variable holding filter directives, e.g. `octane_core=debug`.
pub const LOG_ENV: &str = "OCTANE_LOG";

const LOG_FILE_PREFIX: &str = "octane-session.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive when `OCTANE_LOG` is unset.
    pub level: String,
    /// Directory for rotated log files; `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl LoggingConfig {
    /// Logs into the logs directory resolved by `paths`.
    pub fn for_paths(paths: &OctanePaths) -> Self {
        Self {
            log_dir: paths.logs_dir().ok(),
            ..Self::default()
        }
    }
}

/// Installs the global subscriber.
///
/// Keep the returned guard alive for as long as file logging should flush.
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("invalid log level '{}'", config.level))?;

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    let registry = tracing_subscriber::registry().with(filter).with(stderr_layer);

    match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);

            registry
                .with(file_layer)
                .try_init()
                .context("logging already initialized")?;
            Ok(Some(guard))
        }
        None => {
            registry.try_init().context("logging already initialized")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_for_paths_uses_logs_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OctanePaths::new(Some(temp_dir.path().to_path_buf()));
        let config = LoggingConfig::for_paths(&paths);
        assert_eq!(config.log_dir, Some(temp_dir.path().join("logs")));
    }

    #[test]
    fn test_second_initialization_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config = LoggingConfig {
            log_dir: Some(temp_dir.path().join("logs")),
            ..LoggingConfig::default()
        };

        let _guard = init_logging(&config);

        assert!(init_logging(&config).is_err());
        assert!(temp_dir.path().join("logs").is_dir());
    }
}
