//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` in the motodb config
//! directory and caches it for the lifetime of the service.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use motodb_core::config::RootConfig;
use motodb_core::error::{MotoError, Result};

use crate::paths::MotodbPaths;

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service reading `config.toml` under the given config directory.
    pub fn new(paths: &MotodbPaths) -> Result<Self> {
        Ok(Self::from_file(paths.config_file()?))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A missing or empty file yields the defaults; a file that fails to
    /// parse is an error.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| MotoError::internal("config cache lock poisoned"))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        {
            let mut write_lock = self
                .config
                .write()
                .map_err(|_| MotoError::internal("config cache lock poisoned"))?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    /// Writes the default configuration if no file exists yet.
    pub fn ensure_config_file(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&RootConfig::default())
            .map_err(|e| MotoError::Serialization {
                format: "TOML".to_string(),
                message: e.to_string(),
            })?;
        std::fs::write(&self.path, content)?;
        tracing::info!("[Config] Wrote default config to {}", self.path.display());
        Ok(())
    }

    fn load_config(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            tracing::debug!("[Config] {} not found, using defaults", self.path.display());
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            MotoError::io(format!(
                "Failed to read config file at {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let config = RootConfig::from_toml_str(&content)?;
        tracing::info!("[Config] Loaded {}", self.path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::new(&MotodbPaths::new(Some(dir.path()))).unwrap();

        assert_eq!(service.get_config().unwrap(), RootConfig::default());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_reads_and_caches_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[assistant]\ntimeout_secs = 5\n").unwrap();

        let service = ConfigService::from_file(&path);
        assert_eq!(service.get_config().unwrap().assistant.timeout_secs, 5);

        std::fs::write(&path, "[assistant]\ntimeout_secs = 9\n").unwrap();
        assert_eq!(service.get_config().unwrap().assistant.timeout_secs, 5);

        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().assistant.timeout_secs, 9);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[assistant\n").unwrap();

        let err = ConfigService::from_file(&path).get_config().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_ensure_config_file_round_trips_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::from_file(dir.path().join("sub").join("config.toml"));

        service.ensure_config_file().unwrap();
        assert!(service.path().exists());
        assert_eq!(service.get_config().unwrap(), RootConfig::default());
    }
}
