//! Configuration service implementation.
//!
//! Loads `AppConfig` from `config.toml` in the config directory and caches it.

use std::sync::{Arc, RwLock};

use tastebud_core::config::AppConfig;
use tastebud_core::error::Result;

use crate::paths::TastebudPaths;
use crate::storage::AtomicFile;

/// Loads and caches the application configuration.
///
/// The file is read lazily on first access. A missing file is created with
/// the default configuration so users have something to edit.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: TastebudPaths,
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    pub fn new(paths: TastebudPaths) -> Self {
        Self {
            paths,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn paths(&self) -> &TastebudPaths {
        &self.paths
    }

    /// Gets the configuration, loading it from disk if not cached.
    ///
    /// Unreadable files fall back to defaults with a warning.
    pub fn get_config(&self) -> AppConfig {
        self.try_get_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        })
    }

    /// Like [`get_config`](Self::get_config) but returns the load error.
    ///
    /// Defaults are cached on failure, so later calls succeed with them.
    pub fn try_get_config(&self) -> Result<AppConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config();
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.as_ref().cloned().unwrap_or_default());
        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    fn load_config(&self) -> Result<AppConfig> {
        let file = AtomicFile::<AppConfig>::toml(self.paths.config_file());
        match file.load()? {
            Some(config) => {
                tracing::debug!("Loaded config from {}", file.path().display());
                Ok(config)
            }
            None => {
                let config = AppConfig::default();
                file.save(&config)?;
                tracing::info!("Wrote default config to {}", file.path().display());
                Ok(config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_written_back() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TastebudPaths::with_root(temp_dir.path());
        let service = ConfigService::new(paths.clone());

        assert_eq!(service.get_config(), AppConfig::default());
        assert!(paths.config_file().exists());
    }

    #[test]
    fn test_cache_and_invalidate() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TastebudPaths::with_root(temp_dir.path());
        let service = ConfigService::new(paths.clone());
        service.get_config();

        fs::write(
            paths.config_file(),
            "[debug]\nlog_level = \"trace\"\n",
        )
        .unwrap();
        assert_eq!(service.get_config().debug.log_level, "info");

        service.invalidate_cache();
        assert_eq!(service.get_config().debug.log_level, "trace");
    }

    #[test]
    fn test_corrupt_config_surfaces_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TastebudPaths::with_root(temp_dir.path());
        fs::create_dir_all(paths.config_dir()).unwrap();
        fs::write(paths.config_file(), "[debug\nlog_level = ").unwrap();

        let service = ConfigService::new(paths);
        assert!(service.try_get_config().is_err());
        assert_eq!(service.try_get_config().unwrap(), AppConfig::default());
    }
}
