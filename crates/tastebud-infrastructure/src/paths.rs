//! Unified path management for tastebud files.
//!
//! Config and data directories come from `AppPaths` in the version-migrate
//! crate so every store agrees on locations across platforms.

use std::path::PathBuf;
use version_migrate::AppPaths;

use tastebud_core::config::AppConfig;
use tastebud_core::error::{Result, TastebudError};

/// Resolved locations of every tastebud file.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/tastebud/          # Config directory
/// ├── config.toml              # Application configuration
/// └── profile.json             # Versioned user profile
///
/// ~/.local/share/tastebud/     # Data directory
/// ├── catalog.json             # Restaurant catalog
/// └── images/                  # Uploaded restaurant photos
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TastebudPaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl TastebudPaths {
    const APP_NAME: &'static str = "tastebud";
    const CONFIG_FILE: &'static str = "config.toml";
    const PROFILE_FILE: &'static str = "profile.json";
    const CATALOG_FILE: &'static str = "catalog.json";
    const IMAGES_DIR: &'static str = "images";

    /// Resolves the platform directories.
    pub fn resolve() -> Result<Self> {
        let app_paths = AppPaths::new(Self::APP_NAME);
        let config_dir = app_paths
            .config_dir()
            .map_err(|e| TastebudError::config(format!("Cannot find config directory: {e}")))?;
        let data_dir = app_paths
            .data_dir()
            .map_err(|e| TastebudError::config(format!("Cannot find data directory: {e}")))?;
        Ok(Self {
            config_dir,
            data_dir,
        })
    }

    /// Puts everything under one root (tests, `--home` overrides).
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_dir: root.join("config"),
            data_dir: root.join("data"),
        }
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(Self::CONFIG_FILE)
    }

    pub fn profile_file(&self) -> PathBuf {
        self.config_dir.join(Self::PROFILE_FILE)
    }

    /// Catalog file, honoring `catalog.path` from the config.
    pub fn catalog_file(&self, config: &AppConfig) -> PathBuf {
        match &config.catalog.path {
            Some(path) => PathBuf::from(path),
            None => self.data_dir.join(Self::CATALOG_FILE),
        }
    }

    /// Upload directory, honoring `images.dir` from the config.
    pub fn images_dir(&self, config: &AppConfig) -> PathBuf {
        match &config.images.dir {
            Some(dir) => PathBuf::from(dir),
            None => self.data_dir.join(Self::IMAGES_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_root_layout() {
        let paths = TastebudPaths::with_root("/tmp/tb");
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/tb/config/config.toml"));
        assert_eq!(paths.profile_file(), PathBuf::from("/tmp/tb/config/profile.json"));

        let config = AppConfig::default();
        assert_eq!(
            paths.catalog_file(&config),
            PathBuf::from("/tmp/tb/data/catalog.json")
        );
        assert_eq!(paths.images_dir(&config), PathBuf::from("/tmp/tb/data/images"));
    }

    #[test]
    fn test_config_overrides() {
        let paths = TastebudPaths::with_root("/tmp/tb");
        let mut config = AppConfig::default();
        config.catalog.path = Some("/srv/catalog.json".to_string());
        config.images.dir = Some("/srv/img".to_string());

        assert_eq!(paths.catalog_file(&config), PathBuf::from("/srv/catalog.json"));
        assert_eq!(paths.images_dir(&config), PathBuf::from("/srv/img"));
    }
}
