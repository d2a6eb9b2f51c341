//! Profile store backed by a versioned JSON file.
//!
//! File location: `{config_dir}/profile.json`

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use version_migrate::Migrator;

use tastebud_core::TastebudError;
use tastebud_core::error::Result;
use tastebud_core::user::{ProfileService, UserProfile};

use crate::dto::create_user_profile_migrator;
use crate::paths::TastebudPaths;
use crate::storage::AtomicFile;

/// File-based profile store with version migration support.
pub struct FileProfileRepository {
    path: PathBuf,
    migrator: Migrator,
}

impl FileProfileRepository {
    pub fn new(paths: &TastebudPaths) -> Self {
        Self::with_path(paths.profile_file())
    }

    /// Creates a repository on an explicit file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            migrator: create_user_profile_migrator(),
        }
    }
}

#[async_trait]
impl ProfileService for FileProfileRepository {
    async fn load(&self) -> Result<Option<UserProfile>> {
        if !self.path.exists() {
            tracing::debug!("No profile at {}", self.path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| TastebudError::io(format!("Failed to read profile: {}", e)))?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let json_value: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
            TastebudError::serialization("JSON", format!("Failed to parse profile: {}", e))
        })?;

        let profile: UserProfile = self
            .migrator
            .load_flat_from("user_profile", json_value)
            .map_err(|e| TastebudError::migration(format!("Failed to migrate profile: {}", e)))?;

        Ok(Some(profile))
    }

    async fn save(&self, profile: &UserProfile) -> Result<()> {
        let serialized = self
            .migrator
            .save_domain_flat("user_profile", profile.clone())
            .map_err(|e| {
                TastebudError::serialization("JSON", format!("Failed to serialize profile: {}", e))
            })?;

        let file = AtomicFile::<serde_json::Value>::json(self.path.clone());
        tokio::task::spawn_blocking(move || file.write_atomic(serialized.as_bytes()))
            .await
            .map_err(|e| TastebudError::internal(format!("Profile save task failed: {}", e)))??;

        tracing::info!("Saved profile to {}", self.path.display());
        Ok(())
    }
}
