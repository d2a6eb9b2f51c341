//! Profile service for loading and saving user preferences.
//!
//! The profile lives in an external store. A missing profile is a normal
//! first-run condition, not an error.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::UserProfile;
use crate::error::Result;

/// Access to the durable user profile.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Loads the stored profile, or `None` if the user has none yet.
    async fn load(&self) -> Result<Option<UserProfile>>;

    /// Persists the profile. Called only on an explicit save action.
    async fn save(&self, profile: &UserProfile) -> Result<()>;

    /// Loads the profile, treating "not found" as the default profile.
    async fn load_or_default(&self) -> Result<UserProfile> {
        match self.load().await {
            Ok(profile) => Ok(profile.unwrap_or_default()),
            Err(e) if e.is_not_found_or_missing() => Ok(UserProfile::default()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory implementation for single-session use and tests.
#[derive(Debug, Default)]
pub struct InMemoryProfileService {
    profile: RwLock<Option<UserProfile>>,
}

impl InMemoryProfileService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: RwLock::new(Some(profile)),
        }
    }
}

#[async_trait]
impl ProfileService for InMemoryProfileService {
    async fn load(&self) -> Result<Option<UserProfile>> {
        Ok(self.profile.read().await.clone())
    }

    async fn save(&self, profile: &UserProfile) -> Result<()> {
        *self.profile.write().await = Some(profile.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TastebudError;

    struct MissingStore;

    #[async_trait]
    impl ProfileService for MissingStore {
        async fn load(&self) -> Result<Option<UserProfile>> {
            Err(TastebudError::not_found("user_profile", "me"))
        }

        async fn save(&self, _profile: &UserProfile) -> Result<()> {
            Err(TastebudError::remote("offline"))
        }
    }

    #[tokio::test]
    async fn test_in_memory_round_trip() {
        let service = InMemoryProfileService::new();
        assert!(service.load().await.unwrap().is_none());

        let profile = UserProfile {
            name: "Ana".to_string(),
            ..UserProfile::default()
        };
        service.save(&profile).await.unwrap();
        assert_eq!(service.load().await.unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn test_not_found_is_default() {
        let profile = MissingStore.load_or_default().await.unwrap();
        assert_eq!(profile, UserProfile::default());
    }
}
