//! UserProfile DTOs and migrations

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, MigratesTo, Versioned};

use tastebud_core::user::{DEFAULT_AVATAR, DEFAULT_BUDGET_MAX, DEFAULT_BUDGET_MIN, UserProfile};

/// User profile V1.0.0, written by onboarding: identity plus food tags.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct UserProfileV1_0 {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// User profile V1.1.0 (preference categories, avatar and budget).
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
#[serde(rename_all = "camelCase")]
pub struct UserProfileV1_1 {
    pub name: String,
    pub location: String,
    #[serde(default = "default_avatar")]
    pub avatar: String,
    #[serde(default)]
    pub taste_profile: Vec<String>,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    #[serde(default)]
    pub meal_categories: Vec<String>,
    #[serde(default)]
    pub dining_occasions: Vec<String>,
    #[serde(default = "default_budget_min")]
    pub budget_min: u32,
    #[serde(default = "default_budget_max")]
    pub budget_max: u32,
}

/// Type alias for the latest UserProfile version.
pub type UserProfileDTO = UserProfileV1_1;

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

fn default_budget_min() -> u32 {
    DEFAULT_BUDGET_MIN
}

fn default_budget_max() -> u32 {
    DEFAULT_BUDGET_MAX
}

// ============================================================================
// Migration implementations
// ============================================================================

/// Onboarding tags become the taste profile.
impl MigratesTo<UserProfileV1_1> for UserProfileV1_0 {
    fn migrate(self) -> UserProfileV1_1 {
        UserProfileV1_1 {
            name: self.name,
            location: self.location,
            avatar: default_avatar(),
            taste_profile: self.tags,
            dietary_preferences: Vec::new(),
            meal_categories: Vec::new(),
            dining_occasions: Vec::new(),
            budget_min: DEFAULT_BUDGET_MIN,
            budget_max: DEFAULT_BUDGET_MAX,
        }
    }
}

// ============================================================================
// Domain model conversions
// ============================================================================

impl IntoDomain<UserProfile> for UserProfileV1_0 {
    fn into_domain(self) -> UserProfile {
        self.migrate().into_domain()
    }
}

impl IntoDomain<UserProfile> for UserProfileV1_1 {
    fn into_domain(self) -> UserProfile {
        UserProfile {
            name: self.name,
            location: self.location,
            avatar: self.avatar,
            taste_profile: self.taste_profile,
            dietary_preferences: self.dietary_preferences,
            meal_categories: self.meal_categories,
            dining_occasions: self.dining_occasions,
            budget_min: self.budget_min,
            budget_max: self.budget_max,
        }
    }
}

impl FromDomain<UserProfile> for UserProfileV1_1 {
    fn from_domain(profile: UserProfile) -> Self {
        UserProfileV1_1 {
            name: profile.name,
            location: profile.location,
            avatar: profile.avatar,
            taste_profile: profile.taste_profile,
            dietary_preferences: profile.dietary_preferences,
            meal_categories: profile.meal_categories,
            dining_occasions: profile.dining_occasions,
            budget_min: profile.budget_min,
            budget_max: profile.budget_max,
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for UserProfile entities.
///
/// # Migration Path
///
/// - V1.0.0 → V1.1.0: tags become taste_profile; other categories empty,
///   default avatar and budget
/// - V1.1.0 → UserProfile: Converts DTO to domain model
pub fn create_user_profile_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    // Register migration path: V1.0 -> V1.1 -> UserProfile
    let user_profile_path = version_migrate::Migrator::define("user_profile")
        .from::<UserProfileV1_0>()
        .step::<UserProfileV1_1>()
        .into_with_save::<UserProfile>();

    migrator
        .register(user_profile_path)
        .expect("Failed to register user_profile migration path");

    migrator
}
