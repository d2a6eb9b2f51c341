//! User profile: preferences, onboarding and the profile store seam.

mod model;
mod onboarding;
mod service;

pub use model::{
    AVATAR_OPTIONS, DEFAULT_AVATAR, DEFAULT_BUDGET_MAX, DEFAULT_BUDGET_MIN, DIETARY_PREFERENCES,
    DINING_OCCASIONS, MEAL_CATEGORIES, TASTE_PROFILES, UserProfile, toggle_preference,
};
pub use onboarding::{MIN_ONBOARDING_TAGS, OnboardingForm, OnboardingStep};
pub use service::{InMemoryProfileService, ProfileService};
