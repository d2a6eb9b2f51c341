//! First-run onboarding: identity first, then at least three taste tags.

use serde::{Deserialize, Serialize};

use super::model::{UserProfile, toggle_preference};
use crate::error::{Result, TastebudError};

pub const MIN_ONBOARDING_TAGS: usize = 3;

/// Which page of onboarding the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingStep {
    Identity,
    Tastes,
}

/// Onboarding form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingForm {
    pub name: String,
    pub location: String,
    pub tags: Vec<String>,
    step: OnboardingStep,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            tags: Vec::new(),
            step: OnboardingStep::Identity,
        }
    }
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        toggle_preference(&mut self.tags, tag);
    }

    /// Moves from the identity page to the taste page.
    pub fn next(&mut self) -> Result<()> {
        if self.name.trim().is_empty() || self.location.trim().is_empty() {
            return Err(TastebudError::validation(
                "onboarding",
                "please enter your name and location",
            ));
        }
        self.step = OnboardingStep::Tastes;
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = OnboardingStep::Identity;
    }

    pub fn can_finish(&self) -> bool {
        self.tags.len() >= MIN_ONBOARDING_TAGS
    }

    /// Produces the initial profile. Selected tags become the taste profile.
    pub fn finish(&self) -> Result<UserProfile> {
        if self.name.trim().is_empty() || self.location.trim().is_empty() {
            return Err(TastebudError::validation(
                "onboarding",
                "please enter your name and location",
            ));
        }
        if !self.can_finish() {
            return Err(TastebudError::validation(
                "tags",
                format!("please select at least {MIN_ONBOARDING_TAGS} tags"),
            ));
        }

        Ok(UserProfile {
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            taste_profile: self.tags.clone(),
            ..UserProfile::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> OnboardingForm {
        OnboardingForm {
            name: "Ana".to_string(),
            location: "Makati".to_string(),
            ..OnboardingForm::default()
        }
    }

    #[test]
    fn test_next_requires_identity() {
        let mut form = OnboardingForm::new();
        assert!(form.next().is_err());
        assert_eq!(form.step(), OnboardingStep::Identity);

        let mut form = filled();
        form.next().unwrap();
        assert_eq!(form.step(), OnboardingStep::Tastes);
    }

    #[test]
    fn test_finish_requires_three_tags() {
        let mut form = filled();
        form.toggle_tag("Pizza");
        form.toggle_tag("Sushi");
        assert!(!form.can_finish());
        assert!(form.finish().unwrap_err().is_validation());

        form.toggle_tag("Ramen");
        let profile = form.finish().unwrap();
        assert_eq!(profile.taste_profile, vec!["Pizza", "Sushi", "Ramen"]);
        assert_eq!(profile.budget_min, 50);
    }
}
