//! UserProfile domain model.
//!
//! Represents the durable preference record: identity, location, the four
//! preference categories and the budget range.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TastebudError};

pub const TASTE_PROFILES: [&str; 8] = [
    "Sweet", "Savory", "Spicy", "Sour", "Umami", "Bitter", "Smoky", "Tangy",
];

pub const DIETARY_PREFERENCES: [&str; 11] = [
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Dairy-Free",
    "Keto",
    "Paleo",
    "Halal",
    "Kosher",
    "Pescatarian",
    "Low-Carb",
    "Nut-Free",
];

pub const MEAL_CATEGORIES: [&str; 9] = [
    "Breakfast",
    "Brunch",
    "Lunch",
    "Dinner",
    "Dessert",
    "Snacks",
    "Coffee & Tea",
    "Drinks",
    "Late Night",
];

pub const DINING_OCCASIONS: [&str; 10] = [
    "Casual Dining",
    "Fine Dining",
    "Fast Food",
    "Takeout",
    "Delivery",
    "Date Night",
    "Family Meal",
    "Business Lunch",
    "Quick Bite",
    "Food Truck",
];

pub const AVATAR_OPTIONS: [&str; 16] = [
    "😊", "😎", "🤩", "🥳", "😄", "🤗", "🤓", "🧐", "😇", "🤠", "🥰", "😋", "🤤", "🤔", "🧑‍🍳",
    "👩‍🍳",
];

pub const DEFAULT_AVATAR: &str = "😊";
pub const DEFAULT_BUDGET_MIN: u32 = 50;
pub const DEFAULT_BUDGET_MAX: u32 = 2000;

/// User profile domain model.
///
/// This is a version-agnostic domain model; the persisted shape lives in
/// versioned DTOs in the infrastructure crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// City or postal code, free text.
    pub location: String,
    pub avatar: String,
    pub taste_profile: Vec<String>,
    pub dietary_preferences: Vec<String>,
    pub meal_categories: Vec<String>,
    pub dining_occasions: Vec<String>,
    pub budget_min: u32,
    pub budget_max: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            avatar: DEFAULT_AVATAR.to_string(),
            taste_profile: Vec::new(),
            dietary_preferences: Vec::new(),
            meal_categories: Vec::new(),
            dining_occasions: Vec::new(),
            budget_min: DEFAULT_BUDGET_MIN,
            budget_max: DEFAULT_BUDGET_MAX,
        }
    }
}

impl UserProfile {
    /// True when any of the four preference categories has a selection.
    pub fn has_preferences(&self) -> bool {
        !(self.taste_profile.is_empty()
            && self.dietary_preferences.is_empty()
            && self.meal_categories.is_empty()
            && self.dining_occasions.is_empty())
    }

    /// Name to greet the user with.
    pub fn greeting_name(&self) -> &str {
        match self.name.trim() {
            "" => "there",
            name => name,
        }
    }

    /// Validates the form and returns the profile as it should be stored
    /// (name and location trimmed).
    pub fn prepared_for_save(&self) -> Result<UserProfile> {
        let name = self.name.trim();
        let location = self.location.trim();
        if name.is_empty() || location.is_empty() {
            return Err(TastebudError::validation(
                "profile",
                "please fill in your name and location",
            ));
        }
        if !self.has_preferences() {
            return Err(TastebudError::validation(
                "preferences",
                "please select at least one preference from any category",
            ));
        }
        if self.budget_min >= self.budget_max {
            return Err(TastebudError::validation(
                "budget",
                "minimum budget must be less than maximum budget",
            ));
        }

        Ok(UserProfile {
            name: name.to_string(),
            location: location.to_string(),
            ..self.clone()
        })
    }
}

/// Toggles `item` in a preference list, keeping selection order.
pub fn toggle_preference(list: &mut Vec<String>, item: &str) {
    if let Some(pos) = list.iter().position(|i| i == item) {
        list.remove(pos);
    } else {
        list.push(item.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> UserProfile {
        UserProfile {
            name: " Ana ".to_string(),
            location: "1226".to_string(),
            taste_profile: vec!["Spicy".to_string()],
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_default_budget() {
        let profile = UserProfile::default();
        assert_eq!((profile.budget_min, profile.budget_max), (50, 2000));
        assert_eq!(profile.avatar, DEFAULT_AVATAR);
        assert!(!profile.has_preferences());
    }

    #[test]
    fn test_prepared_for_save_trims() {
        let saved = complete().prepared_for_save().unwrap();
        assert_eq!(saved.name, "Ana");
        assert_eq!(saved.taste_profile, vec!["Spicy"]);
    }

    #[test]
    fn test_save_requires_name_and_location() {
        let profile = UserProfile {
            location: "  ".to_string(),
            ..complete()
        };
        assert!(profile.prepared_for_save().unwrap_err().is_validation());
    }

    #[test]
    fn test_save_requires_a_preference() {
        let profile = UserProfile {
            taste_profile: Vec::new(),
            ..complete()
        };
        assert!(profile.prepared_for_save().is_err());

        let profile = UserProfile {
            taste_profile: Vec::new(),
            dining_occasions: vec!["Date Night".to_string()],
            ..complete()
        };
        assert!(profile.prepared_for_save().is_ok());
    }

    #[test]
    fn test_save_requires_increasing_budget() {
        let profile = UserProfile {
            budget_min: 500,
            budget_max: 500,
            ..complete()
        };
        assert!(profile.prepared_for_save().is_err());
    }

    #[test]
    fn test_toggle_preference() {
        let mut list = Vec::new();
        toggle_preference(&mut list, "Vegan");
        toggle_preference(&mut list, "Keto");
        toggle_preference(&mut list, "Vegan");
        assert_eq!(list, vec!["Keto"]);
    }

    #[test]
    fn test_greeting_name() {
        assert_eq!(UserProfile::default().greeting_name(), "there");
        assert_eq!(complete().greeting_name(), "Ana");
    }
}
