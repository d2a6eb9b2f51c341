//! User-submitted restaurant drafts (the "add restaurant" form).

use serde::{Deserialize, Serialize};

use super::model::{PriceTier, RestaurantRecord};
use crate::error::{Result, TastebudError};
use crate::location::Coordinates;

/// Cuisine label used when the submitter leaves it blank.
pub const DEFAULT_CUISINE: &str = "Various";

/// Form state for a restaurant that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDraft {
    pub name: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub description: String,
    pub address: String,
    #[serde(default)]
    pub price_tier: PriceTier,
    pub price_min: u32,
    pub price_max: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub coordinates: Coordinates,
}

impl Default for RestaurantDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            cuisine: String::new(),
            description: String::new(),
            address: String::new(),
            price_tier: PriceTier::Moderate,
            price_min: 200,
            price_max: 500,
            tags: Vec::new(),
            coordinates: Coordinates::DEFAULT,
        }
    }
}

impl RestaurantDraft {
    /// Adds the tag if absent, removes it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    /// Picks a tier and resets the price range to its suggestion.
    pub fn set_price_tier(&mut self, tier: PriceTier) {
        self.price_tier = tier;
        (self.price_min, self.price_max) = tier.default_range();
    }

    /// Checks the form before anything is uploaded or stored.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TastebudError::validation("name", "please fill in a name"));
        }
        if self.address.trim().is_empty() {
            return Err(TastebudError::validation(
                "address",
                "please fill in an address",
            ));
        }
        if self.price_min >= self.price_max {
            return Err(TastebudError::validation(
                "price",
                "minimum price must be less than maximum price",
            ));
        }
        self.coordinates.validate()
    }

    /// Turns a validated draft into a catalog record.
    pub fn into_record(self, id: impl Into<String>, image: impl Into<String>) -> RestaurantRecord {
        let cuisine = match self.cuisine.trim() {
            "" => DEFAULT_CUISINE.to_string(),
            c => c.to_string(),
        };
        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        RestaurantRecord {
            id: id.into(),
            name: self.name.trim().to_string(),
            cuisine,
            image: image.into(),
            rating: 0.0,
            price_tier: self.price_tier,
            price_min: self.price_min,
            price_max: self.price_max,
            distance: 0.0,
            description: self.description.trim().to_string(),
            address: self.address.trim().to_string(),
            coordinates: self.coordinates,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RestaurantDraft {
        RestaurantDraft {
            name: "  Lola's Kitchen ".to_string(),
            address: "12 Jupiter St, Makati".to_string(),
            ..RestaurantDraft::default()
        }
    }

    #[test]
    fn test_defaults() {
        let draft = RestaurantDraft::default();
        assert_eq!(draft.price_tier, PriceTier::Moderate);
        assert_eq!((draft.price_min, draft.price_max), (200, 500));
        assert_eq!(draft.coordinates, Coordinates::DEFAULT);
    }

    #[test]
    fn test_set_price_tier_resets_range() {
        let mut draft = filled();
        draft.set_price_tier(PriceTier::Upscale);
        assert_eq!((draft.price_min, draft.price_max), (500, 1200));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_missing_name() {
        let draft = RestaurantDraft {
            name: "   ".to_string(),
            ..filled()
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, TastebudError::Validation { field: "name", .. }));
    }

    #[test]
    fn test_missing_address() {
        let draft = RestaurantDraft {
            address: String::new(),
            ..filled()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_price_range_must_be_increasing() {
        let draft = RestaurantDraft {
            price_min: 500,
            price_max: 500,
            ..filled()
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, TastebudError::Validation { field: "price", .. }));
    }

    #[test]
    fn test_toggle_tag() {
        let mut draft = filled();
        draft.toggle_tag("Spicy");
        draft.toggle_tag("Sweet");
        draft.toggle_tag("Spicy");
        assert_eq!(draft.tags, vec!["Sweet"]);
    }

    #[test]
    fn test_into_record_trims_and_defaults() {
        let record = filled().into_record("r-1", "https://img/1.jpg");
        assert_eq!(record.name, "Lola's Kitchen");
        assert_eq!(record.cuisine, DEFAULT_CUISINE);
        assert_eq!(record.rating, 0.0);
        assert!(record.validate().is_ok());
    }
}
