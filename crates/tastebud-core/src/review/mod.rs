//! Restaurant reviews.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, TastebudError};

pub const MIN_REVIEW_RATING: u8 = 1;
pub const MAX_REVIEW_RATING: u8 = 5;
pub const DEFAULT_AUTHOR: &str = "You";

/// A submitted review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub restaurant_id: String,
    pub rating: u8,
    pub comment: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Review form state. A rating of 0 means none was picked yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub rating: u8,
    pub comment: String,
}

impl ReviewDraft {
    pub fn new(rating: u8, comment: impl Into<String>) -> Self {
        Self {
            rating,
            comment: comment.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rating == 0 {
            return Err(TastebudError::validation("rating", "please select a rating"));
        }
        if !(MIN_REVIEW_RATING..=MAX_REVIEW_RATING).contains(&self.rating) {
            return Err(TastebudError::validation(
                "rating",
                format!(
                    "rating must be between {MIN_REVIEW_RATING} and {MAX_REVIEW_RATING}, got {}",
                    self.rating
                ),
            ));
        }
        Ok(())
    }

    /// Validates and stamps the draft into a [`Review`].
    pub fn submit(&self, restaurant_id: &str, now: DateTime<Utc>) -> Result<Review> {
        self.validate()?;
        Ok(Review {
            id: Uuid::new_v4().to_string(),
            restaurant_id: restaurant_id.to_string(),
            rating: self.rating,
            comment: self.comment.trim().to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            created_at: now,
        })
    }
}

/// Reviews grouped by restaurant id.
#[derive(Debug, Clone, Default)]
pub struct ReviewBook {
    by_restaurant: HashMap<String, Vec<Review>>,
}

impl ReviewBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, review: Review) {
        self.by_restaurant
            .entry(review.restaurant_id.clone())
            .or_default()
            .push(review);
    }

    /// Reviews for one restaurant, newest first. Equal timestamps keep the
    /// latest addition first.
    pub fn for_restaurant(&self, restaurant_id: &str) -> Vec<&Review> {
        let mut reviews: Vec<&Review> = self
            .by_restaurant
            .get(restaurant_id)
            .map(|list| list.iter().rev().collect())
            .unwrap_or_default();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reviews
    }

    pub fn average_rating(&self, restaurant_id: &str) -> Option<f64> {
        let list = self.by_restaurant.get(restaurant_id)?;
        if list.is_empty() {
            return None;
        }
        let total: u32 = list.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(total) / list.len() as f64)
    }
}
