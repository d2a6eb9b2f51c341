//! Coordinates, geocoding and directions.
//!
//! Geocoding is delegated to an external mapping service behind the
//! [`Geocoder`] trait. Directions are a one-way hand-off to an external maps
//! target; the core only builds the URL.

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TastebudError};

/// Base URL of the external maps search used for directions.
pub const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/search/";

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Default pin for newly added restaurants (Makati, Metro Manila).
    pub const DEFAULT: Coordinates = Coordinates {
        latitude: 14.5547,
        longitude: 121.0244,
    };

    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checks that latitude is within ±90 and longitude within ±180.
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(TastebudError::validation(
                "latitude",
                format!("{} is outside -90..=90", self.latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(TastebudError::validation(
                "longitude",
                format!("{} is outside -180..=180", self.longitude),
            ));
        }
        Ok(())
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Forward geocoding: postal address to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves an address.
    ///
    /// Returns `Ok(None)` when the service has no match for the address;
    /// errors are reserved for failed calls.
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>>;
}

/// Builds the external directions URL for an address.
pub fn directions_url(address: &str) -> Result<Url> {
    Url::parse_with_params(DIRECTIONS_BASE_URL, &[("api", "1"), ("query", address)])
        .map_err(|e| TastebudError::internal(format!("Invalid directions URL: {}", e)))
}
