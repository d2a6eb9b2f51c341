//! Forward geocoding against a Mapbox-style `places` endpoint.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;

use tastebud_core::TastebudError;
use tastebud_core::config::GeocodingSettings;
use tastebud_core::error::Result;
use tastebud_core::location::{Coordinates, Geocoder};

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    /// `[longitude, latitude]`
    center: Vec<f64>,
}

#[derive(Clone)]
pub struct MapboxGeocoder {
    client: Client,
    settings: GeocodingSettings,
}

impl MapboxGeocoder {
    pub fn new(settings: GeocodingSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    /// `{endpoint}/{address}.json?access_token=..&country=..`
    fn request_url(&self, address: &str) -> Result<Url> {
        let mut url = Url::parse(&self.settings.endpoint)
            .map_err(|e| TastebudError::config(format!("Invalid geocoding endpoint: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| TastebudError::config("Geocoding endpoint cannot be a base URL"))?
            .pop_if_empty()
            .push(&format!("{address}.json"));
        url.query_pairs_mut()
            .append_pair("access_token", &self.settings.access_token)
            .append_pair("country", &self.settings.country);
        Ok(url)
    }
}

/// Takes the first feature's center; an empty result is `None`.
fn first_match(response: GeocodeResponse) -> Result<Option<Coordinates>> {
    let Some(feature) = response.features.into_iter().next() else {
        return Ok(None);
    };
    match feature.center.as_slice() {
        [longitude, latitude, ..] => {
            let coordinates = Coordinates::new(*latitude, *longitude);
            coordinates.validate()?;
            Ok(Some(coordinates))
        }
        _ => Err(TastebudError::remote("Geocoding feature has no center")),
    }
}

#[async_trait]
impl Geocoder for MapboxGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>> {
        let address = address.trim();
        if address.is_empty() {
            return Err(TastebudError::validation(
                "address",
                "please enter an address to get coordinates",
            ));
        }
        if !self.settings.is_enabled() {
            return Err(TastebudError::config("No geocoding access token configured"));
        }

        let url = self.request_url(address)?;
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(10))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TastebudError::remote(format!(
                "Geocoding API error ({}): {}",
                status, error_text
            )));
        }

        let body: GeocodeResponse = response.json().await?;
        let found = first_match(body)?;
        match &found {
            Some(c) => tracing::debug!("Geocoded '{}' to {}, {}", address, c.latitude, c.longitude),
            None => tracing::info!("No geocoding match for '{}'", address),
        }
        Ok(found)
    }
}
