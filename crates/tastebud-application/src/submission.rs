//! Add-restaurant flow: image upload, optional geocoding, catalog insert.

use anyhow::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use tastebud_core::TastebudError;
use tastebud_core::location::{Coordinates, Geocoder};
use tastebud_core::media::{ImageStore, ImageUpload};
use tastebud_core::restaurant::{CatalogRepository, RestaurantDraft, RestaurantRecord};

/// Where the stored image URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    Uploaded,
    /// The store failed; the image is inlined as a `data:` URL.
    Inline,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    pub record: RestaurantRecord,
    pub image_source: ImageSource,
    /// `false` when the catalog insert failed and the record only lives in
    /// this session.
    pub persisted: bool,
}

pub struct RestaurantSubmissionService {
    catalog_repository: Arc<dyn CatalogRepository>,
    image_store: Arc<dyn ImageStore>,
    geocoder: Option<Arc<dyn Geocoder>>,
}

impl RestaurantSubmissionService {
    pub fn new(
        catalog_repository: Arc<dyn CatalogRepository>,
        image_store: Arc<dyn ImageStore>,
        geocoder: Option<Arc<dyn Geocoder>>,
    ) -> Self {
        Self {
            catalog_repository,
            image_store,
            geocoder,
        }
    }

    /// Looks up coordinates for an address.
    ///
    /// `Ok(None)` means the provider had no match; the form keeps its
    /// current coordinates in that case.
    pub async fn geocode_address(&self, address: &str) -> Result<Option<Coordinates>> {
        let geocoder = self
            .geocoder
            .as_ref()
            .ok_or_else(|| TastebudError::config("Geocoding is not configured"))?;
        Ok(geocoder.geocode(address).await?)
    }

    /// Validates, uploads the image, and stores the new restaurant.
    ///
    /// Only validation errors are returned. Upload and insert failures are
    /// logged and degrade to an inline image or an unpersisted record.
    pub async fn submit(
        &self,
        draft: RestaurantDraft,
        image: ImageUpload,
    ) -> Result<SubmissionOutcome> {
        draft.validate()?;
        image.validate()?;

        let (image_url, image_source) = match self.image_store.upload(&image).await {
            Ok(url) => (url, ImageSource::Uploaded),
            Err(e) => {
                tracing::warn!("Image upload failed, inlining image: {}", e);
                (inline_data_url(&image), ImageSource::Inline)
            }
        };

        let record = draft.into_record(Uuid::new_v4().to_string(), image_url);
        let (record, persisted) = match self.catalog_repository.insert(&record).await {
            Ok(stored) => (stored, true),
            Err(e) => {
                tracing::warn!("Failed to store restaurant '{}': {}", record.name, e);
                (record, false)
            }
        };

        tracing::info!("Restaurant '{}' added (persisted: {})", record.name, persisted);
        Ok(SubmissionOutcome {
            record,
            image_source,
            persisted,
        })
    }
}

fn inline_data_url(image: &ImageUpload) -> String {
    format!(
        "data:{};base64,{}",
        image.mime_type,
        BASE64_STANDARD.encode(&image.bytes)
    )
}
