//! Catalog repository backed by a JSON file of backend rows.
//!
//! File location: `catalog.path` from the config, or `{data_dir}/catalog.json`.
//! Until the file exists the built-in seed catalog is served.

use async_trait::async_trait;
use std::path::PathBuf;

use tastebud_core::TastebudError;
use tastebud_core::error::Result;
use tastebud_core::restaurant::{CatalogRepository, RestaurantRecord};

use crate::dto::{RestaurantRow, parse_rows};
use crate::seed::seed_rows;
use crate::storage::{AtomicFile, AtomicFileError, FileFormat};

pub struct FileCatalogRepository {
    path: PathBuf,
}

impl FileCatalogRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn file(&self) -> AtomicFile<serde_json::Value> {
        AtomicFile::json(self.path.clone())
    }

    fn load_document(file: &AtomicFile<serde_json::Value>) -> Result<serde_json::Value> {
        match file.load()? {
            Some(document) => Ok(document),
            None => {
                tracing::info!(
                    "No catalog at {}, serving seed catalog",
                    file.path().display()
                );
                Ok(seed_rows())
            }
        }
    }
}

#[async_trait]
impl CatalogRepository for FileCatalogRepository {
    async fn list_all(&self) -> Result<Vec<RestaurantRecord>> {
        let file = self.file();
        let document = tokio::task::spawn_blocking(move || Self::load_document(&file))
            .await
            .map_err(|e| TastebudError::internal(format!("Catalog load task failed: {}", e)))??;

        let (records, rejected) = parse_rows(document)?;
        for row in &rejected {
            tracing::warn!("Skipping catalog row {}: {}", row.index, row.error);
        }
        tracing::info!("Loaded {} restaurants from catalog", records.len());
        Ok(records)
    }

    async fn insert(&self, record: &RestaurantRecord) -> Result<RestaurantRecord> {
        record.validate()?;

        let file = self.file();
        let row = serde_json::to_value(RestaurantRow::from(record))?;
        let id = record.id.clone();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut duplicate = false;
            let written = file.update(seed_rows(), |document| {
                let (existing, _) =
                    parse_rows(document.clone()).map_err(|e| AtomicFileError::Format {
                        format: FileFormat::Json,
                        message: e.to_string(),
                    })?;
                if existing.iter().any(|r| r.id == id) {
                    duplicate = true;
                    return Err(AtomicFileError::Format {
                        format: FileFormat::Json,
                        message: format!("restaurant '{id}' already exists"),
                    });
                }
                match document {
                    serde_json::Value::Array(rows) => {
                        rows.push(row);
                        Ok(())
                    }
                    _ => Err(AtomicFileError::Format {
                        format: FileFormat::Json,
                        message: "catalog must be an array of restaurant rows".to_string(),
                    }),
                }
            });
            if duplicate {
                return Err(TastebudError::validation(
                    "id",
                    format!("restaurant '{id}' already exists"),
                ));
            }
            Ok(written?)
        })
        .await
        .map_err(|e| TastebudError::internal(format!("Catalog insert task failed: {}", e)))??;

        tracing::info!("Inserted restaurant '{}' into {}", record.name, self.path.display());
        Ok(record.clone())
    }
}
