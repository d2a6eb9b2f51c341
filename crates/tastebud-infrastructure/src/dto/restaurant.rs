//! Raw restaurant rows as the backend stores them.
//!
//! Rows are untrusted: every field is optional on the wire and the
//! conversion into [`RestaurantRecord`] is where defaults are filled in and
//! invariants are checked.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use tastebud_core::error::{Result, TastebudError};
use tastebud_core::location::Coordinates;
use tastebud_core::restaurant::{DEFAULT_CUISINE, PriceTier, RestaurantRecord};

/// One row of the `restaurants` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRow {
    /// Text or numeric primary key.
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub price_min: Option<u32>,
    #[serde(default)]
    pub price_max: Option<u32>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RestaurantRow {
    fn id_string(&self) -> Option<String> {
        match &self.id {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl TryFrom<RestaurantRow> for RestaurantRecord {
    type Error = TastebudError;

    fn try_from(row: RestaurantRow) -> Result<Self> {
        let id = row
            .id_string()
            .ok_or_else(|| TastebudError::validation("id", "missing or not a string/number"))?;

        let price_tier = match row.price_range.as_deref().map(str::trim) {
            None | Some("") => PriceTier::default(),
            Some(raw) => PriceTier::from_str(raw).map_err(|_| {
                TastebudError::validation("price_range", format!("unknown tier '{raw}'"))
            })?,
        };
        let (price_min, price_max) = match (row.price_min, row.price_max) {
            (Some(min), Some(max)) => (min, max),
            _ => {
                return Err(TastebudError::validation(
                    "price",
                    "price_min and price_max are required",
                ));
            }
        };

        let coordinates = match (row.latitude, row.longitude) {
            (Some(latitude), Some(longitude)) => Coordinates::new(latitude, longitude),
            _ => Coordinates::DEFAULT,
        };

        let mut tags: Vec<String> = Vec::with_capacity(row.tags.len());
        for tag in row.tags {
            let tag = tag.trim().to_string();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        let cuisine = row
            .cuisine
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CUISINE.to_string());

        let record = RestaurantRecord {
            id,
            name: row.name.unwrap_or_default().trim().to_string(),
            cuisine,
            image: row.image.unwrap_or_default(),
            rating: row.rating.unwrap_or(0.0),
            price_tier,
            price_min,
            price_max,
            distance: row.distance.unwrap_or(0.0),
            description: row.description.unwrap_or_default(),
            address: row.address.unwrap_or_default(),
            coordinates,
            tags,
        };
        record.validate()?;
        Ok(record)
    }
}

impl From<&RestaurantRecord> for RestaurantRow {
    fn from(record: &RestaurantRecord) -> Self {
        RestaurantRow {
            id: serde_json::Value::String(record.id.clone()),
            name: Some(record.name.clone()),
            cuisine: Some(record.cuisine.clone()),
            image: Some(record.image.clone()),
            rating: Some(record.rating),
            price_range: Some(record.price_tier.to_string()),
            price_min: Some(record.price_min),
            price_max: Some(record.price_max),
            distance: Some(record.distance),
            description: Some(record.description.clone()),
            address: Some(record.address.clone()),
            latitude: Some(record.coordinates.latitude),
            longitude: Some(record.coordinates.longitude),
            tags: record.tags.clone(),
        }
    }
}

/// A row that failed to parse, by position in the source array.
#[derive(Debug, Clone)]
pub struct RejectedRow {
    pub index: usize,
    pub error: TastebudError,
}

/// Parses a catalog document (a JSON array of rows).
///
/// Bad rows are collected rather than failing the whole catalog; a document
/// that is not an array is an error.
pub fn parse_rows(document: serde_json::Value) -> Result<(Vec<RestaurantRecord>, Vec<RejectedRow>)> {
    let serde_json::Value::Array(items) = document else {
        return Err(TastebudError::serialization(
            "JSON",
            "catalog must be an array of restaurant rows",
        ));
    };

    let mut records = Vec::with_capacity(items.len());
    let mut rejected = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        let parsed = serde_json::from_value::<RestaurantRow>(item)
            .map_err(TastebudError::from)
            .and_then(RestaurantRecord::try_from);
        match parsed {
            Ok(record) if records.iter().any(|r: &RestaurantRecord| r.id == record.id) => {
                rejected.push(RejectedRow {
                    index,
                    error: TastebudError::validation("id", format!("duplicate id '{}'", record.id)),
                });
            }
            Ok(record) => records.push(record),
            Err(error) => rejected.push(RejectedRow { index, error }),
        }
    }
    Ok((records, rejected))
}
