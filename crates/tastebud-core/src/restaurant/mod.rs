//! Restaurant domain module.
//!
//! # Module Structure
//!
//! - `model`: `RestaurantRecord` and `PriceTier`
//! - `catalog`: shared read-only `Catalog`
//! - `draft`: add-restaurant form validation
//! - `repository`: `CatalogRepository` trait

mod catalog;
mod draft;
mod model;
mod repository;

pub use catalog::Catalog;
pub use draft::{DEFAULT_CUISINE, RestaurantDraft};
pub use model::{PriceTier, RestaurantRecord};
pub use repository::CatalogRepository;

#[cfg(test)]
pub(crate) use model::fixtures;
