pub mod config_service;
pub mod dto;
pub mod file_catalog_repository;
pub mod file_profile_repository;
pub mod local_image_store;
pub mod mapbox_geocoder;
pub mod paths;
pub mod seed;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::file_catalog_repository::FileCatalogRepository;
pub use crate::file_profile_repository::FileProfileRepository;
pub use crate::local_image_store::LocalImageStore;
pub use crate::mapbox_geocoder::MapboxGeocoder;
pub use crate::paths::TastebudPaths;
