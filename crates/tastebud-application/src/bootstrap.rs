//! Wires file-backed stores and remote providers into the use cases.

use std::sync::Arc;

use tastebud_core::config::AppConfig;
use tastebud_core::location::Geocoder;
use tastebud_core::restaurant::CatalogRepository;
use tastebud_core::user::ProfileService;
use tastebud_infrastructure::{
    ConfigService, FileCatalogRepository, FileProfileRepository, LocalImageStore, MapboxGeocoder,
    TastebudPaths,
};

use crate::discovery_usecase::DiscoveryUseCase;
use crate::submission::RestaurantSubmissionService;

pub struct AppContext {
    pub config: AppConfig,
    pub paths: TastebudPaths,
    pub profile_service: Arc<dyn ProfileService>,
    pub discovery: DiscoveryUseCase,
    pub submissions: RestaurantSubmissionService,
}

impl AppContext {
    /// Builds every service under `paths`.
    ///
    /// Geocoding is only wired when an access token is configured.
    pub async fn load(paths: TastebudPaths) -> Self {
        let config = ConfigService::new(paths.clone()).get_config();

        let catalog_repository: Arc<dyn CatalogRepository> =
            Arc::new(FileCatalogRepository::new(paths.catalog_file(&config)));
        let profile_service: Arc<dyn ProfileService> = Arc::new(FileProfileRepository::new(&paths));
        let geocoder: Option<Arc<dyn Geocoder>> = if config.geocoding.is_enabled() {
            Some(Arc::new(MapboxGeocoder::new(config.geocoding.clone())))
        } else {
            tracing::debug!("Geocoding disabled: no access token");
            None
        };

        let discovery =
            DiscoveryUseCase::start(catalog_repository.clone(), profile_service.clone()).await;
        let submissions = RestaurantSubmissionService::new(
            catalog_repository,
            Arc::new(LocalImageStore::new(paths.images_dir(&config))),
            geocoder,
        );

        Self {
            config,
            paths,
            profile_service,
            discovery,
            submissions,
        }
    }
}
