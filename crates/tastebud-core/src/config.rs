use serde::{Deserialize, Serialize};

pub const DEFAULT_GEOCODING_ENDPOINT: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";
pub const DEFAULT_GEOCODING_COUNTRY: &str = "PH";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub images: ImageSettings,
    #[serde(default)]
    pub geocoding: GeocodingSettings,
    #[serde(default)]
    pub debug: DebugSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSettings {
    /// Catalog file; defaults to `catalog.json` in the data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSettings {
    /// Upload directory; defaults to `images/` in the data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GeocodingSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Geocoding is skipped when no token is configured.
    #[serde(default)]
    pub access_token: String,
    #[serde(default = "default_country")]
    pub country: String,
}

impl Default for GeocodingSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            access_token: String::new(),
            country: default_country(),
        }
    }
}

impl GeocodingSettings {
    pub fn is_enabled(&self) -> bool {
        !self.access_token.trim().is_empty()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DebugSettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_GEOCODING_ENDPOINT.to_string()
}

fn default_country() -> String {
    DEFAULT_GEOCODING_COUNTRY.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [geocoding]
            access_token = "pk.test"
            "#,
        )
        .unwrap();

        assert!(config.geocoding.is_enabled());
        assert_eq!(config.geocoding.country, "PH");
        assert_eq!(config.debug.log_level, "info");
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_default_geocoding_disabled() {
        assert!(!AppConfig::default().geocoding.is_enabled());
    }
}
