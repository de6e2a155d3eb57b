//! Configuration loading and management

use crate::brands::default_brand_images;
use crate::core::{PriceRange, SortMode, StorefrontError};
use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Storefront configuration
///
/// Every field is optional in YAML; missing fields take the storefront
/// defaults.
///
/// # Example
/// ```yaml
/// listen_addr: "0.0.0.0:8080"
/// default_sort: newest
/// default_price_range: { min: 0, max: 25000 }
/// login_path: /signin
/// brand_images:
///   lasoon: /brands/lasoon-2025.jpg
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Address the HTTP server binds to
    pub listen_addr: String,

    /// Sort mode used when a listing request names none
    pub default_sort: SortMode,

    /// Price bounds used when a listing request names none
    pub default_price_range: PriceRange,

    /// Where signed-out users are redirected
    pub login_path: String,

    /// Brand artwork overrides keyed by brand id
    pub brand_images: IndexMap<String, String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3000".to_string(),
            default_sort: SortMode::Manual,
            default_price_range: PriceRange::default(),
            login_path: "/login".to_string(),
            brand_images: default_brand_images(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| StorefrontError::Config(format!("cannot read {}: {}", path, e)))?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path, "loaded storefront configuration");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| StorefrontError::Config(format!("invalid YAML: {}", e)))?;
        Ok(config)
    }
}
